// SPDX-License-Identifier: GPL-3.0-only

//! Static layout tables.
//!
//! Row tables carry labels as they appear on the physical key; the canonical
//! form is derived by the geometry builder. Shift pairs are keyed by the
//! canonical uppercase label so the map stays a subset of the layout's
//! rendered label set.

/// QWERTY rows, top to bottom.
pub(super) const QWERTY_ROWS: &[&[&str]] = &[
    &[
        "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace",
    ],
    &[
        "Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\",
    ],
    &[
        "Caps Lock", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "Enter",
    ],
    &[
        "Shift", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "/", "Shift",
    ],
    &["Ctrl", "Win", "Alt", "Space", "Alt", "Win", "Menu", "Ctrl"],
];

pub(super) const QWERTY_SHIFT: &[(char, char)] = &[
    ('`', '~'),
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
    ('0', ')'),
    ('-', '_'),
    ('=', '+'),
    ('[', '{'),
    (']', '}'),
    ('\\', '|'),
    (';', ':'),
    ('\'', '"'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
];

/// AZERTY rows. The right Alt is Alt Gr on this layout.
pub(super) const AZERTY_ROWS: &[&[&str]] = &[
    &[
        "²", "&", "é", "\"", "'", "(", "-", "è", "_", "ç", "à", ")", "=", "Backspace",
    ],
    &[
        "Tab", "A", "Z", "E", "R", "T", "Y", "U", "I", "O", "P", "^", "$", "\\",
    ],
    &[
        "Caps Lock", "Q", "S", "D", "F", "G", "H", "J", "K", "L", "M", "ù", "Enter",
    ],
    &[
        "Shift", "W", "X", "C", "V", "B", "N", ",", ";", ":", "!", "Shift",
    ],
    &["Ctrl", "Win", "Alt", "Space", "Alt Gr", "Win", "Menu", "Ctrl"],
];

// '²' has no shifted form on AZERTY and is deliberately absent.
pub(super) const AZERTY_SHIFT: &[(char, char)] = &[
    ('&', '1'),
    ('É', '2'),
    ('"', '3'),
    ('\'', '4'),
    ('(', '5'),
    ('-', '6'),
    ('È', '7'),
    ('_', '8'),
    ('Ç', '9'),
    ('À', '0'),
    (')', '°'),
    ('=', '+'),
    ('^', '¨'),
    ('$', '£'),
    ('\\', 'µ'),
    ('Ù', '%'),
    (';', '.'),
    (':', '/'),
    (',', '?'),
    ('!', '1'),
];

/// Dvorak rows, top to bottom.
pub(super) const DVORAK_ROWS: &[&[&str]] = &[
    &[
        "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "[", "]", "Bksp",
    ],
    &[
        "Tab", "'", ",", ".", "P", "Y", "F", "G", "C", "R", "L", "/", "=", "\\",
    ],
    &[
        "Caps Lock", "A", "O", "E", "U", "I", "D", "H", "T", "N", "S", "-", "Enter",
    ],
    &[
        "Shift", ";", "Q", "J", "K", "X", "B", "M", "W", "V", "Z", "Shift",
    ],
    &["Ctrl", "Win", "Alt", "Space", "Alt", "Win", "Menu", "Ctrl"],
];

pub(super) const DVORAK_SHIFT: &[(char, char)] = &[
    ('`', '~'),
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
    ('0', ')'),
    ('[', '{'),
    (']', '}'),
    ('\\', '|'),
    (';', ':'),
    ('\'', '"'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
];
