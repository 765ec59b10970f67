// SPDX-License-Identifier: GPL-3.0-only

//! Canonical key labels.
//!
//! A [`KeyLabel`] is the uppercase, normalized identity of a key — "which key
//! is this" independent of which physical slot renders it. Both "Shift" keys
//! on a keyboard share the canonical label [`KeyLabel::Shift`] while owning
//! distinct render slots.
//!
//! The set of named variants is closed on purpose: modifier handling and
//! display shortening match exhaustively instead of comparing ad-hoc strings.

use std::fmt;

/// Canonical identity of a key.
///
/// `Char` holds the uppercase form of a printable key ('A', '1', 'É', ';').
/// The named variants cover the non-printable keys the layout tables render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyLabel {
    /// Printable key, stored uppercase.
    Char(char),
    Backspace,
    Tab,
    CapsLock,
    Enter,
    Shift,
    Ctrl,
    Alt,
    AltGr,
    Space,
    Win,
    Menu,
}

impl KeyLabel {
    /// Canonicalizes a printable character (uppercases it).
    pub fn from_char(c: char) -> Self {
        // to_uppercase may expand to multiple chars for exotic scripts; the
        // first one is the canonical form for every label the tables use.
        KeyLabel::Char(c.to_uppercase().next().unwrap_or(c))
    }

    /// Parses a layout-table label ("Shift", "Caps Lock", "q", "é", ...).
    ///
    /// Returns `None` for multi-character labels that name no known key.
    pub fn from_table_label(label: &str) -> Option<Self> {
        let named = match label {
            // "Bksp" is the Dvorak table's short spelling of Backspace.
            "Backspace" | "Bksp" => KeyLabel::Backspace,
            "Tab" => KeyLabel::Tab,
            "Caps Lock" => KeyLabel::CapsLock,
            "Enter" => KeyLabel::Enter,
            "Shift" => KeyLabel::Shift,
            "Ctrl" => KeyLabel::Ctrl,
            "Alt" => KeyLabel::Alt,
            "Alt Gr" => KeyLabel::AltGr,
            "Space" => KeyLabel::Space,
            "Win" => KeyLabel::Win,
            "Menu" => KeyLabel::Menu,
            _ => {
                let mut chars = label.chars();
                let first = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                return Some(KeyLabel::from_char(first));
            }
        };
        Some(named)
    }

    /// Whether this label belongs to the fixed modifier set
    /// {SHIFT, CTRL, ALT, WIN, MENU, ALT GR}.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyLabel::Shift
                | KeyLabel::Ctrl
                | KeyLabel::Alt
                | KeyLabel::AltGr
                | KeyLabel::Win
                | KeyLabel::Menu
        )
    }
}

impl fmt::Display for KeyLabel {
    /// Canonical uppercase spelling ("SHIFT", "CAPS LOCK", "A").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyLabel::Char(c) => write!(f, "{}", c),
            KeyLabel::Backspace => f.write_str("BACKSPACE"),
            KeyLabel::Tab => f.write_str("TAB"),
            KeyLabel::CapsLock => f.write_str("CAPS LOCK"),
            KeyLabel::Enter => f.write_str("ENTER"),
            KeyLabel::Shift => f.write_str("SHIFT"),
            KeyLabel::Ctrl => f.write_str("CTRL"),
            KeyLabel::Alt => f.write_str("ALT"),
            KeyLabel::AltGr => f.write_str("ALT GR"),
            KeyLabel::Space => f.write_str("SPACE"),
            KeyLabel::Win => f.write_str("WIN"),
            KeyLabel::Menu => f.write_str("MENU"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Characters canonicalize to their uppercase form.
    #[test]
    fn test_from_char_uppercases() {
        assert_eq!(KeyLabel::from_char('a'), KeyLabel::Char('A'));
        assert_eq!(KeyLabel::from_char('A'), KeyLabel::Char('A'));
        assert_eq!(KeyLabel::from_char('1'), KeyLabel::Char('1'));
        assert_eq!(KeyLabel::from_char('é'), KeyLabel::Char('É'));
        assert_eq!(KeyLabel::from_char(';'), KeyLabel::Char(';'));
    }

    /// Named table labels resolve to their variants, including the Dvorak
    /// "Bksp" alias.
    #[test]
    fn test_from_table_label_named() {
        assert_eq!(
            KeyLabel::from_table_label("Backspace"),
            Some(KeyLabel::Backspace)
        );
        assert_eq!(KeyLabel::from_table_label("Bksp"), Some(KeyLabel::Backspace));
        assert_eq!(
            KeyLabel::from_table_label("Caps Lock"),
            Some(KeyLabel::CapsLock)
        );
        assert_eq!(KeyLabel::from_table_label("Alt Gr"), Some(KeyLabel::AltGr));
        assert_eq!(KeyLabel::from_table_label("q"), Some(KeyLabel::Char('Q')));
        assert_eq!(KeyLabel::from_table_label("²"), Some(KeyLabel::Char('²')));
    }

    /// Unknown multi-character labels are rejected rather than silently
    /// becoming character keys.
    #[test]
    fn test_from_table_label_unknown() {
        assert_eq!(KeyLabel::from_table_label("Hyper"), None);
        assert_eq!(KeyLabel::from_table_label(""), None);
    }

    /// The modifier set is exactly {SHIFT, CTRL, ALT, WIN, MENU, ALT GR}.
    #[test]
    fn test_modifier_set() {
        for m in [
            KeyLabel::Shift,
            KeyLabel::Ctrl,
            KeyLabel::Alt,
            KeyLabel::AltGr,
            KeyLabel::Win,
            KeyLabel::Menu,
        ] {
            assert!(m.is_modifier(), "{m} should be a modifier");
        }
        assert!(!KeyLabel::Space.is_modifier());
        assert!(!KeyLabel::CapsLock.is_modifier());
        assert!(!KeyLabel::Char('A').is_modifier());
    }

    /// Display produces the canonical uppercase spelling.
    #[test]
    fn test_display_spelling() {
        assert_eq!(KeyLabel::Shift.to_string(), "SHIFT");
        assert_eq!(KeyLabel::AltGr.to_string(), "ALT GR");
        assert_eq!(KeyLabel::CapsLock.to_string(), "CAPS LOCK");
        assert_eq!(KeyLabel::Char('A').to_string(), "A");
    }
}
