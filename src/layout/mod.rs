// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout registry.
//!
//! Layouts are fixed compile-time tables: an ordered sequence of rows of key
//! labels plus a map from unshifted label to shifted glyph. The registry
//! resolves a layout by name or fails with [`LayoutError::UnknownLayout`],
//! which is fatal at startup — without a layout there is nothing to render.
//!
//! Row lengths differ between rows, and labels repeat within a layout (both
//! "Shift" keys); uniqueness is a property of render slots, not labels.

mod tables;

use std::fmt;

use crate::label::KeyLabel;

/// Names of the supported layouts, in presentation order.
pub const SUPPORTED_LAYOUTS: [&str; 3] = ["QWERTY", "AZERTY", "Dvorak"];

/// A fixed keyboard layout: named rows of key labels plus shift glyphs.
#[derive(Debug)]
pub struct Layout {
    /// Layout name as it appears in the settings file.
    pub name: &'static str,
    /// Rows of key labels, top row first.
    pub rows: &'static [&'static [&'static str]],
    /// (canonical unshifted label, shifted glyph) pairs.
    shift_pairs: &'static [(char, char)],
}

impl Layout {
    /// Glyph displayed for `label` while Shift is held, if the layout
    /// defines one. A missing entry means "no shifted form".
    pub fn shifted_glyph(&self, label: KeyLabel) -> Option<char> {
        let KeyLabel::Char(c) = label else {
            return None;
        };
        self.shift_pairs
            .iter()
            .find(|(unshifted, _)| *unshifted == c)
            .map(|(_, glyph)| *glyph)
    }

    /// Total key count summed across all rows.
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }
}

static QWERTY: Layout = Layout {
    name: "QWERTY",
    rows: tables::QWERTY_ROWS,
    shift_pairs: tables::QWERTY_SHIFT,
};

static AZERTY: Layout = Layout {
    name: "AZERTY",
    rows: tables::AZERTY_ROWS,
    shift_pairs: tables::AZERTY_SHIFT,
};

static DVORAK: Layout = Layout {
    name: "Dvorak",
    rows: tables::DVORAK_ROWS,
    shift_pairs: tables::DVORAK_SHIFT,
};

/// Resolves a layout by its settings-file name.
pub fn by_name(name: &str) -> Result<&'static Layout, LayoutError> {
    match name {
        "QWERTY" => Ok(&QWERTY),
        "AZERTY" => Ok(&AZERTY),
        "Dvorak" => Ok(&DVORAK),
        _ => Err(LayoutError::UnknownLayout {
            name: name.to_string(),
        }),
    }
}

/// Error type for layout resolution and slot construction.
#[derive(Debug)]
pub enum LayoutError {
    /// The requested layout name is not one of [`SUPPORTED_LAYOUTS`].
    UnknownLayout {
        /// The name that failed to resolve.
        name: String,
    },
    /// A row table carries a label the canonical label set cannot express.
    /// Cannot happen for the built-in tables; kept so the slot builder
    /// propagates instead of panicking.
    UnsupportedLabel {
        /// The offending table label.
        label: String,
        /// Row index it was found in.
        row: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownLayout { name } => {
                write!(
                    f,
                    "unknown keyboard layout '{}' (supported: {})",
                    name,
                    SUPPORTED_LAYOUTS.join(", ")
                )
            }
            LayoutError::UnsupportedLabel { label, row } => {
                write!(f, "unsupported key label '{}' in row {}", label, row)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
