// SPDX-License-Identifier: GPL-3.0-only

//! Key slot geometry.
//!
//! Converts a layout's rows into render slots: one bounding rectangle and
//! canonical label per physical key occurrence. Built once at startup from
//! the selected layout and read-only afterwards.
//!
//! The walk is a single x cursor per row, advancing by `width + padding`
//! after each key, so slots never overlap. Slot identity is derived from
//! (label, row, x at placement time): the two "Shift" keys of a row share a
//! canonical label but occupy distinct slots.

use std::collections::{HashMap, HashSet};

use crate::app_settings;
use crate::label::KeyLabel;
use crate::layout::{Layout, LayoutError};

/// Axis-aligned bounding box of one key, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Center point, where the key's label is drawn.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Stable identifier of one physical key occurrence.
///
/// Unique even when labels repeat: the x position at placement time differs
/// for every key within a row, and the row index differs across rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub label: KeyLabel,
    pub row: usize,
    /// X cursor value when the key was placed, truncated to whole pixels.
    pub x: u32,
}

/// One renderable key occurrence.
#[derive(Debug, Clone, Copy)]
pub struct KeySlot {
    pub rect: Rect,
    pub label: KeyLabel,
}

/// Width of a key given its canonical label.
fn key_width(label: KeyLabel) -> f32 {
    match label {
        KeyLabel::Space => app_settings::KEY_WIDTH * app_settings::SPACE_KEY_FACTOR,
        KeyLabel::Backspace
        | KeyLabel::Enter
        | KeyLabel::Shift
        | KeyLabel::CapsLock
        | KeyLabel::Tab
        | KeyLabel::Ctrl
        | KeyLabel::Alt
        | KeyLabel::AltGr
        | KeyLabel::Win
        | KeyLabel::Menu => app_settings::KEY_WIDTH * app_settings::WIDE_KEY_FACTOR,
        KeyLabel::Char(_) => app_settings::KEY_WIDTH,
    }
}

/// Builds the slot map for a layout.
///
/// The result holds exactly one slot per key occurrence; iteration order is
/// unspecified and irrelevant, every slot draws independently.
pub fn build_slots(layout: &Layout) -> Result<HashMap<SlotId, KeySlot>, LayoutError> {
    let mut slots = HashMap::with_capacity(layout.key_count());
    for (row_index, row) in layout.rows.iter().enumerate() {
        let mut x = app_settings::START_X;
        let y = app_settings::START_Y
            + row_index as f32 * (app_settings::KEY_HEIGHT + app_settings::KEY_PADDING);
        for table_label in *row {
            let label = KeyLabel::from_table_label(table_label).ok_or_else(|| {
                LayoutError::UnsupportedLabel {
                    label: (*table_label).to_string(),
                    row: row_index,
                }
            })?;
            let width = key_width(label);
            let id = SlotId {
                label,
                row: row_index,
                x: x as u32,
            };
            let slot = KeySlot {
                rect: Rect {
                    x,
                    y,
                    width,
                    height: app_settings::KEY_HEIGHT,
                },
                label,
            };
            slots.insert(id, slot);
            x += width + app_settings::KEY_PADDING;
        }
    }
    Ok(slots)
}

/// Canonical labels the slot map renders. Keys outside this set are tracked
/// by nobody and never stored in the pressed set.
pub fn allowed_keys(slots: &HashMap<SlotId, KeySlot>) -> HashSet<KeyLabel> {
    slots.values().map(|slot| slot.label).collect()
}
