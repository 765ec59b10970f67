// SPDX-License-Identifier: GPL-3.0-only

//! Per-frame render snapshot.
//!
//! [`key_frames`] projects the immutable slot map and the current key state
//! into plain draw instructions: one `(Rect, display label, pressed, text
//! color)` tuple per slot. The canvas layer consumes these without knowing
//! anything about layouts or modifiers, which keeps the snapshot testable
//! without a window.

use std::collections::HashMap;

use crate::geometry::{KeySlot, Rect, SlotId};
use crate::label::KeyLabel;
use crate::layout::Layout;
use crate::state::KeyState;

/// Text color of pressed keys.
pub const PRESSED_TEXT_COLOR: [u8; 3] = [255, 255, 255];

/// Text color of idle keys.
pub const IDLE_TEXT_COLOR: [u8; 3] = [200, 200, 200];

/// Draw instructions for one key slot.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFrame {
    pub rect: Rect,
    /// Text drawn at the key's center.
    pub label: String,
    pub pressed: bool,
    pub text_color: [u8; 3],
}

/// Short display spelling for labels too long for a key cap.
fn display_label(label: KeyLabel) -> String {
    match label {
        KeyLabel::Backspace => "Bksp".to_string(),
        KeyLabel::Space => "Space".to_string(),
        KeyLabel::CapsLock => "Cpslck".to_string(),
        other => other.to_string(),
    }
}

/// Builds the frame list for the current state.
///
/// A pressed key shows its shifted glyph instead of its base label while
/// Shift is an active modifier and the layout defines one. Order of the
/// returned frames is unspecified; each key draws independently.
pub fn key_frames(
    slots: &HashMap<SlotId, KeySlot>,
    layout: &Layout,
    state: &KeyState,
) -> Vec<KeyFrame> {
    slots
        .values()
        .map(|slot| {
            let pressed = state.is_pressed(slot.label);
            let mut label = display_label(slot.label);
            if pressed && state.shift_active() {
                if let Some(glyph) = layout.shifted_glyph(slot.label) {
                    label = glyph.to_string();
                }
            }
            KeyFrame {
                rect: slot.rect,
                label,
                pressed,
                text_color: if pressed {
                    PRESSED_TEXT_COLOR
                } else {
                    IDLE_TEXT_COLOR
                },
            }
        })
        .collect()
}
