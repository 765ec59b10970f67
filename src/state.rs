// SPDX-License-Identifier: GPL-3.0-only

//! Key-state tracking.
//!
//! [`KeyState`] holds the two mutable sets the render loop reads every
//! frame: the canonical labels currently down and the modifiers currently
//! held. It is mutated exclusively by normalized press/release transitions,
//! delivered as messages from the listener thread, so the UI update loop is
//! the single writer and no locking is needed.
//!
//! The Shift bookkeeping is a deliberate carry-over from the product's
//! observed behavior: pressing a non-Shift key while Shift is active
//! re-inserts SHIFT into the pressed set, and releasing one re-removes it,
//! without reference counting. Releasing one of two letters held under Shift
//! therefore un-highlights Shift while it is physically still down. Kept
//! bug-compatible until product intent says otherwise.

use std::collections::HashSet;

use crate::label::KeyLabel;

/// A single normalized key transition, as produced by the input listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Press(KeyLabel),
    Release(KeyLabel),
}

/// The pressed-key and active-modifier sets for one layout.
#[derive(Debug)]
pub struct KeyState {
    pressed: HashSet<KeyLabel>,
    modifiers: HashSet<KeyLabel>,
    /// Labels the active layout renders; everything else is accepted by the
    /// normalizer but never stored.
    allowed: HashSet<KeyLabel>,
}

impl KeyState {
    /// Creates an empty tracker over the given renderable label set.
    pub fn new(allowed: HashSet<KeyLabel>) -> Self {
        Self {
            pressed: HashSet::new(),
            modifiers: HashSet::new(),
            allowed,
        }
    }

    /// Applies one transition.
    pub fn apply(&mut self, transition: KeyTransition) {
        match transition {
            KeyTransition::Press(label) => self.press(label),
            KeyTransition::Release(label) => self.release(label),
        }
    }

    /// Records a press of the given canonical label.
    pub fn press(&mut self, label: KeyLabel) {
        if label.is_modifier() {
            self.modifiers.insert(label);
            self.pressed.insert(label);
        } else {
            if self.modifiers.contains(&KeyLabel::Shift) {
                // Keep Shift highlighted alongside the key even when the
                // shift-down event predated this one.
                self.pressed.insert(KeyLabel::Shift);
            }
            if self.allowed.contains(&label) {
                self.pressed.insert(label);
            }
        }
    }

    /// Records a release of the given canonical label.
    pub fn release(&mut self, label: KeyLabel) {
        if label.is_modifier() {
            self.modifiers.remove(&label);
            self.pressed.remove(&label);
        } else {
            if self.modifiers.contains(&KeyLabel::Shift) {
                self.pressed.remove(&KeyLabel::Shift);
            }
            if self.allowed.contains(&label) {
                self.pressed.remove(&label);
            }
        }
    }

    /// Whether the label currently renders as pressed.
    pub fn is_pressed(&self, label: KeyLabel) -> bool {
        self.pressed.contains(&label)
    }

    /// Whether Shift is among the active modifiers.
    pub fn shift_active(&self) -> bool {
        self.modifiers.contains(&KeyLabel::Shift)
    }

    /// Number of labels currently down.
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// Number of modifiers currently held.
    pub fn active_modifier_count(&self) -> usize {
        self.modifiers.len()
    }
}
