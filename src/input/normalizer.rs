// SPDX-License-Identifier: GPL-3.0-only

//! Raw event normalization.
//!
//! Maps the OS hook's raw key events onto canonical labels. Named physical
//! keys resolve through a fixed table (left and right Shift both become
//! SHIFT); anything else is taken from the character the event carries,
//! uppercased. Keys that match neither normalize to `None` and are dropped
//! silently — only keys the active layout renders matter downstream.
//!
//! rdev reports the character on press only, so the normalizer remembers
//! which label each physical key produced and replays it on release. The
//! cache also keeps press/release symmetric when the reported character
//! changes mid-hold (pressing '1', tapping Shift, then releasing would
//! otherwise see two different characters for the same physical key).

use std::collections::HashMap;

use crate::label::KeyLabel;

/// X11 keycode of the Menu/Apps key, which rdev has no named variant for.
const MENU_KEYCODE: u32 = 135;

/// Fixed table of named physical keys.
fn special_label(key: rdev::Key) -> Option<KeyLabel> {
    match key {
        rdev::Key::Backspace => Some(KeyLabel::Backspace),
        rdev::Key::Tab => Some(KeyLabel::Tab),
        rdev::Key::CapsLock => Some(KeyLabel::CapsLock),
        rdev::Key::Return => Some(KeyLabel::Enter),
        rdev::Key::ShiftLeft | rdev::Key::ShiftRight => Some(KeyLabel::Shift),
        rdev::Key::ControlLeft | rdev::Key::ControlRight => Some(KeyLabel::Ctrl),
        rdev::Key::Alt => Some(KeyLabel::Alt),
        rdev::Key::AltGr => Some(KeyLabel::AltGr),
        rdev::Key::Space => Some(KeyLabel::Space),
        rdev::Key::MetaLeft | rdev::Key::MetaRight => Some(KeyLabel::Win),
        rdev::Key::Unknown(MENU_KEYCODE) => Some(KeyLabel::Menu),
        _ => None,
    }
}

/// Stateful raw-event → canonical-label mapper.
///
/// Lives on the listener thread; its per-key cache is bounded by the number
/// of physically distinct keys.
#[derive(Debug, Default)]
pub struct Normalizer {
    seen: HashMap<rdev::Key, KeyLabel>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a press. `name` is the character string the event
    /// carried, if any.
    pub fn press(&mut self, key: rdev::Key, name: Option<&str>) -> Option<KeyLabel> {
        if let Some(label) = special_label(key) {
            return Some(label);
        }
        let c = name?.chars().next().filter(|c| !c.is_control())?;
        let label = KeyLabel::from_char(c);
        self.seen.insert(key, label);
        Some(label)
    }

    /// Normalizes a release, replaying the label recorded at press time for
    /// character keys.
    pub fn release(&mut self, key: rdev::Key) -> Option<KeyLabel> {
        special_label(key).or_else(|| self.seen.remove(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Character presses uppercase the reported character.
    #[test]
    fn test_character_press_uppercases() {
        let mut n = Normalizer::new();
        assert_eq!(
            n.press(rdev::Key::KeyA, Some("a")),
            Some(KeyLabel::Char('A'))
        );
        assert_eq!(
            n.press(rdev::Key::Num1, Some("1")),
            Some(KeyLabel::Char('1'))
        );
        // AZERTY system layout: the physical Q key reports 'a'.
        assert_eq!(
            n.press(rdev::Key::KeyQ, Some("a")),
            Some(KeyLabel::Char('A'))
        );
    }

    /// Named keys resolve through the fixed table; left and right variants
    /// collapse onto one canonical label.
    #[test]
    fn test_named_key_table() {
        let mut n = Normalizer::new();
        assert_eq!(n.press(rdev::Key::ShiftLeft, None), Some(KeyLabel::Shift));
        assert_eq!(n.press(rdev::Key::ShiftRight, None), Some(KeyLabel::Shift));
        assert_eq!(n.press(rdev::Key::ControlRight, None), Some(KeyLabel::Ctrl));
        assert_eq!(n.press(rdev::Key::MetaLeft, None), Some(KeyLabel::Win));
        assert_eq!(n.press(rdev::Key::AltGr, None), Some(KeyLabel::AltGr));
        assert_eq!(
            n.press(rdev::Key::Unknown(MENU_KEYCODE), None),
            Some(KeyLabel::Menu)
        );
        // The table wins over the carried character: Space reports " ".
        assert_eq!(
            n.press(rdev::Key::Space, Some(" ")),
            Some(KeyLabel::Space)
        );
        assert_eq!(
            n.press(rdev::Key::Return, Some("\r")),
            Some(KeyLabel::Enter)
        );
    }

    /// Unmapped keys normalize to None, on press and on release.
    #[test]
    fn test_unmapped_keys_dropped() {
        let mut n = Normalizer::new();
        assert_eq!(n.press(rdev::Key::F5, None), None);
        assert_eq!(n.press(rdev::Key::Escape, None), None);
        assert_eq!(n.press(rdev::Key::Unknown(9999), None), None);
        assert_eq!(n.release(rdev::Key::F5), None);
    }

    /// Releases replay the label recorded at press time even though the
    /// release event carries no character.
    #[test]
    fn test_release_replays_press_label() {
        let mut n = Normalizer::new();
        assert_eq!(
            n.press(rdev::Key::KeyA, Some("a")),
            Some(KeyLabel::Char('A'))
        );
        assert_eq!(n.release(rdev::Key::KeyA), Some(KeyLabel::Char('A')));
        // The cache entry is consumed; a stray second release is dropped.
        assert_eq!(n.release(rdev::Key::KeyA), None);
    }

    /// A shifted press replays the shifted character on release; the cache
    /// keys on the physical key, not the character.
    #[test]
    fn test_release_symmetric_under_shift() {
        let mut n = Normalizer::new();
        assert_eq!(
            n.press(rdev::Key::Num1, Some("!")),
            Some(KeyLabel::Char('!'))
        );
        assert_eq!(n.release(rdev::Key::Num1), Some(KeyLabel::Char('!')));
    }
}
