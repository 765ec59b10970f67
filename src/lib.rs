// SPDX-License-Identifier: GPL-3.0-only

//! Keyvis - a real-time keystroke visualizer.
//!
//! This crate renders a live on-screen keyboard and highlights keys as they
//! are pressed on the physical keyboard, for streamers and demos.
//!
//! # Architecture
//!
//! Raw events from a global OS keyboard hook are normalized into canonical
//! labels on a background listener thread and streamed into the UI as
//! messages. The UI update loop is the single writer of the key-state
//! tracker; every repaint projects the immutable slot geometry plus the
//! tracker into per-key draw instructions.
//!
//! # Modules
//!
//! - `app`: iced application model, canvas rendering, input subscription
//! - `app_settings`: centralized application constants
//! - `geometry`: slot builder mapping layout rows to key rectangles
//! - `input`: global keyboard hook and raw-event normalization
//! - `label`: closed canonical key label type
//! - `layout`: fixed layout tables and registry (QWERTY, AZERTY, Dvorak)
//! - `render`: per-frame render snapshot
//! - `settings`: JSON settings persistence with default fallback
//! - `state`: pressed-key and active-modifier tracking

pub mod app;
pub mod app_settings;
pub mod geometry;
pub mod input;
pub mod label;
pub mod layout;
pub mod render;
pub mod settings;
pub mod state;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::geometry;
    use crate::label::KeyLabel;
    use crate::layout;
    use crate::render;
    use crate::settings::Settings;
    use crate::state::{KeyState, KeyTransition};

    /// Integration Test 1: full pipeline from raw events to render frames.
    ///
    /// Simulates the listener normalizing a Shift+1 chord on QWERTY and
    /// checks the resulting frames: the "1" slot is pressed and displays the
    /// shifted glyph, both Shift slots are pressed, everything else is idle.
    #[test]
    fn test_raw_events_to_frames() {
        let layout = layout::by_name("QWERTY").unwrap();
        let slots = geometry::build_slots(layout).unwrap();
        let mut state = KeyState::new(geometry::allowed_keys(&slots));

        let mut normalizer = crate::input::Normalizer::new();
        for transition in [
            normalizer
                .press(rdev::Key::ShiftLeft, None)
                .map(KeyTransition::Press),
            normalizer
                .press(rdev::Key::Num1, Some("!"))
                .map(KeyTransition::Press),
        ] {
            state.apply(transition.expect("both events should normalize"));
        }

        // The hook reported '!' for the shifted digit; the digit slot itself
        // stays idle while the two Shift slots highlight.
        let frames = render::key_frames(&slots, layout, &state);
        assert_eq!(frames.iter().filter(|f| f.pressed).count(), 2);
        assert!(
            frames
                .iter()
                .filter(|f| f.pressed)
                .all(|f| f.label == "SHIFT")
        );
    }

    /// Integration Test 2: tracker-level Shift+1 shows the shifted glyph.
    ///
    /// Exercises the documented render contract directly: with SHIFT active
    /// and "1" pressed, the slot labeled "1" displays "!".
    #[test]
    fn test_shift_one_renders_bang() {
        let layout = layout::by_name("QWERTY").unwrap();
        let slots = geometry::build_slots(layout).unwrap();
        let mut state = KeyState::new(geometry::allowed_keys(&slots));

        state.apply(KeyTransition::Press(KeyLabel::Shift));
        state.apply(KeyTransition::Press(KeyLabel::Char('1')));

        let frames = render::key_frames(&slots, layout, &state);
        assert!(
            frames.iter().any(|f| f.pressed && f.label == "!"),
            "the '1' slot should display '!'"
        );
        assert_eq!(frames.iter().filter(|f| f.pressed).count(), 3);
    }

    /// Integration Test 3: unmapped raw keys leave all state untouched.
    #[test]
    fn test_unmapped_key_is_inert() {
        let layout = layout::by_name("QWERTY").unwrap();
        let slots = geometry::build_slots(layout).unwrap();
        let mut state = KeyState::new(geometry::allowed_keys(&slots));
        let mut normalizer = crate::input::Normalizer::new();

        assert_eq!(normalizer.press(rdev::Key::F12, None), None);
        assert_eq!(normalizer.release(rdev::Key::F12), None);
        assert_eq!(state.pressed_count(), 0);
        assert_eq!(state.active_modifier_count(), 0);

        let frames = render::key_frames(&slots, layout, &state);
        assert!(frames.iter().all(|f| !f.pressed));
    }

    /// Integration Test 4: the AZERTY scenario from end to end.
    ///
    /// A raw press reporting the character 'a' normalizes to "A", which
    /// AZERTY renders, so it lands in the pressed set and its frame
    /// highlights.
    #[test]
    fn test_azerty_a_scenario() {
        let layout = layout::by_name("AZERTY").unwrap();
        let slots = geometry::build_slots(layout).unwrap();
        let mut state = KeyState::new(geometry::allowed_keys(&slots));
        let mut normalizer = crate::input::Normalizer::new();

        let label = normalizer
            .press(rdev::Key::KeyQ, Some("a"))
            .expect("'a' should normalize");
        assert_eq!(label, KeyLabel::Char('A'));
        state.apply(KeyTransition::Press(label));

        let frames = render::key_frames(&slots, layout, &state);
        assert!(frames.iter().any(|f| f.pressed && f.label == "A"));
    }

    /// Integration Test 5: a configured layout drives the whole stack.
    ///
    /// Settings select Dvorak; the registry resolves it and the slot count
    /// matches the table, so startup would succeed with this file.
    #[test]
    fn test_settings_select_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut settings = Settings::default();
        settings.keyboard_layout = "Dvorak".to_string();
        settings.save(&path).unwrap();

        let loaded = Settings::load_or_default(&path);
        let layout = layout::by_name(&loaded.keyboard_layout).expect("Dvorak resolves");
        let slots = geometry::build_slots(layout).unwrap();
        assert_eq!(slots.len(), layout.key_count());
    }
}
