// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Window title.
pub const APP_TITLE: &str = "Real-Time Keystroke Visualizer";

/// Settings file name, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 1400.0;

/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Base key width in pixels.
pub const KEY_WIDTH: f32 = 60.0;

/// Key height in pixels.
pub const KEY_HEIGHT: f32 = 60.0;

/// Gap between keys, both axes.
pub const KEY_PADDING: f32 = 5.0;

/// Left margin of the first key in every row.
pub const START_X: f32 = 50.0;

/// Top margin of the first row.
pub const START_Y: f32 = 50.0;

/// Width multiplier for wide keys (Backspace, Enter, Shift, ...).
pub const WIDE_KEY_FACTOR: f32 = 1.75;

/// Width multiplier for the space bar.
pub const SPACE_KEY_FACTOR: f32 = 5.0;

/// Corner radius of key rectangles.
pub const KEY_CORNER_RADIUS: f32 = 5.0;

/// Border width of pressed keys.
pub const PRESSED_BORDER_WIDTH: f32 = 4.0;

/// Border width of idle keys.
pub const IDLE_BORDER_WIDTH: f32 = 2.0;
