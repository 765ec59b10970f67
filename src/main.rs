// SPDX-License-Identifier: GPL-3.0-only

//! Keyvis entry point.
//!
//! Loads settings (falling back to defaults on a missing or invalid file),
//! resolves the configured keyboard layout, and runs the visualizer window.
//! An unknown layout name is the one fatal startup error: with no layout
//! there is nothing to render.

use keyvis::{app, layout, settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("keyvis=info".parse().unwrap()),
        )
        .init();

    let settings = settings::Settings::load_or_default(&settings::default_path());
    let layout = layout::by_name(&settings.keyboard_layout)?;

    tracing::info!(layout = layout.name, "starting keystroke visualizer");
    app::run(settings, layout)
}
