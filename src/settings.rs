// SPDX-License-Identifier: GPL-3.0-only

//! User settings with JSON file persistence.
//!
//! Settings live in `config.json` next to the process working directory.
//! A missing or invalid file is never fatal: the defaults are written back
//! out and used for this run, with the failure logged. Saving is
//! pretty-printed so the file stays hand-editable, and save→load reproduces
//! the identical settings object.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_settings;
use crate::layout::SUPPORTED_LAYOUTS;

/// User configuration that persists between application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the layout to render; must be one of the supported set.
    pub keyboard_layout: String,
    /// Window background, RGB 0–255.
    pub background_color: [u8; 3],
    /// Fill color of pressed keys, RGB 0–255.
    pub keypress_color: [u8; 3],
    /// Alpha of the pressed-key fill, 0–255.
    pub keypress_opacity: u8,
    /// Key label font size, 20–100.
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keyboard_layout: "QWERTY".to_string(),
            background_color: [30, 30, 30],
            keypress_color: [0, 120, 215],
            keypress_opacity: 180,
            font_size: 30,
        }
    }
}

impl Settings {
    /// Checks the value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SUPPORTED_LAYOUTS.contains(&self.keyboard_layout.as_str()) {
            return Err(SettingsError::Invalid {
                field: "keyboard_layout",
                reason: format!(
                    "'{}' is not one of {}",
                    self.keyboard_layout,
                    SUPPORTED_LAYOUTS.join(", ")
                ),
            });
        }
        if !(20..=100).contains(&self.font_size) {
            return Err(SettingsError::Invalid {
                field: "font_size",
                reason: format!("{} is outside 20–100", self.font_size),
            });
        }
        Ok(())
    }

    /// Reads and validates the settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let settings: Settings =
            serde_json::from_str(&contents).map_err(|source| SettingsError::Json {
                source,
                path: path.to_path_buf(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes the settings file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Json {
            source,
            path: path.to_path_buf(),
        })?;
        fs::write(path, contents).map_err(|source| SettingsError::Io {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Loads settings, falling back to (and persisting) the defaults when
    /// the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                if path.exists() {
                    tracing::warn!("invalid settings file, using defaults: {err}");
                } else {
                    tracing::info!("no settings file at {}, writing defaults", path.display());
                }
                let defaults = Self::default();
                if let Err(save_err) = defaults.save(path) {
                    tracing::warn!("could not persist default settings: {save_err}");
                }
                defaults
            }
        }
    }
}

/// Default location of the settings file.
pub fn default_path() -> PathBuf {
    PathBuf::from(app_settings::CONFIG_FILE)
}

/// Error type for settings I/O and validation.
#[derive(Debug)]
pub enum SettingsError {
    /// I/O error reading or writing the settings file.
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    /// JSON (de)serialization error.
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
    /// A field holds an out-of-range or unsupported value.
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { source, path } => {
                write!(f, "I/O error for '{}': {}", path.display(), source)
            }
            SettingsError::Json { source, path } => {
                write!(f, "JSON error in '{}': {}", path.display(), source)
            }
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Json { source, .. } => Some(source),
            SettingsError::Invalid { .. } => None,
        }
    }
}
