use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::Language;

/// Application-level constants
pub const APP_NAME: &str = "Chikitsa";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pause before the chatbot answers, in milliseconds.
pub const DEFAULT_THINKING_DELAY_MS: u64 = 1_000;

/// Upper bound for a configured thinking delay.
pub const MAX_THINKING_DELAY_MS: u64 = 60_000;

pub const ENV_LANGUAGE: &str = "CHIKITSA_LANG";
pub const ENV_THINKING_DELAY_MS: &str = "CHIKITSA_THINKING_DELAY_MS";

const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Get the application data directory.
/// ~/Chikitsa/ on all platforms; `None` when no home directory is known.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// Get the settings file path (~/Chikitsa/settings.json)
pub fn settings_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "chikitsa_lib=debug,chikitsa=debug,warn"
    } else {
        "chikitsa_lib=info,chikitsa=info,warn"
    }
}

/// User-adjustable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub thinking_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = match settings_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply `CHIKITSA_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LANGUAGE) {
            self.language = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_LANGUAGE,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_THINKING_DELAY_MS) {
            self.thinking_delay_ms =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: ENV_THINKING_DELAY_MS,
                        value,
                    })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                key: "thinking_delay_ms",
                value: self.thinking_delay_ms.to_string(),
            });
        }
        Ok(())
    }
}
