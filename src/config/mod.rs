// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file in the platform config directory.
//!
//! The file is optional and only ever read: the viewer keeps no state across
//! runs and never writes it back.
//!
//! # Configuration Sections
//!
//! - `[window]` - Initial window size
//! - `[logging]` - Default log filter (overridden by `RUST_LOG`)
//!
//! # Examples
//!
//! ```no_run
//! use onedark_viewer::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let (width, height) = config.window.size();
//! assert!(width > 0.0 && height > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::paths;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Initial window geometry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Window size clamped to the supported minimum.
    pub fn size(&self) -> (f32, f32) {
        (
            self.width.max(MIN_WINDOW_WIDTH) as f32,
            self.height.max(MIN_WINDOW_HEIGHT) as f32,
        )
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"onedark_viewer=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults and a
/// warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
