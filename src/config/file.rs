//! Configuration file support for default values.
//!
//! The defaults used by the convenience methods on [`crate::Settings`] can be
//! overridden with a TOML file at `~/.config/utilkit/config.toml` (or the
//! platform-specific equivalent).
//!
//! # Layering
//!
//! The precedence order is: **explicit argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [timing]
//! debounce_wait_ms = 250
//! throttle_wait_ms = 1000
//!
//! [text]
//! random_length = 16
//!
//! [size]
//! decimals = 1
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, UtilError};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can tell which values are present in the
/// file and fall back to the hardcoded defaults for the rest.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Timer defaults
    #[serde(default)]
    pub timing: FileTimingConfig,

    /// Text helper defaults
    #[serde(default)]
    pub text: FileTextConfig,

    /// Byte formatting defaults
    #[serde(default)]
    pub size: FileSizeConfig,
}

/// Timer options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileTimingConfig {
    /// Quiet period for debounced callables, in milliseconds
    pub debounce_wait_ms: Option<u64>,

    /// Minimum spacing for throttled callables, in milliseconds
    pub throttle_wait_ms: Option<u64>,
}

/// Text options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileTextConfig {
    /// Length of generated random strings
    pub random_length: Option<usize>,
}

/// Byte formatting options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileSizeConfig {
    /// Fractional digits in human-readable sizes
    pub decimals: Option<usize>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/utilkit/config.toml`, where
    /// `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("utilkit").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::Config`] if the file exists but cannot be read or
    /// contains invalid TOML.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::Config`] if the file cannot be read or contains
    /// invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| UtilError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| UtilError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
