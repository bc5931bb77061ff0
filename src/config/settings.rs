//! Resolved default values.
//!
//! [`Settings`] is what the rest of the crate works with: every value is
//! filled in, either from the config file or from the hardcoded defaults.

use std::time::Duration;

use tracing::warn;

use crate::config::FileConfig;
use crate::error::Result;
use crate::text::{self, DEFAULT_RANDOM_LENGTH};
use crate::timing::{self, DEFAULT_WAIT, Debounced, Throttled};
use crate::utils::{DEFAULT_DECIMALS, bytes_to_human_readable};

/// Fully resolved defaults for the functions that take optional parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Quiet period used by [`Settings::debounce`]
    pub debounce_wait: Duration,

    /// Minimum spacing used by [`Settings::throttle`]
    pub throttle_wait: Duration,

    /// Length used by [`Settings::random_string`]
    pub random_length: usize,

    /// Fractional digits used by [`Settings::bytes_to_human_readable`]
    pub decimals: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_wait: DEFAULT_WAIT,
            throttle_wait: DEFAULT_WAIT,
            random_length: DEFAULT_RANDOM_LENGTH,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl From<&FileConfig> for Settings {
    fn from(config: &FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            debounce_wait: config
                .timing
                .debounce_wait_ms
                .map_or(defaults.debounce_wait, Duration::from_millis),
            throttle_wait: config
                .timing
                .throttle_wait_ms
                .map_or(defaults.throttle_wait, Duration::from_millis),
            random_length: config.text.random_length.unwrap_or(defaults.random_length),
            decimals: config.size.decimals.unwrap_or(defaults.decimals),
        }
    }
}

impl Settings {
    /// Resolve settings from the default config file location.
    ///
    /// A missing file yields the defaults. A file that cannot be loaded is
    /// reported with a warning and the defaults are used instead.
    #[must_use]
    pub fn load() -> Self {
        match FileConfig::load() {
            Ok(config) => Self::from(&config),
            Err(e) => {
                warn!("Failed to load config file, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// [`text::random_string`] with the configured length.
    #[must_use]
    pub fn random_string(&self) -> String {
        text::random_string(self.random_length)
    }

    /// [`bytes_to_human_readable`] with the configured number of decimals.
    #[must_use]
    pub fn bytes_to_human_readable(&self, bytes: f64) -> String {
        bytes_to_human_readable(bytes, self.decimals)
    }

    /// [`timing::debounce`] with the configured wait.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UtilError::NoRuntime`] outside of a tokio runtime.
    pub fn debounce<A, F>(&self, func: F) -> Result<Debounced<A>>
    where
        A: Send + 'static,
        F: Fn(A) + Send + Sync + 'static,
    {
        timing::debounce(func, self.debounce_wait)
    }

    /// [`timing::throttle`] with the configured wait.
    #[must_use]
    pub fn throttle<A, F>(&self, func: F) -> Throttled<A>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        timing::throttle(func, self.throttle_wait)
    }
}
