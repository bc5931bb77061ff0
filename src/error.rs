//! Error type shared by the fallible helpers.
//!
//! Most functions in this crate never fail: invalid input is coerced to a safe
//! default (an empty string, `false`, `0`). The few places where Rust forces an
//! explicit failure path return [`UtilError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the fallible helpers in this crate.
#[derive(Error, Debug)]
pub enum UtilError {
    /// A value could not be round-tripped through JSON.
    #[error("JSON round trip failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A string could not be interpreted as a date.
    #[error("Invalid date: {input:?}")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A timer was requested outside of a tokio runtime.
    #[error("No tokio runtime available to schedule the debounced call")]
    NoRuntime(#[source] tokio::runtime::TryCurrentError),

    /// The configuration file exists but could not be read or parsed.
    #[error("Failed to load config file at {}: {message}", path.display())]
    Config {
        /// Location of the offending file.
        path: PathBuf,
        /// Underlying reason.
        message: String,
    },
}

/// Convenience alias used by the fallible functions of this crate.
pub type Result<T> = std::result::Result<T, UtilError>;
