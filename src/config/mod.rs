//! Configuration for the crate-wide defaults.
//!
//! [`FileConfig`] mirrors the optional TOML file, [`Settings`] holds the
//! resolved values.

pub mod file;
pub mod settings;

pub use file::FileConfig;
pub use settings::Settings;
