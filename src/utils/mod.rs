//! Number and size helpers.
//!
//! This module contains the numeric utilities: byte size formatting and
//! range clamping.

pub mod number;
pub mod size;

pub use number::clamp;
pub use size::{DEFAULT_DECIMALS, bytes_to_human_readable};
