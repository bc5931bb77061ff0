//! # utilkit
//!
//! A flat collection of small, independent utility functions.
//!
//! Every function is usable on its own, and all of them are re-exported at
//! the crate root:
//!
//! - **Text**: [`capitalize`], [`to_camel_case`], [`to_pascal_case`],
//!   [`escape_html`], [`unescape_html`], [`is_palindrome`], [`random_string`]
//! - **Values**: [`is_empty`], [`is_json`], [`deep_clone`],
//!   [`is_plain_object`], [`deep_merge`], [`object_to_query_string`],
//!   [`compact_array`], [`group_by`]
//! - **Dates and numbers**: [`format_date`], [`date_difference_in_days`],
//!   [`clamp`], [`bytes_to_human_readable`]
//! - **Timing**: [`debounce`], [`throttle`], [`sleep`]
//!
//! Dynamically typed inputs (objects, arrays, mixed primitives) are modelled
//! with [`serde_json::Value`]. Functions that take optional parameters in
//! spirit (a default wait, length or precision) take them explicitly; the
//! defaults are exposed as constants and through [`Settings`], which can be
//! tuned from a config file.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use utilkit::{bytes_to_human_readable, group_by, to_camel_case};
//!
//! assert_eq!(to_camel_case("user-name"), "userName");
//! assert_eq!(bytes_to_human_readable(1536.0, 2), "1.5 KB");
//!
//! let rows = [json!({ "team": "a" }), json!({ "team": "b" }), json!({ "team": "a" })];
//! assert_eq!(group_by(&rows, "team")["a"].as_array().unwrap().len(), 2);
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod text;
pub mod timing;
pub mod utils;
pub mod value;

pub use config::{FileConfig, Settings};
pub use date::{DateInput, date_difference_in_days, format_date, format_today, parse_date};
pub use error::{Result, UtilError};
pub use text::{
    DEFAULT_RANDOM_LENGTH, capitalize, capitalize_value, escape_html, is_palindrome,
    random_string, random_string_with, to_camel_case, to_pascal_case, unescape_html,
};
pub use timing::{DEFAULT_WAIT, Debounced, Throttled, debounce, sleep, throttle};
pub use utils::{DEFAULT_DECIMALS, bytes_to_human_readable, clamp};
pub use value::{
    MISSING_KEY_BUCKET, compact_array, deep_clone, deep_merge, group_by, is_empty, is_json,
    is_plain_object, is_truthy, object_to_query_string, to_js_string,
};
