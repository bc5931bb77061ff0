//! String and text helpers.
//!
//! Case conversion, HTML entity escaping, palindrome detection and random
//! alphanumeric strings. Every function here is pure except the random string
//! generator, which draws from the thread-local RNG unless one is supplied.

use std::fmt::Display;
use std::sync::LazyLock;

use rand::Rng;
use rand::distr::{Alphanumeric, Distribution};
use regex::{Captures, Regex};
use serde_json::Value;

/// Length used by [`crate::Settings::random_string`] when nothing is configured.
pub const DEFAULT_RANDOM_LENGTH: usize = 8;

/// A `-` or `_` separator followed by the character that gets upper-cased.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_](.)").expect("Invalid regex pattern"));

/// The five entities produced by [`escape_html`], plus the short `&#39;` form.
static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:lt|gt|amp|quot|#0?39);").expect("Invalid regex pattern")
});

/// Upper-case the first character of a string, leaving the rest untouched.
///
/// Returns an empty string for empty input. Characters whose upper-case form
/// spans several characters (such as `ß`) expand accordingly.
///
/// # Examples
///
/// ```
/// # use utilkit::capitalize;
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("Hello"), "Hello");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// [`capitalize`] for dynamically typed values.
///
/// Anything that is not a JSON string (numbers included) yields `""`.
#[must_use]
pub fn capitalize_value(value: &Value) -> String {
    match value {
        Value::String(s) => capitalize(s),
        _ => String::new(),
    }
}

/// Convert a hyphen- or underscore-delimited string to `camelCase`.
///
/// Each separator is removed and the character after it upper-cased; the
/// first character of the result is lower-cased when it is an ASCII word
/// character. Input that is already camel-cased comes back unchanged.
///
/// # Examples
///
/// ```
/// # use utilkit::to_camel_case;
/// assert_eq!(to_camel_case("hello-world"), "helloWorld");
/// assert_eq!(to_camel_case("user_id"), "userId");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    map_first_word_char(&join_segments(s), |c| c.to_ascii_lowercase())
}

/// Convert a hyphen- or underscore-delimited string to `PascalCase`.
///
/// Same as [`to_camel_case`] except that the first character is upper-cased.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    map_first_word_char(&join_segments(s), |c| c.to_ascii_uppercase())
}

/// Drop every `-`/`_` separator and upper-case the character following it.
fn join_segments(s: &str) -> String {
    SEPARATOR_REGEX
        .replace_all(s, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Apply `f` to the first character if it is an ASCII word character.
fn map_first_word_char(s: &str, f: impl Fn(char) -> char) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => {
            std::iter::once(f(first)).chain(chars).collect()
        }
        _ => s.to_string(),
    }
}

/// Replace `&`, `<`, `>`, `"` and `'` with their HTML entities.
///
/// All other characters are copied through unchanged.
///
/// # Examples
///
/// ```
/// # use utilkit::escape_html;
/// assert_eq!(escape_html("<div>Test</div>"), "&lt;div&gt;Test&lt;/div&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Reverse [`escape_html`].
///
/// Only `&lt;`, `&gt;`, `&amp;`, `&quot;` and the apostrophe entity (`&#39;`
/// or `&#039;`) are decoded. The input is scanned once, so `&amp;lt;` becomes
/// `&lt;` rather than `<`. Any other entity is left as is.
#[must_use]
pub fn unescape_html(s: &str) -> String {
    ENTITY_REGEX
        .replace_all(s, |caps: &Captures<'_>| match &caps[0] {
            "&lt;" => "<",
            "&gt;" => ">",
            "&amp;" => "&",
            "&quot;" => "\"",
            _ => "'",
        })
        .into_owned()
}

/// Check whether a value reads the same forwards and backwards.
///
/// The value is rendered with [`Display`], then everything except ASCII
/// letters and digits is stripped and the rest lower-cased. A value with
/// nothing left after stripping counts as a palindrome.
///
/// # Examples
///
/// ```
/// # use utilkit::is_palindrome;
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(is_palindrome(&12321));
/// assert!(!is_palindrome("hello"));
/// ```
#[must_use]
pub fn is_palindrome<T: Display + ?Sized>(value: &T) -> bool {
    let normalized: Vec<u8> = value
        .to_string()
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

/// Generate a random string of `length` characters from `[A-Za-z0-9]`.
///
/// Each position is drawn independently and uniformly from the 62 symbols
/// using the thread-local RNG.
#[must_use]
pub fn random_string(length: usize) -> String {
    random_string_with(&mut rand::rng(), length)
}

/// [`random_string`] with a caller-supplied RNG, for reproducible output.
#[must_use]
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(Alphanumeric.sample(rng)))
        .collect()
}
