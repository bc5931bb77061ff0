//! Helpers for dynamically typed JSON values.
//!
//! Objects, arrays and primitives are represented with [`serde_json::Value`].
//! Object maps keep insertion order (the `preserve_order` feature), which
//! [`object_to_query_string`], [`deep_merge`] and [`group_by`] rely on.
//!
//! The coercions of a loosely typed host language are made explicit here:
//! [`is_truthy`] decides which values count as "falsy" and [`to_js_string`]
//! renders any value the way a string conversion would.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::{Map, Value};

use crate::error::Result;

/// Bucket used by [`group_by`] for items that lack the grouping key.
pub const MISSING_KEY_BUCKET: &str = "undefined";

/// Characters left untouched by `encodeURIComponent`: alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Check whether a value is "empty".
///
/// `null`, `""`, `[]` and `{}` are empty. Numbers and booleans never are,
/// whatever their value.
///
/// # Examples
///
/// ```
/// # use utilkit::is_empty;
/// # use serde_json::json;
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&json!(0)));
/// ```
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Check whether a string is valid JSON text.
///
/// Never fails: any parse error is reported as `false`. Surrounding
/// whitespace is allowed, trailing garbage is not.
#[must_use]
pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(s).is_ok()
}

/// Deep-copy a value by round-tripping it through JSON.
///
/// The result shares nothing with the input. Only what JSON can represent
/// survives the trip: non-finite floats become `null`, maps need string keys,
/// and so on.
///
/// # Errors
///
/// Returns [`crate::UtilError::Json`] if the value cannot be serialized to
/// JSON or the serialized form cannot be read back into `T`.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

/// Check whether a value is a plain object (a JSON map).
///
/// Arrays, `null` and every primitive return `false`.
#[must_use]
pub const fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Merge each source into `target`, recursively, and return `target`.
///
/// Mutates `target` in place. Sources are applied in order, so later sources
/// win on conflicting keys. A nested object in a source is merged into the
/// matching target entry: a falsy or missing entry is first replaced by `{}`.
/// Any other source value overwrites the target entry. A source or target
/// that is not an object is skipped.
///
/// # Examples
///
/// ```
/// # use utilkit::deep_merge;
/// # use serde_json::json;
/// let mut target = json!({ "a": { "x": 1 } });
/// deep_merge(&mut target, &[json!({ "a": { "y": 2 } }), json!({ "b": 3 })]);
/// assert_eq!(target, json!({ "a": { "x": 1, "y": 2 }, "b": 3 }));
/// ```
pub fn deep_merge<'a>(target: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    for source in sources {
        merge_into(target, source);
    }
    target
}

fn merge_into(target: &mut Value, source: &Value) {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };

    for (key, value) in source_map {
        if value.is_object() {
            let slot = target_map.entry(key.clone()).or_insert(Value::Null);
            if !is_truthy(slot) {
                *slot = Value::Object(Map::new());
            }
            // A truthy non-object slot is left alone: the merge step skips it.
            merge_into(slot, value);
        } else {
            target_map.insert(key.clone(), value.clone());
        }
    }
}

/// Build a `key=value&key=value` query string from a flat map.
///
/// Keys and values are percent-encoded like `encodeURIComponent`. Non-string
/// values go through [`to_js_string`] first. Pairs keep the map's insertion
/// order.
///
/// # Examples
///
/// ```
/// # use utilkit::object_to_query_string;
/// # use serde_json::json;
/// let params = json!({ "q": "rust lang", "page": 2 });
/// assert_eq!(
///     object_to_query_string(params.as_object().unwrap()),
///     "q=rust%20lang&page=2"
/// );
/// ```
#[must_use]
pub fn object_to_query_string(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_uri_component(key),
                encode_uri_component(&to_js_string(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Return a new vector without the falsy elements of `items`.
///
/// See [`is_truthy`] for which values are dropped. Order is preserved.
#[must_use]
pub fn compact_array(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|v| is_truthy(v)).cloned().collect()
}

/// Group objects by the value stored under `key`.
///
/// Each item lands in the bucket named by `to_js_string(item[key])`. Items
/// without the key (including non-objects) go to [`MISSING_KEY_BUCKET`].
/// Buckets appear in the order they were first seen and each keeps its
/// items in input order. Every bucket value is a JSON array.
#[must_use]
pub fn group_by(items: &[Value], key: &str) -> Map<String, Value> {
    let mut groups = Map::new();

    for item in items {
        let bucket = item
            .get(key)
            .map_or_else(|| MISSING_KEY_BUCKET.to_string(), to_js_string);

        if let Value::Array(members) = groups
            .entry(bucket)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            members.push(item.clone());
        }
    }

    groups
}

/// Decide whether a value is truthy.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy. JSON has no `NaN` or `undefined`, so those
/// cases cannot occur.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value as a loosely typed language's string conversion would.
///
/// - strings are returned verbatim (no quotes)
/// - integral numbers print without a fractional part (`1.0` → `"1"`)
/// - magnitudes of `1e21` and above or below `1e-6` use exponent notation
///   (`1e+21`, `1.5e-7`)
/// - `null` becomes `"null"`
/// - arrays join their elements with `,`, with `null` elements rendered empty
/// - objects become `"[object Object]"`
#[must_use]
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                n.as_f64().map_or_else(|| n.to_string(), format_js_number)
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_js_number(f: f64) -> String {
    let magnitude = f.abs();

    if f == 0.0 {
        "0".to_string()
    } else if !(1e-6..1e21).contains(&magnitude) {
        format_js_exponent(f)
    } else if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

/// Shortest exponent form with an explicit sign on positive powers (`1e+21`).
fn format_js_exponent(f: f64) -> String {
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => formatted,
    }
}
