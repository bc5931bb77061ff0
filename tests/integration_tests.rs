//! Integration tests for utilkit
//!
//! These tests go through the crate-root exports only, the way a consumer of
//! the library would, and check the documented behaviour of each function.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use proptest::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

use utilkit::{
    FileConfig, Settings, UtilError, bytes_to_human_readable, capitalize, clamp, compact_array,
    date_difference_in_days, debounce, deep_clone, deep_merge, escape_html, format_date,
    group_by, is_empty, is_json, is_palindrome, is_plain_object, object_to_query_string,
    random_string, sleep, throttle, to_camel_case, to_pascal_case, unescape_html,
};

/// Helper building a shared call log and a callable that appends to it
fn call_log<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |value| sink.lock().unwrap().push(value))
}

// ── Values ──────────────────────────────────────────────────────────────

#[test]
fn test_is_empty_examples() {
    assert!(is_empty(&json!("")));
    assert!(is_empty(&json!([])));
    assert!(is_empty(&json!({})));
    assert!(is_empty(&Value::Null));
    assert!(!is_empty(&json!("x")));
    assert!(!is_empty(&json!(0)));
    assert!(!is_empty(&json!(false)));
}

#[test]
fn test_is_json_examples() {
    assert!(is_json(r#"{"a":1}"#));
    assert!(!is_json("{a:1}"));
    assert!(!is_json(""));
}

#[test]
fn test_deep_clone_is_independent() -> Result<()> {
    let original = json!({ "a": 1, "b": { "c": 2 }, "list": [1, 2, 3] });
    let mut clone = deep_clone(&original)?;

    assert_eq!(clone, original);

    clone["b"]["c"] = json!(3);
    clone["list"].as_array_mut().unwrap().push(json!(4));
    assert_eq!(original["b"]["c"], json!(2));
    assert_eq!(original["list"], json!([1, 2, 3]));
    Ok(())
}

#[test]
fn test_is_plain_object_examples() {
    assert!(is_plain_object(&json!({})));
    assert!(!is_plain_object(&json!([])));
    assert!(!is_plain_object(&Value::Null));
}

#[test]
fn test_deep_merge_examples() {
    let mut target = json!({});
    deep_merge(&mut target, &[json!({ "a": 1 }), json!({ "b": 2 })]);
    assert_eq!(target, json!({ "a": 1, "b": 2 }));

    let mut settings = json!({ "theme": { "color": "blue", "size": 12 }, "lang": "en" });
    deep_merge(
        &mut settings,
        &[json!({ "theme": { "size": 14 } }), json!({ "lang": "fr" })],
    );
    assert_eq!(
        settings,
        json!({ "theme": { "color": "blue", "size": 14 }, "lang": "fr" })
    );
}

#[test]
fn test_object_to_query_string_example() {
    let params = json!({ "a": 1, "b": 2 });
    assert_eq!(object_to_query_string(params.as_object().unwrap()), "a=1&b=2");
}

#[test]
fn test_compact_array_example() {
    let items = [json!(0), json!(1), json!(false), json!(2), json!(""), json!(3), json!(null)];
    assert_eq!(compact_array(&items), vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn test_group_by_example() {
    let data = [
        json!({ "g": "A", "v": 1 }),
        json!({ "g": "B", "v": 2 }),
        json!({ "g": "A", "v": 3 }),
    ];
    let grouped = group_by(&data, "g");

    let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(keys, ["A", "B"]);
    assert_eq!(grouped["A"], json!([{ "g": "A", "v": 1 }, { "g": "A", "v": 3 }]));
    assert_eq!(grouped["B"], json!([{ "g": "B", "v": 2 }]));
}

// ── Text ────────────────────────────────────────────────────────────────

#[test]
fn test_capitalize_example() {
    assert_eq!(capitalize("hello"), "Hello");
    assert_eq!(capitalize("Hello"), "Hello");
}

#[test]
fn test_case_conversion_examples() {
    assert_eq!(to_camel_case("hello-world"), "helloWorld");
    assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
}

#[test]
fn test_html_examples() {
    assert_eq!(escape_html("<div>Test</div>"), "&lt;div&gt;Test&lt;/div&gt;");
    assert_eq!(unescape_html("&lt;div&gt;Test&lt;/div&gt;"), "<div>Test</div>");
}

#[test]
fn test_palindrome_examples() {
    assert!(is_palindrome("racecar"));
    assert!(!is_palindrome("hello"));
}

#[test]
fn test_random_string_example() {
    assert_eq!(random_string(5).len(), 5);
    assert_eq!(random_string(10).len(), 10);
}

// ── Dates and numbers ───────────────────────────────────────────────────

#[test]
fn test_format_date_example() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 12, 24)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc();
    assert_eq!(format_date(&date), "2024-12-24");
}

#[test]
fn test_date_difference_example() -> Result<()> {
    assert_eq!(date_difference_in_days("2024-12-24", "2024-12-31")?, 7);
    Ok(())
}

#[test]
fn test_date_difference_invalid() {
    assert!(matches!(
        date_difference_in_days("yesterday", "2024-12-31"),
        Err(UtilError::InvalidDate { .. })
    ));
}

#[test]
fn test_clamp_examples() {
    assert_eq!(clamp(5, 1, 10), 5);
    assert_eq!(clamp(-5, 1, 10), 1);
    assert_eq!(clamp(15, 1, 10), 10);
}

#[test]
fn test_bytes_examples() {
    assert_eq!(bytes_to_human_readable(1024.0, 2), "1 KB");
    assert_eq!(bytes_to_human_readable(0.0, 2), "0 Bytes");
}

#[test]
fn test_bytes_ties_round_up() {
    assert_eq!(bytes_to_human_readable(1152.0, 2), "1.13 KB");
    assert_eq!(bytes_to_human_readable(2560.0, 0), "3 KB");
}

// ── Timing ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_debounce_executes_once_with_last_arguments() -> Result<()> {
    let (log, record) = call_log::<u32>();
    let debounced = debounce(record, Duration::from_millis(100))?;

    debounced.call(1);
    debounced.call(2);
    sleep(Duration::from_millis(200)).await;

    assert_eq!(*log.lock().unwrap(), vec![2]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_executes_once_with_first_arguments() {
    let (log, record) = call_log::<u32>();
    let throttled = throttle(record, Duration::from_millis(100));

    throttled.call(1);
    throttled.call(2);
    sleep(Duration::from_millis(200)).await;

    assert_eq!(*log.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn test_sleep_delays_execution() {
    let start = std::time::Instant::now();
    sleep(Duration::from_millis(100)).await;
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_sleeps_overlap() {
    let start = tokio::time::Instant::now();
    let finished = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..3)
        .map(|_| {
            let finished = Arc::clone(&finished);
            tokio::spawn(async move {
                sleep(Duration::from_millis(100)).await;
                finished.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(finished.load(Ordering::SeqCst), 3);
    assert!(start.elapsed() < Duration::from_millis(200));
}

// ── Configuration ───────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_settings_from_config_file_drive_wrappers() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[timing]\ndebounce_wait_ms = 40\nthrottle_wait_ms = 40\n\n[text]\nrandom_length = 3\n",
    )?;

    let settings = Settings::from(&FileConfig::load_from(&path)?);
    assert_eq!(settings.random_string().len(), 3);

    let (log, record) = call_log::<&'static str>();
    let debounced = settings.debounce(record)?;
    debounced.call("x");
    debounced.call("y");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(*log.lock().unwrap(), vec!["y"]);

    let (log, record) = call_log::<&'static str>();
    let throttled = settings.throttle(record);
    throttled.call("first");
    tokio::time::advance(Duration::from_millis(40)).await;
    throttled.call("second");
    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    Ok(())
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_escape_round_trip(s in "[^&]*") {
        prop_assert_eq!(unescape_html(&escape_html(&s)), s);
    }

    #[test]
    fn prop_escape_output_has_no_raw_markup(s in ".*") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn prop_random_string_shape(n in 0usize..256) {
        let s = random_string(n);
        prop_assert_eq!(s.len(), n);
        prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn prop_clamp_within_bounds(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let clamped = clamp(v, lo, hi);
        prop_assert!(lo <= clamped && clamped <= hi);
        if (lo..=hi).contains(&v) {
            prop_assert_eq!(clamped, v);
        }
    }

    #[test]
    fn prop_camel_case_idempotent(s in "[a-z]{1,8}([-_][a-z]{1,8}){0,4}") {
        let once = to_camel_case(&s);
        prop_assert_eq!(to_camel_case(&once), once.clone());
        prop_assert!(!once.contains('-') && !once.contains('_'));
    }

    #[test]
    fn prop_deep_clone_equal(map in proptest::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..8)) {
        let value = json!(map);
        prop_assert_eq!(deep_clone(&value).unwrap(), value);
    }
}
