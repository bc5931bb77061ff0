//! Byte size formatting.
//!
//! Converts raw byte counts into short human-readable strings using binary
//! (1024-based) scaling with the conventional `KB`/`MB`/... labels.

/// Fractional digits used when nothing else is configured.
pub const DEFAULT_DECIMALS: usize = 2;

/// Scale factor between consecutive units.
const KILO: f64 = 1024.0;

/// Unit labels, from bytes up to petabytes.
const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count as a human-readable string.
///
/// The value is divided by 1024 until it drops below 1024 (or the largest
/// unit, `PB`, is reached), rounded to `decimals` fractional digits, and
/// printed without trailing zeros.
///
/// # Arguments
///
/// * `bytes` - The byte count to format
/// * `decimals` - Maximum number of fractional digits
///
/// # Returns
///
/// - `"0 Bytes"` for zero, for negative counts, and for `NaN`/infinity
/// - values below one byte keep the `Bytes` unit (`0.5` → `"0.5 Bytes"`)
/// - values of 1024 PB and above stay in `PB`
///
/// # Examples
///
/// ```
/// # use utilkit::bytes_to_human_readable;
/// assert_eq!(bytes_to_human_readable(1024.0, 2), "1 KB");
/// assert_eq!(bytes_to_human_readable(1_572_864.0, 2), "1.5 MB");
/// assert_eq!(bytes_to_human_readable(0.0, 2), "0 Bytes");
/// ```
#[must_use]
pub fn bytes_to_human_readable(bytes: f64, decimals: usize) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 Bytes".to_string();
    }

    let (scaled, unit) = scale_to_unit(bytes);
    let rounded = round_half_away_from_zero(scaled, decimals);
    let fixed = format!("{rounded:.decimals$}");

    format!("{} {unit}", trim_fraction(&fixed))
}

/// Round to `decimals` fractional digits, with ties going away from zero.
///
/// Plain `{:.N}` formatting sends exact ties to the even digit (`2.5` → `2`),
/// so the rounding happens here before the value is printed.
fn round_half_away_from_zero(value: f64, decimals: usize) -> f64 {
    let factor = i32::try_from(decimals).map_or(f64::INFINITY, |d| 10f64.powi(d));
    let shifted = value * factor;

    if shifted.is_finite() {
        shifted.round() / factor
    } else {
        value
    }
}

/// Divide by 1024 until the value fits the current unit.
fn scale_to_unit(bytes: f64) -> (f64, &'static str) {
    let mut scaled = bytes;
    let mut index = 0;

    while scaled >= KILO && index < UNITS.len() - 1 {
        scaled /= KILO;
        index += 1;
    }

    (scaled, UNITS[index])
}

/// Strip trailing zeros (and a dangling decimal point) from a fixed-point number.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
