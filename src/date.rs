//! Date formatting and day arithmetic.
//!
//! Dates are handled with `chrono`. Anything that can be turned into an
//! instant implements [`DateInput`], so [`date_difference_in_days`] accepts
//! strings and chrono types alike.

use std::fmt::Display;

use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};

use crate::error::{Result, UtilError};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Date-time layouts without an offset, interpreted in local time.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A value that can be resolved to a single instant in time.
pub trait DateInput {
    /// Resolve the value to a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::InvalidDate`] when the value does not describe a
    /// valid instant (unparsable strings).
    fn resolve_utc(&self) -> Result<DateTime<Utc>>;
}

impl<Tz: TimeZone> DateInput for DateTime<Tz> {
    fn resolve_utc(&self) -> Result<DateTime<Utc>> {
        Ok(self.with_timezone(&Utc))
    }
}

/// A bare calendar date means midnight UTC.
impl DateInput for NaiveDate {
    fn resolve_utc(&self) -> Result<DateTime<Utc>> {
        Ok(self.and_time(NaiveTime::MIN).and_utc())
    }
}

/// A date-time without an offset is read as local time.
impl DateInput for NaiveDateTime {
    fn resolve_utc(&self) -> Result<DateTime<Utc>> {
        local_to_utc(*self).ok_or_else(|| UtilError::InvalidDate {
            input: self.to_string(),
        })
    }
}

impl DateInput for str {
    fn resolve_utc(&self) -> Result<DateTime<Utc>> {
        parse_date(self)
    }
}

impl DateInput for String {
    fn resolve_utc(&self) -> Result<DateTime<Utc>> {
        parse_date(self)
    }
}

/// Parse a date string into a UTC instant.
///
/// Accepted forms, tried in order:
///
/// - RFC 3339 (`2024-12-24T10:00:00+02:00`, `2024-12-24T08:00:00Z`)
/// - a bare date `YYYY-MM-DD`, read as midnight UTC
/// - `YYYY-MM-DDTHH:MM[:SS[.fff]]` (or with a space instead of `T`), read as
///   local time
/// - RFC 2822 (`Tue, 24 Dec 2024 10:00:00 +0000`)
///
/// # Errors
///
/// Returns [`UtilError::InvalidDate`] if none of the forms match.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.resolve_utc();
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return naive.resolve_utc();
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    Err(UtilError::InvalidDate {
        input: input.to_string(),
    })
}

/// Map a local wall-clock time to UTC.
///
/// Ambiguous times (clocks turned back) take the earlier instant; times that
/// fall into a gap (clocks turned forward) are shifted forward by an hour.
fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            Local.from_local_datetime(&shifted).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a date as `YYYY-MM-DD` in its own time zone.
///
/// Month and day are zero-padded.
///
/// # Examples
///
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use utilkit::format_date;
/// let date = Utc.with_ymd_and_hms(2024, 3, 7, 18, 0, 0).unwrap();
/// assert_eq!(format_date(&date), "2024-03-07");
/// ```
#[must_use]
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the local calendar, as `YYYY-MM-DD`.
#[must_use]
pub fn format_today() -> String {
    format_date(&Local::now())
}

/// Absolute difference between two dates in whole days, rounded up.
///
/// The difference is measured in milliseconds, so any partial day counts as
/// a full one: two instants an hour apart are `1` day apart, identical
/// instants are `0`.
///
/// # Errors
///
/// Returns [`UtilError::InvalidDate`] if either input cannot be parsed.
///
/// # Examples
///
/// ```
/// # use utilkit::date_difference_in_days;
/// assert_eq!(date_difference_in_days("2024-12-24", "2024-12-31").unwrap(), 7);
/// ```
pub fn date_difference_in_days<A, B>(first: &A, second: &B) -> Result<u64>
where
    A: DateInput + ?Sized,
    B: DateInput + ?Sized,
{
    let elapsed = first.resolve_utc()? - second.resolve_utc()?;
    Ok(elapsed
        .num_milliseconds()
        .unsigned_abs()
        .div_ceil(MILLIS_PER_DAY))
}
