//! Instant arithmetic used by every zman method.
//!
//! All operations work on `DateTime<Tz>` and keep nanosecond precision;
//! rounding happens only when a result is formatted for display.

use std::fmt::Display;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};

/// Hours in a halachic day; a proportional hour is 1/12 of the anchor span.
pub const HOURS_PER_DAY: f64 = 12.0;

const NANOS_PER_MINUTE: f64 = 60.0 * 1.0e9;

/// Offset `t` by a signed, possibly fractional, number of minutes.
pub fn add_offset<T: TimeZone>(t: &DateTime<T>, minutes: f64) -> DateTime<T> {
    t.clone() + Duration::nanoseconds((minutes * NANOS_PER_MINUTE).round() as i64)
}

/// Halfway point between two instants, independent of argument order.
pub fn midpoint<T: TimeZone>(a: &DateTime<T>, b: &DateTime<T>) -> DateTime<T> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let half = (hi.clone() - lo.clone()) / 2;
    lo.clone() + half
}

/// `start + (end - start) / 12 * hours`.
///
/// `hours` may be fractional (10.75 for plag hamincha) or outside [0, 12].
pub fn proportional_hour<T: TimeZone>(
    start: &DateTime<T>,
    end: &DateTime<T>,
    hours: f64,
) -> DateTime<T> {
    let span = nanos_between(start, end);
    let offset = (span * hours / HOURS_PER_DAY).floor();
    start.clone() + Duration::nanoseconds(offset as i64)
}

/// Length of one proportional hour (shaah zmanis) between two anchors.
pub fn shaah_zmanis<T: TimeZone>(start: &DateTime<T>, end: &DateTime<T>) -> Duration {
    let span = nanos_between(start, end);
    Duration::nanoseconds((span / HOURS_PER_DAY).floor() as i64)
}

/// Local wall-clock `HH:MM:SS`; sub-second digits are dropped, not rounded.
pub fn format_hms<T: TimeZone>(t: &DateTime<T>) -> String
where
    T::Offset: Display,
{
    t.format("%H:%M:%S").to_string()
}

/// Rebuild an instant from an `HH:MM:SS` string on a local date.
///
/// Returns `None` for malformed input or a wall-clock time that does not
/// exist in `tz` (spring-forward gap). Ambiguous times take the earlier one.
pub fn parse_hms<T: TimeZone>(date: NaiveDate, tz: &T, hms: &str) -> Option<DateTime<T>> {
    let time = NaiveTime::parse_from_str(hms, "%H:%M:%S").ok()?;
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

fn nanos_between<T: TimeZone>(start: &DateTime<T>, end: &DateTime<T>) -> f64 {
    let span = end.clone() - start.clone();
    match span.num_nanoseconds() {
        Some(n) => n as f64,
        None => span.num_milliseconds() as f64 * 1.0e6,
    }
}
