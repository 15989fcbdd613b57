//! Worked-hours calculation from check-in/check-out pairs.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Seconds per hour (3600.0).
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Hours worked on `date` given optional check-in and check-out times.
///
/// A check-out earlier than the check-in is taken to land on the next
/// calendar day (night shift), so 22:00 -> 06:00 yields 8.0 hours. No upper
/// bound is applied to the resulting span.
///
/// Returns `None` when either time is missing; the value is unavailable,
/// not zero.
pub fn hours_worked(
    date: NaiveDate,
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
) -> Option<f64> {
    let check_in = date.and_time(check_in?);
    let mut check_out = date.and_time(check_out?);

    if check_out < check_in {
        check_out += Duration::days(1);
    }

    Some((check_out - check_in).num_seconds() as f64 / SECS_PER_HOUR)
}
