//! Instant and hour arithmetic.
//!
//! The model measures durations in fractional hours while instants are
//! calendar date-times without a zone. Conversions go through whole
//! microseconds, which keeps integral and half-hour durations exact.

use chrono::{Duration, NaiveDateTime};

/// An absolute instant on the timeline.
pub type Instant = NaiveDateTime;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Converts fractional hours into a `Duration`.
///
/// Returns `None` for non-finite input or durations outside the range
/// representable in microseconds.
pub fn hours_to_duration(hours: f64) -> Option<Duration> {
    if !hours.is_finite() {
        return None;
    }
    let micros = (hours * MICROS_PER_HOUR).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return None;
    }
    Some(Duration::microseconds(micros as i64))
}

/// Advances an instant by fractional hours.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use storm_router::domain::add_hours;
///
/// let t = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let later = add_hours(t, 1.5).unwrap();
/// assert_eq!(later.to_string(), "2024-01-01 09:30:00");
/// ```
pub fn add_hours(at: Instant, hours: f64) -> Option<Instant> {
    at.checked_add_signed(hours_to_duration(hours)?)
}

/// Elapsed hours from `from` to `to` (negative if `to` is earlier).
pub fn hours_between(from: Instant, to: Instant) -> f64 {
    let elapsed = to.signed_duration_since(from);
    match elapsed.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        None => elapsed.num_seconds() as f64 / 3600.0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        /// Adding hours then measuring the gap recovers the hours
        #[test]
        fn add_then_between(hours in 0.0f64..10_000.0) {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
            let end = add_hours(start, hours).unwrap();
            prop_assert!((hours_between(start, end) - hours).abs() < 1e-6);
        }

        /// Adding a non-negative duration never moves backwards
        #[test]
        fn add_is_monotonic(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(add_hours(start, lo).unwrap() <= add_hours(start, hi).unwrap());
        }
    }
}
