//! Overlap between a work interval and a recurring daily time window.
//!
//! Night and early-morning premiums apply to the part of a shift that falls
//! inside a window defined by clock hours, such as 22:00-05:00. A window
//! whose end hour is not after its start hour crosses midnight.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Returns the window instance anchored on `day`.
///
/// The instance is built by adding hour offsets to midnight, so hours outside
/// 0-23 shift the window into neighbouring days instead of failing. Returns
/// `None` when an offset runs past the representable date range.
fn window_on(
    day: NaiveDate,
    start_hour: u32,
    end_hour: u32,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let midnight = day.and_time(NaiveTime::MIN);
    let start = midnight.checked_add_signed(Duration::try_hours(i64::from(start_hour))?)?;
    let end_offset = if start_hour < end_hour {
        Duration::try_hours(i64::from(end_hour))?
    } else {
        Duration::try_hours(i64::from(end_hour) + 24)?
    };
    let end = midnight.checked_add_signed(end_offset)?;
    Some((start, end))
}

/// Seconds shared by `[a_start, a_end)` and `[b_start, b_end)`.
fn intersection_seconds(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> i64 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if start >= end {
        0
    } else {
        (end - start).num_seconds()
    }
}

/// Returns the hours of `[start, end)` that fall inside the daily window
/// `[window_start_hour, window_end_hour)`.
///
/// One window instance is anchored on every calendar day from the day of
/// `start` through the day of `end`; the overlaps with each are summed.
/// Instances that fall outside the representable date range contribute
/// nothing. Returns zero when `end` is not after `start`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::overlap_hours;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2025-01-01 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-01-02 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // Night window 22:00-05:00 crosses midnight
/// assert_eq!(overlap_hours(start, end, 22, 5), Decimal::from(4));
/// ```
pub fn overlap_hours(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window_start_hour: u32,
    window_end_hour: u32,
) -> Decimal {
    if end <= start {
        return Decimal::ZERO;
    }

    let seconds: i64 = start
        .date()
        .iter_days()
        .take_while(|day| *day <= end.date())
        .filter_map(|day| window_on(day, window_start_hour, window_end_hour))
        .map(|(window_start, window_end)| intersection_seconds(start, end, window_start, window_end))
        .sum();

    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}
