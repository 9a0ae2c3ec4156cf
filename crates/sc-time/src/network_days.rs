//! `NETWORKDAYS`: working days between two dates.

use crate::calendar::{Calendar, HolidayCalendar};
use chrono::NaiveDate;
use sc_core::Size;

/// `NETWORKDAYS` — number of weekdays in `[start, end]` that are not in
/// `holidays`. Both ends count. Returns `0` when `start > end`.
///
/// Holidays falling on a weekend, or outside the range, have no effect;
/// duplicates count once.
///
/// ```
/// use sc_time::{network_days, NaiveDate};
///
/// let mon = NaiveDate::from_ymd_opt(2024, 2, 19).unwrap();
/// let fri = NaiveDate::from_ymd_opt(2024, 2, 23).unwrap();
/// assert_eq!(network_days(mon, fri, &[]), 5);
/// ```
pub fn network_days(start: NaiveDate, end: NaiveDate, holidays: &[NaiveDate]) -> Size {
    HolidayCalendar::new("NETWORKDAYS")
        .with_holidays(holidays.iter().copied())
        .business_days_between(start, end)
}
