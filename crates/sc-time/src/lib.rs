//! # sc-time
//!
//! Business-day calendars over [`chrono::NaiveDate`] and the spreadsheet
//! `NETWORKDAYS` function.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Calendar` trait and its implementations.
pub mod calendar;

/// `NETWORKDAYS`.
pub mod network_days;

pub use calendar::{Calendar, HolidayCalendar, WeekendsOnly};
pub use chrono::NaiveDate;
pub use network_days::network_days;
