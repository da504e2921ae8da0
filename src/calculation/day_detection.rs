//! Day classification for tripsheet entries.
//!
//! Maps a calendar date to its [`DayType`] (working day, Saturday, Sunday)
//! and to the English day name shown on tripsheets.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The kind of calendar day an entry falls on.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Working,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Working => write!(f, "Working"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-03-01 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), DayType::Saturday);
/// // 2025-03-03 is a Monday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()), DayType::Working);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Working,
    }
}

/// Returns the English name of the weekday for `date`.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
