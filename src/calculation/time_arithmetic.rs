//! Clock-time arithmetic for daily trip entries.
//!
//! Converts a pair of `HH:mm` clock readings into elapsed hours, rolling over
//! midnight when the closing time is earlier than the starting time, and
//! derives the extra hours above the billing and driver thresholds.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Default per-day threshold above which hours are billed as extra hours.
///
/// Vehicle types may override this through `base_hours_per_day`.
pub const DEFAULT_EXTRA_HOURS_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Fixed per-day threshold above which drivers are paid overtime.
///
/// Unlike the billing threshold this is not configurable per vehicle type.
pub const DRIVER_EXTRA_HOURS_THRESHOLD: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses an `HH:mm` clock reading.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_clock_time("8.30am").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}

/// Rounds a non-negative hour figure to one decimal place.
pub(crate) fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Returns the hours elapsed between two clock readings, rounded to one decimal.
///
/// If `end` is earlier than `start` the trip is taken to have crossed
/// midnight and a full day is added to `end` before subtracting.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::elapsed_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
/// assert_eq!(elapsed_hours(start, end), Decimal::new(20, 1));
/// ```
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let start_minutes = minutes_since_midnight(start);
    let mut end_minutes = minutes_since_midnight(end);
    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    round_hours(Decimal::new(end_minutes - start_minutes, 0) / Decimal::new(60, 0))
}

/// Returns the hours worked above `threshold`, never negative.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{extra_hours, DEFAULT_EXTRA_HOURS_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let extra = extra_hours(Decimal::new(125, 1), DEFAULT_EXTRA_HOURS_THRESHOLD);
/// assert_eq!(extra, Decimal::new(25, 1));
/// assert_eq!(extra_hours(Decimal::new(9, 0), DEFAULT_EXTRA_HOURS_THRESHOLD), Decimal::ZERO);
/// ```
pub fn extra_hours(total_hours: Decimal, threshold: Decimal) -> Decimal {
    round_hours(total_hours - threshold).max(Decimal::ZERO)
}

/// Returns the driver overtime hours above the fixed 12 hour threshold.
pub fn driver_extra_hours(total_hours: Decimal) -> Decimal {
    extra_hours(total_hours, DRIVER_EXTRA_HOURS_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        parse_clock_time(s).unwrap()
    }

    // ==========================================================================
    // TA-001: Same-day trip
    // ==========================================================================
    #[test]
    fn test_ta_001_same_day_trip() {
        assert_eq!(elapsed_hours(time("08:00"), time("18:30")), dec("10.5"));
    }

    // ==========================================================================
    // TA-002: Trip crossing midnight
    // ==========================================================================
    #[test]
    fn test_ta_002_midnight_rollover() {
        assert_eq!(elapsed_hours(time("23:00"), time("01:00")), dec("2.0"));
        assert_eq!(elapsed_hours(time("20:15"), time("06:45")), dec("10.5"));
    }

    // ==========================================================================
    // TA-003: Equal readings are zero hours, not a full day
    // ==========================================================================
    #[test]
    fn test_ta_003_equal_times_is_zero() {
        assert_eq!(elapsed_hours(time("09:00"), time("09:00")), Decimal::ZERO);
    }

    // ==========================================================================
    // TA-004: Odd minutes round to one decimal
    // ==========================================================================
    #[test]
    fn test_ta_004_rounds_to_one_decimal() {
        // 20 minutes = 0.333.. hours
        assert_eq!(elapsed_hours(time("10:00"), time("10:20")), dec("0.3"));
        // 3 minutes = 0.05 hours, rounds half up
        assert_eq!(elapsed_hours(time("10:00"), time("10:03")), dec("0.1"));
        // 8h 50m = 8.833.. hours
        assert_eq!(elapsed_hours(time("07:10"), time("16:00")), dec("8.8"));
    }

    #[test]
    fn test_extra_hours_zero_at_or_below_threshold() {
        assert_eq!(extra_hours(dec("10"), dec("10")), Decimal::ZERO);
        assert_eq!(extra_hours(dec("4.5"), dec("10")), Decimal::ZERO);
    }

    #[test]
    fn test_extra_hours_linear_above_threshold() {
        assert_eq!(extra_hours(dec("10.1"), dec("10")), dec("0.1"));
        assert_eq!(extra_hours(dec("14.0"), dec("10")), dec("4.0"));
        assert_eq!(extra_hours(dec("14.0"), dec("8")), dec("6.0"));
    }

    #[test]
    fn test_driver_extra_hours_uses_fixed_threshold() {
        assert_eq!(driver_extra_hours(dec("11.9")), Decimal::ZERO);
        assert_eq!(driver_extra_hours(dec("12.0")), Decimal::ZERO);
        assert_eq!(driver_extra_hours(dec("13.0")), dec("1.0"));
    }

    #[test]
    fn test_parse_clock_time_accepts_padding_whitespace() {
        assert_eq!(time(" 07:05 "), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
    }

    #[test]
    fn test_parse_clock_time_rejects_malformed() {
        assert!(parse_clock_time("24:00").is_err());
        assert!(parse_clock_time("7").is_err());
        assert!(parse_clock_time("").is_err());
        match parse_clock_time("noon") {
            Err(EngineError::InvalidTime { value }) => assert_eq!(value, "noon"),
            other => panic!("expected InvalidTime, got {:?}", other),
        }
    }
}
