//! Trip entry model and related types.
//!
//! A [`TripEntry`] is one calendar day of one vehicle's tripsheet. It carries
//! the raw readings a driver submits plus the fields derived from them during
//! aggregation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;
use crate::error::{EngineError, EngineResult};

/// Largest accepted odometer reading, in kilometres.
pub const MAX_ODOMETER_KM: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Largest accepted fuel quantity for one entry, in litres.
pub const MAX_FUEL_LITRES: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Largest accepted fuel cost for one entry.
pub const MAX_FUEL_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// What happened to the vehicle on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The vehicle was in service.
    Working,
    /// The vehicle was off duty.
    Off,
    /// The day has not been filled in yet.
    Pending,
}

/// Serde adapter for optional `HH:mm` clock readings.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calculation::parse_clock_time;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_clock_time(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// One day's record for one vehicle.
///
/// Raw fields are supplied by the driver. Derived fields (`day_of_week`,
/// `day_type`, `total_km`, `total_hours`, `extra_hours`,
/// `driver_extra_hours`) are recomputed on every aggregation and whatever
/// the caller supplied for them is discarded.
///
/// # Example
///
/// ```
/// use fleet_billing::models::{EntryStatus, TripEntry};
/// use chrono::NaiveDate;
///
/// let entry = TripEntry::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), EntryStatus::Working);
/// assert!(entry.total_km.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEntry {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// English day name, derived from `date`.
    #[serde(default)]
    pub day_of_week: Option<String>,
    /// Day classification, derived from `date`.
    #[serde(default)]
    pub day_type: Option<DayType>,
    /// Whether the vehicle worked this day.
    pub status: EntryStatus,
    /// Odometer reading at the start of the day.
    #[serde(default)]
    pub starting_km: Option<Decimal>,
    /// Odometer reading at the end of the day.
    #[serde(default)]
    pub closing_km: Option<Decimal>,
    /// Kilometres driven, derived.
    #[serde(default)]
    pub total_km: Option<Decimal>,
    /// Reporting time.
    #[serde(default, with = "clock_time")]
    pub starting_time: Option<NaiveTime>,
    /// Release time; earlier than `starting_time` means the day ran past midnight.
    #[serde(default, with = "clock_time")]
    pub closing_time: Option<NaiveTime>,
    /// Elapsed hours, derived.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Hours above the vehicle's billing threshold, derived.
    #[serde(default)]
    pub extra_hours: Option<Decimal>,
    /// Hours above the driver overtime threshold, derived.
    #[serde(default)]
    pub driver_extra_hours: Option<Decimal>,
    /// Fuel filled, in litres.
    #[serde(default)]
    pub fuel_litres: Option<Decimal>,
    /// Fuel cost.
    #[serde(default)]
    pub fuel_amount: Option<Decimal>,
    /// Free text.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl TripEntry {
    /// Creates an entry with only a date and status set.
    pub fn new(date: NaiveDate, status: EntryStatus) -> Self {
        Self {
            date,
            day_of_week: None,
            day_type: None,
            status,
            starting_km: None,
            closing_km: None,
            total_km: None,
            starting_time: None,
            closing_time: None,
            total_hours: None,
            extra_hours: None,
            driver_extra_hours: None,
            fuel_litres: None,
            fuel_amount: None,
            remarks: None,
        }
    }

    /// Sets the odometer readings.
    pub fn with_km(mut self, starting: Decimal, closing: Decimal) -> Self {
        self.starting_km = Some(starting);
        self.closing_km = Some(closing);
        self
    }

    /// Sets the reporting and release times.
    pub fn with_times(mut self, starting: NaiveTime, closing: NaiveTime) -> Self {
        self.starting_time = Some(starting);
        self.closing_time = Some(closing);
        self
    }

    /// Sets the fuel figures.
    pub fn with_fuel(mut self, litres: Decimal, amount: Decimal) -> Self {
        self.fuel_litres = Some(litres);
        self.fuel_amount = Some(amount);
        self
    }

    /// Returns true if the vehicle worked this day.
    pub fn is_working(&self) -> bool {
        self.status == EntryStatus::Working
    }

    /// Checks the raw readings before the entry is accepted into a tripsheet.
    ///
    /// This is intake validation; aggregation assumes it has already passed
    /// and does not call it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if a reading is negative or above
    /// its cap ([`MAX_ODOMETER_KM`], [`MAX_FUEL_LITRES`], [`MAX_FUEL_AMOUNT`]),
    /// if the closing odometer is below the starting one, or if only one of
    /// the two clock times is present.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidEntry {
            date: self.date,
            message: message.to_string(),
        };

        let readings = [
            ("starting km", self.starting_km, MAX_ODOMETER_KM),
            ("closing km", self.closing_km, MAX_ODOMETER_KM),
            ("fuel litres", self.fuel_litres, MAX_FUEL_LITRES),
            ("fuel amount", self.fuel_amount, MAX_FUEL_AMOUNT),
        ];
        for (name, value, cap) in readings {
            let Some(value) = value else { continue };
            if value < Decimal::ZERO {
                return Err(invalid(&format!("{} cannot be negative", name)));
            }
            if value > cap {
                return Err(invalid(&format!("{} exceeds {}", name, cap)));
            }
        }

        if let (Some(starting), Some(closing)) = (self.starting_km, self.closing_km) {
            if closing < starting {
                return Err(invalid("closing km is below starting km"));
            }
        }

        if self.starting_time.is_some() != self.closing_time.is_some() {
            return Err(invalid("starting and closing time must be given together"));
        }

        Ok(())
    }

    /// Drops every derived field, keeping only the raw readings.
    pub(crate) fn clear_derived(&mut self) {
        self.day_of_week = None;
        self.day_type = None;
        self.total_km = None;
        self.total_hours = None;
        self.extra_hours = None;
        self.driver_extra_hours = None;
    }
}
