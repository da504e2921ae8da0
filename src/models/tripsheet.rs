//! Tripsheet period, summary and aggregation result models.
//!
//! This module contains the month a tripsheet covers, the [`TripsheetSummary`]
//! folded from its entries, and the [`AggregatedTripsheet`] returned by the
//! aggregator.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::TripEntry;

/// The calendar month a tripsheet covers.
///
/// # Example
///
/// ```
/// use fleet_billing::models::TripsheetPeriod;
/// use chrono::NaiveDate;
///
/// let period = TripsheetPeriod { month: 2, year: 2024 };
/// assert!(period.validate().is_ok());
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripsheetPeriod {
    /// Month number, 1 to 12.
    pub month: u32,
    /// Four digit year.
    pub year: i32,
}

impl TripsheetPeriod {
    /// Checks if a date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    /// Returns the first day of the month, or `None` for an invalid month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Checks that the period names a real calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRequest`] for a month outside 1 to 12 or a
    /// year chrono cannot represent.
    pub fn validate(&self) -> EngineResult<()> {
        self.first_day()
            .map(|_| ())
            .ok_or_else(|| EngineError::InvalidRequest {
                message: format!("period {} is not a calendar month", self),
            })
    }
}

impl std::fmt::Display for TripsheetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Month-level totals for one vehicle's tripsheet.
///
/// Day counts are by entry status. Kilometre and hour totals include
/// working-status entries only; fuel totals include every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripsheetSummary {
    /// Entries with status `working`.
    pub total_working_days: u32,
    /// Entries with status `off`.
    pub total_off_days: u32,
    /// Entries with status `pending`.
    pub total_pending_days: u32,
    /// Kilometres driven on working days.
    pub total_kms: Decimal,
    /// Hours on duty on working days.
    pub total_hours: Decimal,
    /// Hours above the billing threshold on working days.
    pub total_extra_hours: Decimal,
    /// Hours above the driver overtime threshold on working days.
    pub total_driver_extra_hours: Decimal,
    /// Fuel filled across all entries.
    pub total_fuel_litres: Decimal,
    /// Fuel cost across all entries.
    pub total_fuel_amount: Decimal,
}

/// A warning generated during aggregation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The result of aggregating a tripsheet: recomputed entries and their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTripsheet {
    /// The month aggregated.
    pub period: TripsheetPeriod,
    /// Entries with derived fields recomputed, sorted by date.
    pub entries: Vec<TripEntry>,
    /// Totals over `entries`.
    pub summary: TripsheetSummary,
    /// Non-fatal observations about the input.
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}
