//! Request types for the Fleet Billing Engine API.
//!
//! This module defines the JSON request bodies for the calculation endpoints
//! and the intake checks run on them before any calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{TripEntry, TripsheetPeriod};

/// Largest magnitude accepted for a request-level amount such as
/// `adjustments` or `advance_deduction`.
pub const MAX_REQUEST_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn validate_tripsheet(period: &TripsheetPeriod, entries: &[TripEntry]) -> EngineResult<()> {
    period.validate()?;
    entries.iter().try_for_each(TripEntry::validate)
}

fn validate_amount(field: &str, value: Decimal) -> EngineResult<()> {
    if value.abs() > MAX_REQUEST_AMOUNT {
        return Err(EngineError::InvalidRequest {
            message: format!("{} must be within {}, got {}", field, MAX_REQUEST_AMOUNT, value),
        });
    }
    Ok(())
}

/// Request body for `POST /tripsheets/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The month the tripsheet covers.
    pub period: TripsheetPeriod,
    /// Vehicle type code, used for the extra-hours threshold.
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// The month's entries.
    pub entries: Vec<TripEntry>,
}

impl SummaryRequest {
    /// Checks the period and every entry.
    pub fn validate(&self) -> EngineResult<()> {
        validate_tripsheet(&self.period, &self.entries)
    }
}

/// Request body for `POST /billing/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRequest {
    /// The month the tripsheet covers.
    pub period: TripsheetPeriod,
    /// Vehicle type code whose rates apply.
    pub vehicle_type: String,
    /// The month's entries.
    pub entries: Vec<TripEntry>,
    /// Manual correction added to the sub-total.
    #[serde(default)]
    pub adjustments: Decimal,
}

impl BillingRequest {
    /// Checks the period, every entry and the adjustment.
    pub fn validate(&self) -> EngineResult<()> {
        validate_tripsheet(&self.period, &self.entries)?;
        validate_amount("adjustments", self.adjustments)
    }
}

/// Request body for `POST /salary/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The month the tripsheet covers.
    pub period: TripsheetPeriod,
    /// The month's entries.
    pub entries: Vec<TripEntry>,
    /// Advance already paid to the driver, recovered from this month.
    #[serde(default)]
    pub advance_deduction: Decimal,
}

impl SalaryRequest {
    /// Checks the period, every entry and the advance.
    pub fn validate(&self) -> EngineResult<()> {
        validate_tripsheet(&self.period, &self.entries)?;
        validate_amount("advance_deduction", self.advance_deduction)
    }
}
