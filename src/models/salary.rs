//! Driver salary models.
//!
//! Salary rules are company-wide rather than per vehicle type. They are held
//! in the loaded configuration and passed to the calculator on every call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company-wide driver salary constants.
///
/// # Example
///
/// ```
/// use fleet_billing::models::SalaryRules;
/// use rust_decimal::Decimal;
///
/// let rules = SalaryRules::default();
/// assert_eq!(rules.base_salary, Decimal::new(20000, 0));
/// assert_eq!(rules.base_days, 22);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRules {
    /// Monthly salary covering `base_days`.
    pub base_salary: Decimal,
    /// Working days covered by the base salary.
    pub base_days: u32,
    /// Pay per working day beyond `base_days`.
    pub extra_day_rate: Decimal,
    /// Hours per day covered by the base salary.
    pub base_hours_per_day: Decimal,
    /// Pay per driver overtime hour.
    pub extra_hour_rate: Decimal,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            base_salary: Decimal::new(20000, 0),
            base_days: 22,
            extra_day_rate: Decimal::new(909, 0),
            base_hours_per_day: Decimal::new(12, 0),
            extra_hour_rate: Decimal::new(80, 0),
        }
    }
}

/// An itemized gross driver salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Working days in the month.
    pub total_working_days: u32,
    /// Working days covered by the base salary.
    pub base_days: u32,
    /// Working days beyond `base_days`.
    pub extra_days: u32,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Pay per extra day.
    pub extra_day_rate: Decimal,
    /// `extra_days * extra_day_rate`.
    pub extra_days_amount: Decimal,
    /// Hours per day covered by the base salary.
    pub base_hours_per_day: Decimal,
    /// Overtime hours above the driver threshold.
    pub total_driver_extra_hours: Decimal,
    /// Pay per overtime hour.
    pub extra_hour_rate: Decimal,
    /// `total_driver_extra_hours * extra_hour_rate`.
    pub extra_hours_amount: Decimal,
    /// Gross salary.
    pub total_salary: Decimal,
    /// `total_salary` in words.
    pub amount_in_words: String,
}

/// Gross salary less any salary advance already paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPayout {
    /// Gross salary from the calculation.
    pub gross_salary: Decimal,
    /// Advance recovered this month.
    pub advance_deduction: Decimal,
    /// Amount to pay, never below zero.
    pub net_payout: Decimal,
    /// `net_payout` in words.
    pub amount_in_words: String,
}
