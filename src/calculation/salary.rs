//! Driver salary calculation.
//!
//! Drivers are paid a base salary for a fixed number of days, plus a day
//! rate beyond that and an hourly rate for time above the driver overtime
//! threshold. The calculator yields the gross figure; advances are recovered
//! separately by [`apply_advance_deduction`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{NetPayout, SalaryCalculation, SalaryRules, TripsheetSummary};

use super::amount_in_words::{amount_to_words, WordsStyle};

/// Calculates a driver's gross salary for the month.
///
/// Overtime pay uses `total_driver_extra_hours` (the 12 hour threshold
/// figure), not the billing extra hours.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{calculate_salary, WordsStyle};
/// use fleet_billing::models::{SalaryRules, TripsheetSummary};
/// use rust_decimal::Decimal;
///
/// let summary = TripsheetSummary {
///     total_working_days: 25,
///     total_driver_extra_hours: Decimal::new(60, 1),
///     ..Default::default()
/// };
///
/// let salary = calculate_salary(&summary, &SalaryRules::default(), WordsStyle::default());
/// assert_eq!(salary.extra_days, 3);
/// assert_eq!(salary.total_salary, Decimal::new(23207, 0));
/// ```
pub fn calculate_salary(
    summary: &TripsheetSummary,
    rules: &SalaryRules,
    words: WordsStyle,
) -> SalaryCalculation {
    let working_days = summary.total_working_days;

    let extra_days = working_days.saturating_sub(rules.base_days);
    let extra_days_amount = Decimal::from(extra_days) * rules.extra_day_rate;
    let extra_hours_amount = summary.total_driver_extra_hours * rules.extra_hour_rate;
    let total_salary = rules.base_salary + extra_days_amount + extra_hours_amount;

    debug!(
        working_days,
        extra_days,
        driver_extra_hours = %summary.total_driver_extra_hours,
        total_salary = %total_salary,
        "Calculated salary"
    );

    SalaryCalculation {
        total_working_days: working_days,
        base_days: rules.base_days,
        extra_days,
        base_salary: rules.base_salary,
        extra_day_rate: rules.extra_day_rate,
        extra_days_amount,
        base_hours_per_day: rules.base_hours_per_day,
        total_driver_extra_hours: summary.total_driver_extra_hours,
        extra_hour_rate: rules.extra_hour_rate,
        extra_hours_amount,
        total_salary,
        amount_in_words: amount_to_words(total_salary, words),
    }
}

/// Subtracts a salary advance from the gross salary.
///
/// The net payout never goes below zero; an advance larger than the gross
/// salary is recovered only up to the gross amount.
pub fn apply_advance_deduction(
    salary: &SalaryCalculation,
    advance: Decimal,
    words: WordsStyle,
) -> NetPayout {
    let advance_deduction = advance.max(Decimal::ZERO).min(salary.total_salary);
    let net_payout = salary.total_salary - advance_deduction;

    NetPayout {
        gross_salary: salary.total_salary,
        advance_deduction,
        net_payout,
        amount_in_words: amount_to_words(net_payout, words),
    }
}
