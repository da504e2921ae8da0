//! Billing rule and invoice models.
//!
//! [`BillingRules`] is a vehicle type's rate table, [`RulesOrDefault`] is the
//! resolved choice between a configured table and the fallback one, and
//! [`BillingCalculation`] is the itemized invoice produced from a summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A vehicle type's tiered billing rates.
///
/// # Example
///
/// ```
/// use fleet_billing::models::BillingRules;
/// use rust_decimal::Decimal;
///
/// let rules = BillingRules {
///     base_amount: Decimal::new(50000, 0),
///     base_days: 20,
///     extra_day_rate: Decimal::new(2500, 0),
///     base_kms: Decimal::new(2000, 0),
///     extra_km_rate: Decimal::new(13, 0),
///     base_hours_per_day: Decimal::new(10, 0),
///     extra_hour_rate: Decimal::new(250, 0),
/// };
/// assert!(rules.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRules {
    /// Flat monthly charge covering `base_days`, `base_kms` and base hours.
    pub base_amount: Decimal,
    /// Working days included in the base amount.
    pub base_days: u32,
    /// Charge per working day beyond `base_days`.
    pub extra_day_rate: Decimal,
    /// Kilometres included in the base amount.
    pub base_kms: Decimal,
    /// Charge per kilometre beyond the base kilometres.
    pub extra_km_rate: Decimal,
    /// Hours per day included before extra hours are billed.
    pub base_hours_per_day: Decimal,
    /// Charge per extra hour.
    pub extra_hour_rate: Decimal,
}

impl BillingRules {
    /// Returns true if every rate is non-negative and the day/hour bases are at least one.
    pub fn is_valid(&self) -> bool {
        let non_negative = [
            self.base_amount,
            self.extra_day_rate,
            self.base_kms,
            self.extra_km_rate,
            self.extra_hour_rate,
        ]
        .iter()
        .all(|v| *v >= Decimal::ZERO);

        non_negative && self.base_days >= 1 && self.base_hours_per_day >= Decimal::ONE
    }
}

/// Where the rates used for an invoice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesSource {
    /// The vehicle type's own configured rates.
    Configured,
    /// The fallback rate table.
    Default,
}

/// A vehicle type's rates, or the instruction to use the fallback table.
///
/// Resolved once, before billing, so the calculator never has to inspect a
/// possibly missing or malformed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesOrDefault {
    /// Valid configured rates.
    Configured(BillingRules),
    /// No usable configuration; bill with the fallback table.
    Default,
}

impl RulesOrDefault {
    /// Wraps an optional rate table, falling back when it is absent or invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use fleet_billing::models::RulesOrDefault;
    ///
    /// assert_eq!(RulesOrDefault::from_configured(None), RulesOrDefault::Default);
    /// ```
    pub fn from_configured(rules: Option<BillingRules>) -> Self {
        match rules {
            Some(rules) if rules.is_valid() => RulesOrDefault::Configured(rules),
            _ => RulesOrDefault::Default,
        }
    }

    /// Returns which source these rules represent.
    pub fn source(&self) -> RulesSource {
        match self {
            RulesOrDefault::Configured(_) => RulesSource::Configured,
            RulesOrDefault::Default => RulesSource::Default,
        }
    }
}

/// An itemized vehicle-rental invoice.
///
/// Every intermediate figure is retained so the invoice can be audited line
/// by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCalculation {
    /// Whether configured or fallback rates were applied.
    pub rules_source: RulesSource,
    /// Working days in the month.
    pub total_working_days: u32,
    /// Working days covered by the base amount.
    pub base_days: u32,
    /// Working days beyond `base_days`.
    pub extra_days: u32,
    /// Flat monthly charge.
    pub base_amount: Decimal,
    /// Charge per extra day.
    pub extra_day_rate: Decimal,
    /// `extra_days * extra_day_rate`.
    pub extra_days_amount: Decimal,
    /// Kilometres driven in the month.
    pub total_kms: Decimal,
    /// Kilometres covered for the period under the base-km policy.
    pub base_kms: Decimal,
    /// Kilometres beyond `base_kms`.
    pub extra_kms: Decimal,
    /// Charge per extra kilometre.
    pub extra_km_rate: Decimal,
    /// `extra_kms * extra_km_rate`.
    pub extra_kms_amount: Decimal,
    /// Hours on duty in the month.
    pub total_hours: Decimal,
    /// Hours per day covered by the base amount.
    pub base_hours_per_day: Decimal,
    /// `total_working_days * base_hours_per_day`.
    pub total_base_hours: Decimal,
    /// Extra hours accumulated per entry during aggregation.
    pub total_extra_hours: Decimal,
    /// Charge per extra hour.
    pub extra_hour_rate: Decimal,
    /// `total_extra_hours * extra_hour_rate`.
    pub extra_hours_amount: Decimal,
    /// Base amount plus all extras.
    pub sub_total: Decimal,
    /// Manual post-hoc correction.
    pub adjustments: Decimal,
    /// `sub_total + adjustments`.
    pub total_amount: Decimal,
    /// `total_amount` in words.
    pub amount_in_words: String,
}
