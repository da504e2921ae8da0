//! Vehicle billing calculation.
//!
//! Applies a vehicle type's tiered rates to a month's [`TripsheetSummary`]
//! and produces an itemized [`BillingCalculation`]: a base amount, then extra
//! days, extra kilometres and extra hours, then a manual adjustment. The
//! invoice total never drops below zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{BillingCalculation, BillingRules, RulesOrDefault, TripsheetSummary};

use super::amount_in_words::{amount_to_words, WordsStyle};

/// The fallback rate table used when a vehicle type has no usable rates.
///
/// | Field | Value |
/// |---|---|
/// | `base_amount` | 50000 |
/// | `base_days` | 26 |
/// | `extra_day_rate` | 2000 |
/// | `base_kms` | 2500 |
/// | `extra_km_rate` | 12 |
/// | `base_hours_per_day` | 10 |
/// | `extra_hour_rate` | 200 |
pub const DEFAULT_BILLING_RULES: BillingRules = BillingRules {
    base_amount: Decimal::from_parts(50000, 0, 0, false, 0),
    base_days: 26,
    extra_day_rate: Decimal::from_parts(2000, 0, 0, false, 0),
    base_kms: Decimal::from_parts(2500, 0, 0, false, 0),
    extra_km_rate: Decimal::from_parts(12, 0, 0, false, 0),
    base_hours_per_day: Decimal::from_parts(10, 0, 0, false, 0),
    extra_hour_rate: Decimal::from_parts(200, 0, 0, false, 0),
};

/// How many kilometres the base amount covers for a billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BaseKmPolicy {
    /// The vehicle type's `base_kms`, regardless of days worked.
    #[default]
    Flat,
    /// A fixed allowance per working day.
    PerWorkingDay {
        /// Kilometres covered per working day.
        kms_per_day: Decimal,
    },
}

impl BaseKmPolicy {
    /// Returns the kilometres covered for the period.
    pub fn base_kms_for_period(&self, rules: &BillingRules, working_days: u32) -> Decimal {
        match self {
            BaseKmPolicy::Flat => rules.base_kms,
            BaseKmPolicy::PerWorkingDay { kms_per_day } => {
                Decimal::from(working_days) * *kms_per_day
            }
        }
    }
}

/// Options applied on top of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillingOptions {
    /// Base-km policy for the period.
    pub base_km_policy: BaseKmPolicy,
    /// Manual correction added to the sub-total.
    pub adjustments: Decimal,
    /// How `amount_in_words` is rendered.
    pub words: WordsStyle,
}

/// Resolves the rate table to bill with.
///
/// Returns the configured rules, or [`DEFAULT_BILLING_RULES`] for
/// [`RulesOrDefault::Default`].
pub fn resolve_billing_rules(rules: &RulesOrDefault) -> &BillingRules {
    match rules {
        RulesOrDefault::Configured(rules) => rules,
        RulesOrDefault::Default => &DEFAULT_BILLING_RULES,
    }
}

/// Returns the per-day hours above which a working day earns extra hours.
///
/// This is the resolved rate table's `base_hours_per_day`, so a vehicle
/// billed at [`DEFAULT_BILLING_RULES`] uses 10 hours.
pub fn billing_hours_threshold(rules: &RulesOrDefault) -> Decimal {
    resolve_billing_rules(rules).base_hours_per_day
}

/// Calculates the invoice for one vehicle's month.
///
/// # Arguments
///
/// * `summary` - The aggregated tripsheet summary
/// * `rules` - The vehicle type's rates, or the fallback marker
/// * `options` - Base-km policy, adjustments and words style
///
/// # Returns
///
/// A [`BillingCalculation`] with every intermediate figure. This never fails:
/// missing rates are replaced by [`DEFAULT_BILLING_RULES`]. A negative
/// adjustment larger than the sub-total yields a zero `total_amount`, while
/// `sub_total` and `adjustments` keep the submitted figures.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{calculate_billing, BillingOptions};
/// use fleet_billing::models::{BillingRules, RulesOrDefault, TripsheetSummary};
/// use rust_decimal::Decimal;
///
/// let summary = TripsheetSummary {
///     total_working_days: 25,
///     total_kms: Decimal::new(2600, 0),
///     total_hours: Decimal::new(270, 0),
///     total_extra_hours: Decimal::new(8, 0),
///     ..Default::default()
/// };
/// let rules = BillingRules {
///     base_amount: Decimal::new(50000, 0),
///     base_days: 20,
///     extra_day_rate: Decimal::new(2500, 0),
///     base_kms: Decimal::new(2000, 0),
///     extra_km_rate: Decimal::new(13, 0),
///     base_hours_per_day: Decimal::new(10, 0),
///     extra_hour_rate: Decimal::new(250, 0),
/// };
///
/// let billing = calculate_billing(
///     &summary,
///     &RulesOrDefault::Configured(rules),
///     &BillingOptions::default(),
/// );
/// assert_eq!(billing.total_amount, Decimal::new(72300, 0));
/// assert_eq!(billing.amount_in_words, "Seventy Two Thousand Three Hundred Only");
/// ```
pub fn calculate_billing(
    summary: &TripsheetSummary,
    rules: &RulesOrDefault,
    options: &BillingOptions,
) -> BillingCalculation {
    let rates = resolve_billing_rules(rules);
    let working_days = summary.total_working_days;

    let extra_days = working_days.saturating_sub(rates.base_days);
    let extra_days_amount = Decimal::from(extra_days) * rates.extra_day_rate;

    let base_kms = options
        .base_km_policy
        .base_kms_for_period(rates, working_days);
    let extra_kms = (summary.total_kms - base_kms).max(Decimal::ZERO);
    let extra_kms_amount = extra_kms * rates.extra_km_rate;

    let total_base_hours = Decimal::from(working_days) * rates.base_hours_per_day;
    let extra_hours_amount = summary.total_extra_hours * rates.extra_hour_rate;

    let sub_total = rates.base_amount + extra_days_amount + extra_kms_amount + extra_hours_amount;
    let total_amount = (sub_total + options.adjustments).max(Decimal::ZERO);

    debug!(
        rules_source = ?rules.source(),
        working_days,
        extra_days,
        extra_kms = %extra_kms,
        total_extra_hours = %summary.total_extra_hours,
        total_amount = %total_amount,
        "Calculated billing"
    );

    BillingCalculation {
        rules_source: rules.source(),
        total_working_days: working_days,
        base_days: rates.base_days,
        extra_days,
        base_amount: rates.base_amount,
        extra_day_rate: rates.extra_day_rate,
        extra_days_amount,
        total_kms: summary.total_kms,
        base_kms,
        extra_kms,
        extra_km_rate: rates.extra_km_rate,
        extra_kms_amount,
        total_hours: summary.total_hours,
        base_hours_per_day: rates.base_hours_per_day,
        total_base_hours,
        total_extra_hours: summary.total_extra_hours,
        extra_hour_rate: rates.extra_hour_rate,
        extra_hours_amount,
        sub_total,
        adjustments: options.adjustments,
        total_amount,
        amount_in_words: amount_to_words(total_amount, options.words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::WordsSuffix;
    use crate::models::RulesSource;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sedan_rules() -> BillingRules {
        BillingRules {
            base_amount: dec("50000"),
            base_days: 20,
            extra_day_rate: dec("2500"),
            base_kms: dec("2000"),
            extra_km_rate: dec("13"),
            base_hours_per_day: dec("10"),
            extra_hour_rate: dec("250"),
        }
    }

    fn month_summary() -> TripsheetSummary {
        TripsheetSummary {
            total_working_days: 25,
            total_kms: dec("2600"),
            total_hours: dec("270"),
            total_extra_hours: dec("8"),
            ..Default::default()
        }
    }

    // ==========================================================================
    // BC-001: Full month with extra days, km and hours
    // ==========================================================================
    #[test]
    fn test_bc_001_full_month_scenario() {
        let billing = calculate_billing(
            &month_summary(),
            &RulesOrDefault::Configured(sedan_rules()),
            &BillingOptions::default(),
        );

        assert_eq!(billing.rules_source, RulesSource::Configured);
        assert_eq!(billing.extra_days, 5);
        assert_eq!(billing.extra_days_amount, dec("12500"));
        assert_eq!(billing.base_kms, dec("2000"));
        assert_eq!(billing.extra_kms, dec("600"));
        assert_eq!(billing.extra_kms_amount, dec("7800"));
        assert_eq!(billing.total_base_hours, dec("250"));
        assert_eq!(billing.extra_hours_amount, dec("2000"));
        assert_eq!(billing.sub_total, dec("72300"));
        assert_eq!(billing.adjustments, Decimal::ZERO);
        assert_eq!(billing.total_amount, dec("72300"));
        assert_eq!(
            billing.amount_in_words,
            "Seventy Two Thousand Three Hundred Only"
        );
    }

    // ==========================================================================
    // BC-002: Under the base figures only the base amount is billed
    // ==========================================================================
    #[test]
    fn test_bc_002_under_base_figures() {
        let summary = TripsheetSummary {
            total_working_days: 18,
            total_kms: dec("1500"),
            total_hours: dec("170"),
            ..Default::default()
        };
        let billing = calculate_billing(
            &summary,
            &RulesOrDefault::Configured(sedan_rules()),
            &BillingOptions::default(),
        );

        assert_eq!(billing.extra_days, 0);
        assert_eq!(billing.extra_kms, Decimal::ZERO);
        assert_eq!(billing.extra_hours_amount, Decimal::ZERO);
        assert_eq!(billing.total_amount, dec("50000"));
    }

    // ==========================================================================
    // BC-003: Missing rules fall back to the default table
    // ==========================================================================
    #[test]
    fn test_bc_003_default_rules_substituted() {
        let billing = calculate_billing(
            &month_summary(),
            &RulesOrDefault::Default,
            &BillingOptions::default(),
        );

        assert_eq!(billing.rules_source, RulesSource::Default);
        assert_eq!(billing.base_amount, DEFAULT_BILLING_RULES.base_amount);
        assert_eq!(billing.base_days, 26);
        assert_eq!(billing.extra_days, 0);
        // 2600 - 2500 = 100 extra km at 12
        assert_eq!(billing.extra_kms_amount, dec("1200"));
        // 8 extra hours at 200
        assert_eq!(billing.extra_hours_amount, dec("1600"));
        assert_eq!(billing.total_amount, dec("52800"));
    }

    // ==========================================================================
    // BC-004: Adjustments are applied after the sub-total
    // ==========================================================================
    #[test]
    fn test_bc_004_adjustments() {
        let options = BillingOptions {
            adjustments: dec("-300"),
            ..Default::default()
        };
        let billing = calculate_billing(
            &month_summary(),
            &RulesOrDefault::Configured(sedan_rules()),
            &options,
        );

        assert_eq!(billing.sub_total, dec("72300"));
        assert_eq!(billing.total_amount, dec("72000"));
        assert_eq!(billing.amount_in_words, "Seventy Two Thousand Only");
    }

    // ==========================================================================
    // BC-005: An adjustment larger than the sub-total floors the total at zero
    // ==========================================================================
    #[test]
    fn test_bc_005_negative_total_floors_at_zero() {
        let options = BillingOptions {
            adjustments: dec("-60000"),
            ..Default::default()
        };
        let billing = calculate_billing(
            &TripsheetSummary::default(),
            &RulesOrDefault::Default,
            &options,
        );

        assert_eq!(billing.sub_total, dec("50000"));
        assert_eq!(billing.adjustments, dec("-60000"));
        assert_eq!(billing.total_amount, Decimal::ZERO);
        assert_eq!(billing.amount_in_words, "Zero Only");
    }

    #[test]
    fn test_adjustment_equal_to_sub_total_gives_zero() {
        let options = BillingOptions {
            adjustments: dec("-72300"),
            ..Default::default()
        };
        let billing = calculate_billing(
            &month_summary(),
            &RulesOrDefault::Configured(sedan_rules()),
            &options,
        );
        assert_eq!(billing.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_billing_hours_threshold_follows_rules() {
        let mut tempo = sedan_rules();
        tempo.base_hours_per_day = dec("12");
        assert_eq!(
            billing_hours_threshold(&RulesOrDefault::Configured(tempo)),
            dec("12")
        );
        assert_eq!(billing_hours_threshold(&RulesOrDefault::Default), dec("10"));
    }

    #[test]
    fn test_per_working_day_base_km_policy() {
        let options = BillingOptions {
            base_km_policy: BaseKmPolicy::PerWorkingDay {
                kms_per_day: dec("100"),
            },
            ..Default::default()
        };
        let billing = calculate_billing(
            &month_summary(),
            &RulesOrDefault::Configured(sedan_rules()),
            &options,
        );

        assert_eq!(billing.base_kms, dec("2500"));
        assert_eq!(billing.extra_kms, dec("100"));
        assert_eq!(billing.extra_kms_amount, dec("1300"));
    }

    #[test]
    fn test_zero_entry_tripsheet_bills_base_amount() {
        let billing = calculate_billing(
            &TripsheetSummary::default(),
            &RulesOrDefault::Configured(sedan_rules()),
            &BillingOptions::default(),
        );
        assert_eq!(billing.total_amount, dec("50000"));
        assert_eq!(billing.total_base_hours, Decimal::ZERO);
        assert_eq!(billing.amount_in_words, "Fifty Thousand Only");
    }

    #[test]
    fn test_fractional_extra_hours() {
        let summary = TripsheetSummary {
            total_working_days: 20,
            total_extra_hours: dec("2.5"),
            ..Default::default()
        };
        let options = BillingOptions {
            words: WordsStyle {
                suffix: WordsSuffix::RupeesOnly,
                include_paise: false,
            },
            ..Default::default()
        };
        let billing = calculate_billing(
            &summary,
            &RulesOrDefault::Configured(sedan_rules()),
            &options,
        );
        assert_eq!(billing.extra_hours_amount, dec("625.0"));
        assert_eq!(billing.total_amount, dec("50625"));
        assert_eq!(
            billing.amount_in_words,
            "Fifty Thousand Six Hundred Twenty Five Rupees Only"
        );
    }

    #[test]
    fn test_more_kms_never_lowers_total() {
        let rules = RulesOrDefault::Configured(sedan_rules());
        let mut previous = Decimal::ZERO;
        for kms in [0, 500, 1999, 2000, 2001, 2600, 10000] {
            let summary = TripsheetSummary {
                total_kms: Decimal::from(kms),
                ..month_summary()
            };
            let total =
                calculate_billing(&summary, &rules, &BillingOptions::default()).total_amount;
            assert!(total >= previous, "total dropped at {} km", kms);
            previous = total;
        }
    }

    #[test]
    fn test_base_km_policy_deserialization() {
        let flat: BaseKmPolicy = serde_yaml::from_str("type: flat").unwrap();
        assert_eq!(flat, BaseKmPolicy::Flat);

        let per_day: BaseKmPolicy =
            serde_yaml::from_str("type: per_working_day\nkms_per_day: 100").unwrap();
        assert_eq!(
            per_day,
            BaseKmPolicy::PerWorkingDay {
                kms_per_day: dec("100")
            }
        );
    }
}
