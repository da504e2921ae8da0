//! Calculation logic for the Fleet Billing Engine.
//!
//! This module contains the pure calculation functions: clock-time
//! arithmetic, day classification, tripsheet aggregation, vehicle billing,
//! driver salary, and amount-in-words rendering in the Indian numbering
//! system.

mod aggregation;
mod amount_in_words;
mod billing;
mod day_detection;
mod salary;
mod time_arithmetic;

pub use aggregation::{
    ENTRY_OUTSIDE_PERIOD, aggregate_tripsheet, recompute_entry, summarize_entries,
};
pub use amount_in_words::{WordsStyle, WordsSuffix, amount_to_words, number_to_indian_words};
pub use billing::{
    BaseKmPolicy, BillingOptions, DEFAULT_BILLING_RULES, billing_hours_threshold,
    calculate_billing, resolve_billing_rules,
};
pub use day_detection::{DayType, day_name, get_day_type};
pub use salary::{apply_advance_deduction, calculate_salary};
pub use time_arithmetic::{
    DEFAULT_EXTRA_HOURS_THRESHOLD, DRIVER_EXTRA_HOURS_THRESHOLD, driver_extra_hours,
    elapsed_hours, extra_hours, parse_clock_time,
};
