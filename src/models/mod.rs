//! Core data models for the Fleet Billing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod billing;
mod salary;
mod trip_entry;
mod tripsheet;

pub use billing::{BillingCalculation, BillingRules, RulesOrDefault, RulesSource};
pub use salary::{NetPayout, SalaryCalculation, SalaryRules};
pub use trip_entry::{EntryStatus, MAX_FUEL_AMOUNT, MAX_FUEL_LITRES, MAX_ODOMETER_KM, TripEntry};
pub use tripsheet::{AggregatedTripsheet, AuditWarning, TripsheetPeriod, TripsheetSummary};
