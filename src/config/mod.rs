//! Configuration loading and management for the Fleet Billing Engine.
//!
//! This module provides functionality to load fleet configuration from YAML
//! files: company metadata, invoice and payslip settings, and the billing
//! rates of each vehicle type.
//!
//! # Example
//!
//! ```no_run
//! use fleet_billing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fleet").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BillingSettings, CompanyMetadata, FleetConfig, SalarySettings, VehicleType};
