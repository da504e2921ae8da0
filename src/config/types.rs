//! Configuration types for fleet billing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::calculation::{BaseKmPolicy, WordsStyle};
use crate::models::{BillingRules, SalaryRules};

/// Metadata about the operating company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// Trading name printed on invoices and payslips.
    pub name: String,
    /// ISO currency code of every amount.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Invoice-wide settings from billing.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingSettings {
    /// How base kilometres are determined for a period.
    #[serde(default)]
    pub base_km_policy: BaseKmPolicy,
    /// How invoice totals are written in words.
    #[serde(default)]
    pub words: WordsStyle,
}

/// Payslip settings from salary.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalarySettings {
    /// Company-wide salary constants.
    #[serde(default)]
    pub rules: SalaryRules,
    /// How salary totals are written in words.
    #[serde(default)]
    pub words: WordsStyle,
}

/// A vehicle type as written in vehicle_types.yaml.
///
/// `billing_rules` is kept as raw YAML so that one bad table does not stop
/// the whole file from loading.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VehicleTypeRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub billing_rules: Option<serde_yaml::Value>,
}

/// vehicle_types.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VehicleTypesFile {
    pub vehicle_types: HashMap<String, VehicleTypeRecord>,
}

/// A vehicle type and its billing rates.
#[derive(Debug, Clone)]
pub struct VehicleType {
    /// The vehicle type code (e.g., "sedan").
    pub code: String,
    /// The human-readable name.
    pub name: String,
    /// A description of the vehicle type.
    pub description: String,
    /// The rate table, or `None` if absent or unreadable.
    pub billing_rules: Option<BillingRules>,
}

/// The complete fleet configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    company: CompanyMetadata,
    billing: BillingSettings,
    salary: SalarySettings,
    vehicle_types: HashMap<String, VehicleType>,
}

impl FleetConfig {
    /// Creates a new FleetConfig from its component parts.
    pub fn new(
        company: CompanyMetadata,
        billing: BillingSettings,
        salary: SalarySettings,
        vehicle_types: Vec<VehicleType>,
    ) -> Self {
        Self {
            company,
            billing,
            salary,
            vehicle_types: vehicle_types
                .into_iter()
                .map(|vt| (vt.code.clone(), vt))
                .collect(),
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns the invoice settings.
    pub fn billing(&self) -> &BillingSettings {
        &self.billing
    }

    /// Returns the payslip settings.
    pub fn salary(&self) -> &SalarySettings {
        &self.salary
    }

    /// Returns all vehicle types keyed by code.
    pub fn vehicle_types(&self) -> &HashMap<String, VehicleType> {
        &self.vehicle_types
    }
}
