//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fleet
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::{BillingOptions, DEFAULT_EXTRA_HOURS_THRESHOLD, billing_hours_threshold};
use crate::error::{EngineError, EngineResult};
use crate::models::{BillingRules, RulesOrDefault, SalaryRules};

use super::types::{
    BillingSettings, CompanyMetadata, FleetConfig, SalarySettings, VehicleType, VehicleTypesFile,
};

/// Loads and provides access to fleet configuration.
///
/// # Directory Structure
///
/// ```text
/// config/fleet/
/// ├── company.yaml        # Company metadata
/// ├── billing.yaml        # Base-km policy and invoice words style
/// ├── salary.yaml         # Driver salary constants and payslip words style
/// └── vehicle_types.yaml  # Vehicle types and their billing rates
/// ```
///
/// # Example
///
/// ```no_run
/// use fleet_billing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fleet").unwrap();
/// let rules = loader.billing_rules_for("sedan");
/// println!("Company: {}", loader.company().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FleetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if any file is
    /// missing or contains invalid YAML. A vehicle type whose billing rules
    /// cannot be read is kept, with no rules, and billed at the default rates.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fleet_billing::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fleet")?;
    /// # Ok::<(), fleet_billing::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let billing = Self::load_yaml::<BillingSettings>(&path.join("billing.yaml"))?;
        let salary = Self::load_yaml::<SalarySettings>(&path.join("salary.yaml"))?;
        let vehicle_types_file =
            Self::load_yaml::<VehicleTypesFile>(&path.join("vehicle_types.yaml"))?;

        let vehicle_types = vehicle_types_file
            .vehicle_types
            .into_iter()
            .map(|(code, record)| {
                let billing_rules = record.billing_rules.and_then(|raw| {
                    serde_yaml::from_value::<BillingRules>(raw)
                        .map_err(|e| {
                            warn!(
                                vehicle_type = %code,
                                error = %e,
                                "Unreadable billing rules, default rates will apply"
                            );
                        })
                        .ok()
                });
                VehicleType {
                    code,
                    name: record.name,
                    description: record.description,
                    billing_rules,
                }
            })
            .collect();

        Ok(Self::from_config(FleetConfig::new(
            company,
            billing,
            salary,
            vehicle_types,
        )))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: FleetConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying fleet configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Gets a vehicle type by its code.
    ///
    /// # Returns
    ///
    /// Returns the vehicle type if found, or `VehicleTypeNotFound`.
    pub fn vehicle_type(&self, code: &str) -> EngineResult<&VehicleType> {
        self.config
            .vehicle_types()
            .get(code)
            .ok_or_else(|| EngineError::VehicleTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Resolves the billing rates for a vehicle type.
    ///
    /// An unknown code, a vehicle type without rates, or invalid rates all
    /// resolve to [`RulesOrDefault::Default`]; this lookup never fails.
    pub fn billing_rules_for(&self, code: &str) -> RulesOrDefault {
        let configured = self
            .config
            .vehicle_types()
            .get(code)
            .and_then(|vt| vt.billing_rules.clone());

        let resolved = RulesOrDefault::from_configured(configured);
        if resolved == RulesOrDefault::Default {
            warn!(vehicle_type = %code, "No usable billing rules for vehicle type");
        }
        resolved
    }

    /// Returns the per-day billing threshold for a vehicle type.
    ///
    /// Uses [`DEFAULT_EXTRA_HOURS_THRESHOLD`] when no vehicle type is given,
    /// and the default rate table's threshold when the vehicle type has no
    /// usable rates.
    pub fn extra_hours_threshold_for(&self, code: Option<&str>) -> Decimal {
        code.map_or(DEFAULT_EXTRA_HOURS_THRESHOLD, |code| {
            billing_hours_threshold(&self.billing_rules_for(code))
        })
    }

    /// Returns invoice options using the configured policy and words style.
    pub fn billing_options(&self, adjustments: Decimal) -> BillingOptions {
        let settings = self.config.billing();
        BillingOptions {
            base_km_policy: settings.base_km_policy,
            adjustments,
            words: settings.words,
        }
    }

    /// Returns the company-wide salary constants.
    pub fn salary_rules(&self) -> &SalaryRules {
        &self.config.salary().rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{BaseKmPolicy, WordsSuffix};
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/fleet"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes a config directory under the system temp dir.
    fn write_config(files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fleet-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        dir
    }

    const COMPANY: &str = "name: Test Travels\n";
    const BILLING: &str = "{}\n";
    const SALARY: &str = "{}\n";

    #[test]
    fn test_load_valid_configuration() {
        let loader = ConfigLoader::load(config_path());
        assert!(loader.is_ok(), "Failed to load config: {:?}", loader.err());
    }

    #[test]
    fn test_company_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.company().currency, "INR");
        assert!(!loader.company().name.is_empty());
    }

    #[test]
    fn test_get_vehicle_type() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let sedan = loader.vehicle_type("sedan").unwrap();
        assert_eq!(sedan.code, "sedan");
        let rules = sedan.billing_rules.as_ref().unwrap();
        assert_eq!(rules.base_amount, dec("50000"));
        assert_eq!(rules.base_days, 20);
    }

    #[test]
    fn test_get_vehicle_type_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        match loader.vehicle_type("hovercraft") {
            Err(EngineError::VehicleTypeNotFound { code }) => assert_eq!(code, "hovercraft"),
            other => panic!("Expected VehicleTypeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_billing_rules_for_known_and_unknown() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(matches!(
            loader.billing_rules_for("sedan"),
            RulesOrDefault::Configured(_)
        ));
        assert_eq!(
            loader.billing_rules_for("hovercraft"),
            RulesOrDefault::Default
        );
    }

    #[test]
    fn test_vehicle_type_without_rules_uses_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.vehicle_type("pickup").unwrap().billing_rules.is_none());
        assert_eq!(loader.billing_rules_for("pickup"), RulesOrDefault::Default);
    }

    #[test]
    fn test_salary_rules_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.salary_rules(), &SalaryRules::default());
    }

    #[test]
    fn test_extra_hours_threshold_for() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.extra_hours_threshold_for(Some("tempo_traveller")), dec("12"));
        assert_eq!(loader.extra_hours_threshold_for(Some("hovercraft")), dec("10"));
        assert_eq!(loader.extra_hours_threshold_for(None), dec("10"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config(&[
            ("company.yaml", "name: [unclosed\n"),
            ("billing.yaml", BILLING),
            ("salary.yaml", SALARY),
            ("vehicle_types.yaml", "vehicle_types: {}\n"),
        ]);
        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_malformed_rules_do_not_fail_load() {
        let vehicle_types = r#"
vehicle_types:
  van:
    name: Van
    billing_rules:
      base_amount: 40000
      base_days: "twenty"
  zero_days:
    name: Broken
    billing_rules:
      base_amount: 40000
      base_days: 0
      extra_day_rate: 1000
      base_kms: 2000
      extra_km_rate: 10
      base_hours_per_day: 10
      extra_hour_rate: 100
"#;
        let dir = write_config(&[
            ("company.yaml", COMPANY),
            ("billing.yaml", BILLING),
            ("salary.yaml", SALARY),
            ("vehicle_types.yaml", vehicle_types),
        ]);
        let loader = ConfigLoader::load(&dir).unwrap();

        assert!(loader.vehicle_type("van").unwrap().billing_rules.is_none());
        assert_eq!(loader.billing_rules_for("van"), RulesOrDefault::Default);
        assert!(loader.vehicle_type("zero_days").unwrap().billing_rules.is_some());
        assert_eq!(loader.billing_rules_for("zero_days"), RulesOrDefault::Default);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_settings_overrides() {
        let billing = "base_km_policy:\n  type: per_working_day\n  kms_per_day: 100\nwords:\n  suffix: rupees_only\n";
        let salary = "rules:\n  base_salary: 21000\n";
        let dir = write_config(&[
            ("company.yaml", COMPANY),
            ("billing.yaml", billing),
            ("salary.yaml", salary),
            ("vehicle_types.yaml", "vehicle_types: {}\n"),
        ]);
        let loader = ConfigLoader::load(&dir).unwrap();

        let options = loader.billing_options(dec("150"));
        assert_eq!(
            options.base_km_policy,
            BaseKmPolicy::PerWorkingDay {
                kms_per_day: dec("100")
            }
        );
        assert_eq!(options.words.suffix, WordsSuffix::RupeesOnly);
        assert_eq!(options.adjustments, dec("150"));
        assert_eq!(loader.salary_rules().base_salary, dec("21000"));
        assert_eq!(loader.salary_rules().base_days, 22);
        fs::remove_dir_all(dir).ok();
    }
}
