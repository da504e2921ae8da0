//! Error types for the Fleet Billing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading configuration or
//! validating tripsheet input. The calculators themselves never fail.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Fleet Billing Engine.
///
/// # Example
///
/// ```
/// use fleet_billing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Vehicle type code was not found in the configuration.
    #[error("Vehicle type not found: {code}")]
    VehicleTypeNotFound {
        /// The vehicle type code that was not found.
        code: String,
    },

    /// A clock time did not match the `HH:mm` pattern.
    #[error("Invalid clock time '{value}': expected HH:mm")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A tripsheet entry failed intake validation.
    #[error("Invalid entry for {date}: {message}")]
    InvalidEntry {
        /// The date of the offending entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A request field was outside its accepted range.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of the rejected field.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
