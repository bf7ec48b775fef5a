// src/error.rs
use thiserror::Error;

/// Custom error types for the payoff-sim library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayoffError {
    /// Option type text that is neither `call` nor `put`
    #[error("Invalid option type '{value}': expected 'call' or 'put'")]
    InvalidOptionType { value: String },

    /// Position text that is neither `long` nor `short`
    #[error("Invalid position '{value}': expected 'long' or 'short'")]
    InvalidPosition { value: String },

    /// Strategy name outside the supported set
    #[error("Unknown strategy '{value}': expected 'Bull Spread', 'Bear Spread' or 'Box Spread'")]
    InvalidStrategy { value: String },

    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Scenario file could not be read or parsed
    #[error("Failed to load scenario from '{path}': {reason}")]
    ScenarioLoad { path: String, reason: String },
}

/// Result type alias for payoff-sim operations
pub type PayoffResult<T> = Result<T, PayoffError>;

/// Validation utilities
pub mod validation {
    use super::{PayoffError, PayoffResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PayoffResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PayoffResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PayoffResult<()> {
        if !value.is_finite() {
            Err(PayoffError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("spot", 100.0).is_ok());
        assert!(validate_positive("spot", 0.0).is_err());
        assert!(validate_positive("spot", -1.0).is_err());
        assert!(validate_positive("spot", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("premium1", 0.0).is_ok());
        assert!(validate_non_negative("premium1", 2.5).is_ok());
        assert!(validate_non_negative("premium1", -0.01).is_err());
        assert!(validate_non_negative("premium1", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = PayoffError::InvalidParameters {
            parameter: "premium2".to_string(),
            value: -0.5,
            constraint: "must be non-negative".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("premium2"));
        assert!(display.contains("-0.5"));
        assert!(display.contains("non-negative"));
    }

    #[test]
    fn test_invalid_option_type_display() {
        let error = PayoffError::InvalidOptionType {
            value: "straddle".to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("straddle"));
        assert!(display.contains("'call' or 'put'"));
    }
}
