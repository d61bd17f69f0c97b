//! Error types for the vacation pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, its configuration loader and its holiday
//! calendar loader can produce.
//!
//! Errors fall into two disjoint classes:
//! - user-input errors raised by request validation, which the caller can fix
//!   by resubmitting a corrected request;
//! - invariant and configuration errors, which signal a defect in the
//!   strategy set or in the deployed data and are never the caller's fault.

use thiserror::Error;

/// Stable code for a request that names neither vacation days nor dates.
pub const CODE_PARAMETERS_MISSING: &str = "VACATION_PARAMETERS_MISSING";
/// Stable code for a request that names both vacation days and dates.
pub const CODE_PARAMETERS_ALL_SPECIFIED: &str = "VACATION_PARAMETERS_ALL_SPECIFIED";
/// Stable code for a request with only one of the two period dates.
pub const CODE_DATES_INCOMPLETE: &str = "VACATION_DATES_INCOMPLETE";
/// Stable code for a period whose start date is after its end date.
pub const CODE_INVALID_PERIOD: &str = "INVALID_VACATION_PERIOD";
/// Stable code for every internal or unexpected failure.
pub const CODE_INTERNAL: &str = "INTERNAL_EXCEPTION";

/// The main error type for the vacation pay engine.
///
/// # Example
///
/// ```
/// use vacation_pay::error::EngineError;
///
/// let error = EngineError::InvalidPeriod;
/// assert_eq!(error.code(), "INVALID_VACATION_PERIOD");
/// assert_eq!(error.to_string(), "Vacation start date must not be after end date");
/// assert!(error.is_user_error());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Neither vacation days nor a vacation period was given.
    #[error("Either vacation days or vacation period dates must be specified")]
    ParametersMissing,

    /// Vacation days and both period dates were given together.
    #[error("Vacation days and dates must not be specified all together")]
    ParametersAllSpecified,

    /// Only one of the period's start and end dates was given.
    #[error("Both start date and end date must be specified for vacation period")]
    DatesIncomplete,

    /// The period's start date falls after its end date.
    #[error("Vacation start date must not be after end date")]
    InvalidPeriod,

    /// No registered strategy supports the request.
    #[error("A suitable vacation payment strategy has not been found")]
    NoStrategyFound,

    /// More than one registered strategy supports the request.
    #[error("More than one suitable vacation payment strategy was found: {}", strategies.join(", "))]
    MultipleStrategiesFound {
        /// Names of every strategy that claimed the request.
        strategies: Vec<String>,
    },

    /// A strategy was asked to price a request shape it cannot handle.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

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

    /// A holiday calendar entry is not a valid ISO calendar date.
    #[error("Invalid holiday date '{value}' in '{path}': {message}")]
    HolidayDateInvalid {
        /// The calendar file containing the entry.
        path: String,
        /// The raw entry as it appears in the file.
        value: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns the stable machine-readable code for this error.
    ///
    /// The four validation errors keep their own codes. Everything else is
    /// reported as [`CODE_INTERNAL`].
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ParametersMissing => CODE_PARAMETERS_MISSING,
            EngineError::ParametersAllSpecified => CODE_PARAMETERS_ALL_SPECIFIED,
            EngineError::DatesIncomplete => CODE_DATES_INCOMPLETE,
            EngineError::InvalidPeriod => CODE_INVALID_PERIOD,
            _ => CODE_INTERNAL,
        }
    }

    /// Returns true if the caller can fix this error by correcting the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            EngineError::ParametersMissing
                | EngineError::ParametersAllSpecified
                | EngineError::DatesIncomplete
                | EngineError::InvalidPeriod
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_expose_their_own_codes() {
        assert_eq!(
            EngineError::ParametersMissing.code(),
            "VACATION_PARAMETERS_MISSING"
        );
        assert_eq!(
            EngineError::ParametersAllSpecified.code(),
            "VACATION_PARAMETERS_ALL_SPECIFIED"
        );
        assert_eq!(
            EngineError::DatesIncomplete.code(),
            "VACATION_DATES_INCOMPLETE"
        );
        assert_eq!(EngineError::InvalidPeriod.code(), "INVALID_VACATION_PERIOD");
    }

    #[test]
    fn test_invariant_errors_map_to_internal_code() {
        let errors = [
            EngineError::NoStrategyFound,
            EngineError::MultipleStrategiesFound {
                strategies: vec!["fixed_days".to_string(), "calendar_based".to_string()],
            },
            EngineError::CalculationError {
                message: "missing days".to_string(),
            },
            EngineError::ConfigNotFound {
                path: "/missing.yaml".to_string(),
            },
        ];

        for error in errors {
            assert_eq!(error.code(), "INTERNAL_EXCEPTION");
            assert!(!error.is_user_error());
        }
    }

    #[test]
    fn test_validation_errors_are_user_errors() {
        assert!(EngineError::ParametersMissing.is_user_error());
        assert!(EngineError::ParametersAllSpecified.is_user_error());
        assert!(EngineError::DatesIncomplete.is_user_error());
        assert!(EngineError::InvalidPeriod.is_user_error());
    }

    #[test]
    fn test_parameters_missing_message() {
        assert_eq!(
            EngineError::ParametersMissing.to_string(),
            "Either vacation days or vacation period dates must be specified"
        );
    }

    #[test]
    fn test_dates_incomplete_message() {
        assert_eq!(
            EngineError::DatesIncomplete.to_string(),
            "Both start date and end date must be specified for vacation period"
        );
    }

    #[test]
    fn test_multiple_strategies_lists_names() {
        let error = EngineError::MultipleStrategiesFound {
            strategies: vec!["fixed_days".to_string(), "always".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "More than one suitable vacation payment strategy was found: fixed_days, always"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_holiday_date_invalid_displays_value_and_path() {
        let error = EngineError::HolidayDateInvalid {
            path: "holidays.json".to_string(),
            value: "2026-13-01".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid holiday date '2026-13-01' in 'holidays.json': input is out of range"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_period() -> EngineResult<()> {
            Err(EngineError::InvalidPeriod)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_period()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(EngineError::InvalidPeriod)));
    }
}
