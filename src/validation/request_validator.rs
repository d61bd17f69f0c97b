//! Request shape validation.
//!
//! Decides whether a request names exactly one way of counting vacation days.
//! The checks run in a fixed order and the first failing one wins:
//!
//! 1. no days and no dates: `ParametersMissing`
//! 2. days and both dates: `ParametersAllSpecified`
//! 3. exactly one of the two dates: `DatesIncomplete`
//! 4. start date after end date: `InvalidPeriod`

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationRequest;

/// Validates the shape of a calculation request.
///
/// A valid request carries either a day count alone, or both dates with the
/// start on or before the end. Equal dates describe a one-day vacation.
///
/// # Examples
///
/// ```
/// use vacation_pay::error::EngineError;
/// use vacation_pay::models::CalculationRequest;
/// use vacation_pay::validation::validate_request;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = CalculationRequest::for_period(
///     Decimal::new(50000, 0),
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// );
/// assert!(matches!(validate_request(&request), Err(EngineError::InvalidPeriod)));
/// ```
pub fn validate_request(request: &CalculationRequest) -> EngineResult<()> {
    let outcome = check_shape(request);
    if let Err(err) = &outcome {
        debug!(code = err.code(), "Request failed validation");
    }
    outcome
}

fn check_shape(request: &CalculationRequest) -> EngineResult<()> {
    if are_parameters_missing(request) {
        return Err(EngineError::ParametersMissing);
    }
    if are_all_parameters_specified(request) {
        return Err(EngineError::ParametersAllSpecified);
    }
    if are_dates_incomplete(request) {
        return Err(EngineError::DatesIncomplete);
    }
    if is_start_after_end(request) {
        return Err(EngineError::InvalidPeriod);
    }
    Ok(())
}

fn are_parameters_missing(request: &CalculationRequest) -> bool {
    !request.has_days() && request.has_no_dates()
}

fn are_all_parameters_specified(request: &CalculationRequest) -> bool {
    request.has_days() && request.has_period()
}

fn are_dates_incomplete(request: &CalculationRequest) -> bool {
    request.date_start.is_some() != request.date_end.is_some()
}

fn is_start_after_end(request: &CalculationRequest) -> bool {
    request.period().is_some_and(|(start, end)| start > end)
}
