//! Fixed days strategy.
//!
//! Prices a vacation from an explicit count of vacation days. Holidays play
//! no part: every requested day is payable.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationRequest;

use super::formula::calculate_vacation_pay;

/// Returns true if the request carries a day count and no dates at all.
pub fn supports_fixed_days(request: &CalculationRequest) -> bool {
    request.has_days() && request.has_no_dates()
}

/// Calculates vacation pay for an explicit number of vacation days.
///
/// # Returns
///
/// The rounded vacation pay, or a `CalculationError` if the request has no
/// day count (which validation rules out).
///
/// # Examples
///
/// ```
/// use vacation_pay::calculation::calculate_fixed_days;
/// use vacation_pay::models::CalculationRequest;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = CalculationRequest::for_days(Decimal::new(100000, 0), 14);
/// let pay = calculate_fixed_days(&request).unwrap();
/// assert_eq!(pay, Decimal::from_str("47781.57").unwrap());
/// ```
pub fn calculate_fixed_days(request: &CalculationRequest) -> EngineResult<Decimal> {
    let days = request
        .days_vacation
        .ok_or_else(|| EngineError::CalculationError {
            message: "fixed days strategy requires a vacation day count".to_string(),
        })?;

    let vacation_pay = calculate_vacation_pay(request.average_salary, days)?;

    debug!(
        average_salary = %request.average_salary,
        vacation_days = days,
        vacation_pay = %vacation_pay,
        "Calculated fixed days vacation pay"
    );

    Ok(vacation_pay)
}
