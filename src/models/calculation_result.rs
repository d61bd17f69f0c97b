//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] returned to callers once a
//! strategy has priced a request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a vacation pay calculation.
///
/// The amount is rounded to two fractional digits and is serialized as a JSON
/// number under `totalVacationPay`.
///
/// # Example
///
/// ```
/// use vacation_pay::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult::new(Decimal::new(4778157, 2));
/// let json = serde_json::to_string(&result).unwrap();
/// assert_eq!(json, r#"{"totalVacationPay":47781.57}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Total vacation pay owed, rounded to two fractional digits.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_vacation_pay: Decimal,
}

impl CalculationResult {
    /// Wraps a computed amount.
    pub fn new(total_vacation_pay: Decimal) -> Self {
        Self { total_vacation_pay }
    }
}
