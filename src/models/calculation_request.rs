//! Calculation request model.
//!
//! This module defines the [`CalculationRequest`] handed to the engine once the
//! transport layer has bound and field-checked the incoming payload.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to price one vacation.
///
/// A well-formed request carries either `days_vacation` alone or both
/// `date_start` and `date_end`. The engine's validator enforces that before
/// any strategy sees the request, so construction itself accepts every
/// combination.
///
/// # Example
///
/// ```
/// use vacation_pay::models::CalculationRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = CalculationRequest::for_period(
///     Decimal::new(50000, 0),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
/// );
/// assert!(request.has_period());
/// assert!(!request.has_days());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Average monthly salary over the reference period. Always positive.
    pub average_salary: Decimal,
    /// Number of vacation days to pay, when the caller counts them directly.
    #[serde(default)]
    pub days_vacation: Option<u32>,
    /// First calendar day of the vacation (inclusive).
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    /// Last calendar day of the vacation (inclusive).
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
}

impl CalculationRequest {
    /// Creates a request priced from an explicit number of vacation days.
    pub fn for_days(average_salary: Decimal, days_vacation: u32) -> Self {
        Self {
            average_salary,
            days_vacation: Some(days_vacation),
            date_start: None,
            date_end: None,
        }
    }

    /// Creates a request priced from an inclusive calendar period.
    pub fn for_period(average_salary: Decimal, date_start: NaiveDate, date_end: NaiveDate) -> Self {
        Self {
            average_salary,
            days_vacation: None,
            date_start: Some(date_start),
            date_end: Some(date_end),
        }
    }

    /// Returns true if an explicit day count is present.
    pub fn has_days(&self) -> bool {
        self.days_vacation.is_some()
    }

    /// Returns true if both period dates are present.
    pub fn has_period(&self) -> bool {
        self.date_start.is_some() && self.date_end.is_some()
    }

    /// Returns true if neither period date is present.
    pub fn has_no_dates(&self) -> bool {
        self.date_start.is_none() && self.date_end.is_none()
    }

    /// Returns the period as `(start, end)` when both dates are present.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_start.zip(self.date_end)
    }
}
