//! Vacation pay calculation entry point.
//!
//! [`VacationPayCalculator`] is the only way callers price a request. It
//! validates the request shape, resolves the single applicable strategy and
//! lets that strategy compute the amount. Every step is deterministic, so a
//! failure is final for that request.

use std::sync::Arc;

use tracing::debug;

use crate::error::EngineResult;
use crate::holiday::HolidayLookup;
use crate::models::{CalculationRequest, CalculationResult};
use crate::validation::validate_request;

use super::resolver::StrategyResolver;
use super::strategy::{CalculationStrategy, VacationPayStrategy};

/// Validates, resolves and prices vacation pay requests.
///
/// The calculator holds the process-wide holiday calendar behind an `Arc`
/// and never mutates it, so one instance can serve concurrent requests.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vacation_pay::calculation::VacationPayCalculator;
/// use vacation_pay::holiday::HolidayCalendar;
/// use vacation_pay::models::CalculationRequest;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = VacationPayCalculator::new(Arc::new(HolidayCalendar::default()));
/// let request = CalculationRequest::for_days(Decimal::new(100000, 0), 14);
///
/// let result = calculator.calculate(&request).unwrap();
/// assert_eq!(result.total_vacation_pay, Decimal::from_str("47781.57").unwrap());
/// ```
pub struct VacationPayCalculator<S = CalculationStrategy> {
    resolver: StrategyResolver<S>,
    holidays: Arc<dyn HolidayLookup>,
}

impl VacationPayCalculator<CalculationStrategy> {
    /// Creates a calculator over the shipped strategies.
    pub fn new(holidays: Arc<dyn HolidayLookup>) -> Self {
        Self::with_resolver(StrategyResolver::default(), holidays)
    }
}

impl<S: VacationPayStrategy> VacationPayCalculator<S> {
    /// Creates a calculator over a custom strategy set.
    pub fn with_resolver(resolver: StrategyResolver<S>, holidays: Arc<dyn HolidayLookup>) -> Self {
        Self { resolver, holidays }
    }

    /// Calculates vacation pay for a request.
    ///
    /// # Returns
    ///
    /// The result on success. Validation errors and resolver errors pass
    /// through unchanged.
    pub fn calculate(&self, request: &CalculationRequest) -> EngineResult<CalculationResult> {
        validate_request(request)?;

        let strategy = self.resolver.resolve(request)?;
        debug!(strategy = strategy.name(), "Resolved calculation strategy");

        let total = strategy.calculate(request, self.holidays.as_ref())?;
        Ok(CalculationResult::new(total))
    }
}
