//! Strategy resolution.
//!
//! The resolver asks every registered strategy whether it supports a request
//! and insists on exactly one taker. Zero or several takers mean the strategy
//! set itself is wrong, so both outcomes are internal errors rather than
//! validation failures.

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationRequest;

use super::strategy::{CalculationStrategy, VacationPayStrategy};

/// Picks the single strategy that applies to a request.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::{CalculationStrategy, StrategyResolver};
/// use vacation_pay::models::CalculationRequest;
/// use rust_decimal::Decimal;
///
/// let resolver = StrategyResolver::default();
/// let request = CalculationRequest::for_days(Decimal::new(50000, 0), 14);
///
/// assert_eq!(resolver.resolve(&request).unwrap(), &CalculationStrategy::FixedDays);
/// ```
#[derive(Debug, Clone)]
pub struct StrategyResolver<S = CalculationStrategy> {
    strategies: Vec<S>,
}

impl Default for StrategyResolver<CalculationStrategy> {
    fn default() -> Self {
        Self::new(CalculationStrategy::ALL.to_vec())
    }
}

impl<S: VacationPayStrategy> StrategyResolver<S> {
    /// Creates a resolver over the given strategies.
    pub fn new(strategies: Vec<S>) -> Self {
        Self { strategies }
    }

    /// Returns the registered strategies.
    pub fn strategies(&self) -> &[S] {
        &self.strategies
    }

    /// Returns the one strategy that supports `request`.
    ///
    /// # Returns
    ///
    /// The matching strategy, or:
    /// - `NoStrategyFound` if no strategy supports the request
    /// - `MultipleStrategiesFound` naming every match if more than one does
    pub fn resolve(&self, request: &CalculationRequest) -> EngineResult<&S> {
        let mut matches = self
            .strategies
            .iter()
            .filter(|strategy| strategy.supports(request));

        let first = matches.next().ok_or(EngineError::NoStrategyFound)?;

        let others: Vec<&S> = matches.collect();
        if !others.is_empty() {
            let strategies = std::iter::once(first)
                .chain(others)
                .map(|strategy| strategy.name().to_string())
                .collect();
            return Err(EngineError::MultipleStrategiesFound { strategies });
        }

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayLookup;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn salary() -> Decimal {
        Decimal::new(50000, 0)
    }

    /// The shipped strategies plus one that claims every request with days.
    #[derive(Debug, Clone, Copy)]
    enum ExtendedStrategy {
        Shipped(CalculationStrategy),
        AnyDays,
    }

    impl VacationPayStrategy for ExtendedStrategy {
        fn name(&self) -> &'static str {
            match self {
                ExtendedStrategy::Shipped(strategy) => strategy.name(),
                ExtendedStrategy::AnyDays => "any_days",
            }
        }

        fn supports(&self, request: &CalculationRequest) -> bool {
            match self {
                ExtendedStrategy::Shipped(strategy) => strategy.supports(request),
                ExtendedStrategy::AnyDays => request.has_days(),
            }
        }

        fn calculate(
            &self,
            request: &CalculationRequest,
            holidays: &dyn HolidayLookup,
        ) -> EngineResult<Decimal> {
            match self {
                ExtendedStrategy::Shipped(strategy) => strategy.calculate(request, holidays),
                ExtendedStrategy::AnyDays => Ok(Decimal::ZERO),
            }
        }
    }

    fn extended_resolver() -> StrategyResolver<ExtendedStrategy> {
        StrategyResolver::new(vec![
            ExtendedStrategy::Shipped(CalculationStrategy::FixedDays),
            ExtendedStrategy::Shipped(CalculationStrategy::CalendarBased),
            ExtendedStrategy::AnyDays,
        ])
    }

    #[test]
    fn test_default_registers_both_strategies() {
        let resolver = StrategyResolver::default();
        assert_eq!(resolver.strategies(), &CalculationStrategy::ALL);
    }

    #[test]
    fn test_resolves_fixed_days() {
        let resolver = StrategyResolver::default();
        let request = CalculationRequest::for_days(salary(), 14);

        let strategy = resolver.resolve(&request).unwrap();

        assert_eq!(*strategy, CalculationStrategy::FixedDays);
    }

    #[test]
    fn test_resolves_calendar_based() {
        let resolver = StrategyResolver::default();
        let request = CalculationRequest::for_period(salary(), date(2026, 1, 1), date(2026, 1, 10));

        let strategy = resolver.resolve(&request).unwrap();

        assert_eq!(*strategy, CalculationStrategy::CalendarBased);
    }

    #[test]
    fn test_no_match_is_error() {
        let resolver = StrategyResolver::default();
        let request = CalculationRequest {
            average_salary: salary(),
            days_vacation: None,
            date_start: None,
            date_end: None,
        };

        let result = resolver.resolve(&request);

        assert!(matches!(result, Err(EngineError::NoStrategyFound)));
    }

    #[test]
    fn test_empty_strategy_set_matches_nothing() {
        let resolver: StrategyResolver<CalculationStrategy> = StrategyResolver::new(vec![]);
        let request = CalculationRequest::for_days(salary(), 14);

        assert!(matches!(
            resolver.resolve(&request),
            Err(EngineError::NoStrategyFound)
        ));
    }

    #[test]
    fn test_overlapping_strategy_is_multi_match_error() {
        let resolver = extended_resolver();
        let request = CalculationRequest::for_days(salary(), 14);

        match resolver.resolve(&request) {
            Err(EngineError::MultipleStrategiesFound { strategies }) => {
                assert_eq!(strategies, vec!["fixed_days", "any_days"]);
            }
            other => panic!("Expected MultipleStrategiesFound, got {:?}", other),
        }
    }

    #[test]
    fn test_overlap_only_affects_overlapping_requests() {
        let resolver = extended_resolver();
        let request = CalculationRequest::for_period(salary(), date(2026, 1, 1), date(2026, 1, 10));

        let strategy = resolver.resolve(&request).unwrap();

        assert_eq!(strategy.name(), "calendar_based");
    }
}
