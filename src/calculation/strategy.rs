//! Calculation strategies.
//!
//! A strategy both decides whether it applies to a request and, if it does,
//! prices it. The engine ships a closed set of two strategies, modelled by
//! [`CalculationStrategy`]; the [`VacationPayStrategy`] trait is the seam the
//! resolver works against.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::holiday::HolidayLookup;
use crate::models::CalculationRequest;

use super::calendar_based::{calculate_calendar_based, supports_calendar_based};
use super::fixed_days::{calculate_fixed_days, supports_fixed_days};

/// A policy that can price some shapes of calculation request.
pub trait VacationPayStrategy {
    /// A short stable name used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Returns true if this strategy applies to `request`.
    fn supports(&self, request: &CalculationRequest) -> bool;

    /// Prices `request`, consulting `holidays` where the strategy needs to.
    ///
    /// Only called on requests for which [`supports`](Self::supports) is true.
    fn calculate(
        &self,
        request: &CalculationRequest,
        holidays: &dyn HolidayLookup,
    ) -> EngineResult<Decimal>;
}

/// The strategies the engine knows about.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::{CalculationStrategy, VacationPayStrategy};
/// use vacation_pay::models::CalculationRequest;
/// use rust_decimal::Decimal;
///
/// let request = CalculationRequest::for_days(Decimal::new(50000, 0), 14);
/// assert!(CalculationStrategy::FixedDays.supports(&request));
/// assert!(!CalculationStrategy::CalendarBased.supports(&request));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationStrategy {
    /// Pays every day of an explicit day count.
    FixedDays,
    /// Pays every non-holiday day of an inclusive calendar period.
    CalendarBased,
}

impl CalculationStrategy {
    /// Every strategy, in registration order.
    pub const ALL: [CalculationStrategy; 2] = [
        CalculationStrategy::FixedDays,
        CalculationStrategy::CalendarBased,
    ];
}

impl fmt::Display for CalculationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl VacationPayStrategy for CalculationStrategy {
    fn name(&self) -> &'static str {
        match self {
            CalculationStrategy::FixedDays => "fixed_days",
            CalculationStrategy::CalendarBased => "calendar_based",
        }
    }

    fn supports(&self, request: &CalculationRequest) -> bool {
        match self {
            CalculationStrategy::FixedDays => supports_fixed_days(request),
            CalculationStrategy::CalendarBased => supports_calendar_based(request),
        }
    }

    fn calculate(
        &self,
        request: &CalculationRequest,
        holidays: &dyn HolidayLookup,
    ) -> EngineResult<Decimal> {
        match self {
            CalculationStrategy::FixedDays => calculate_fixed_days(request),
            CalculationStrategy::CalendarBased => calculate_calendar_based(request, holidays),
        }
    }
}
