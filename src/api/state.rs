//! Application state for the vacation pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::VacationPayCalculator;
use crate::holiday::HolidayCalendar;

/// Shared application state.
///
/// Holds the calculator and the holiday calendar it reads from. Both are
/// built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<VacationPayCalculator>,
    holidays: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates the application state over a loaded holiday calendar.
    pub fn new(holidays: HolidayCalendar) -> Self {
        let holidays = Arc::new(holidays);
        Self {
            calculator: Arc::new(VacationPayCalculator::new(holidays.clone())),
            holidays,
        }
    }

    /// Returns the vacation pay calculator.
    pub fn calculator(&self) -> &VacationPayCalculator {
        &self.calculator
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}
