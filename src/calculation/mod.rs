//! Calculation logic for the vacation pay engine.
//!
//! This module contains the vacation pay formula, the fixed days and calendar
//! based strategies built on it, the resolver that picks exactly one strategy
//! per request, and the calculator that ties validation, resolution and
//! pricing together.

mod calculator;
mod calendar_based;
mod fixed_days;
mod formula;
mod resolver;
mod strategy;

pub use calculator::VacationPayCalculator;
pub use calendar_based::{
    PayableDays, calculate_calendar_based, count_payable_days, supports_calendar_based,
    vacation_dates,
};
pub use fixed_days::{calculate_fixed_days, supports_fixed_days};
pub use formula::{
    AVERAGE_DAYS_IN_MONTH, DAILY_EARNINGS_SCALE, VACATION_PAY_SCALE, calculate_vacation_pay,
    daily_earnings,
};
pub use resolver::StrategyResolver;
pub use strategy::{CalculationStrategy, VacationPayStrategy};
