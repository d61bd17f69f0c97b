//! Vacation pay formula.
//!
//! This module turns an average monthly salary and a count of payable days
//! into a vacation pay amount:
//!
//! ```text
//! daily earnings = round10(average salary / 29.3)
//! vacation pay   = round2(daily earnings * payable days)
//! ```
//!
//! Both roundings are half-up (midpoint away from zero; every amount here is
//! non-negative).

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// The average number of days in a calendar month used by the wage regulation.
pub const AVERAGE_DAYS_IN_MONTH: Decimal = Decimal::from_parts(293, 0, 0, false, 1);

/// Fractional digits kept for the intermediate daily earnings.
pub const DAILY_EARNINGS_SCALE: u32 = 10;

/// Fractional digits of the final vacation pay amount.
pub const VACATION_PAY_SCALE: u32 = 2;

/// Returns the daily earnings for an average monthly salary.
///
/// The quotient keeps ten fractional digits as long as the salary has at most
/// 18 integer digits. `Decimal` carries 28 significant digits, so larger
/// salaries are rounded at a coarser scale before the ten-digit rounding.
///
/// # Examples
///
/// ```
/// use vacation_pay::calculation::daily_earnings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let daily = daily_earnings(Decimal::new(100000, 0));
/// assert_eq!(daily, Decimal::from_str("3412.9692832765").unwrap());
/// ```
pub fn daily_earnings(average_salary: Decimal) -> Decimal {
    (average_salary / AVERAGE_DAYS_IN_MONTH)
        .round_dp_with_strategy(DAILY_EARNINGS_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates vacation pay for a number of payable days.
///
/// Zero payable days is a legitimate input and yields zero.
///
/// # Returns
///
/// The amount rounded to two fractional digits, or a `CalculationError` if the
/// product does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use vacation_pay::calculation::calculate_vacation_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = calculate_vacation_pay(Decimal::new(100000, 0), 14).unwrap();
/// assert_eq!(pay, Decimal::from_str("47781.57").unwrap());
/// ```
pub fn calculate_vacation_pay(average_salary: Decimal, payable_days: u32) -> EngineResult<Decimal> {
    let daily = daily_earnings(average_salary);

    let total = daily
        .checked_mul(Decimal::from(payable_days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "vacation pay for {} days at {} per day exceeds the representable range",
                payable_days, daily
            ),
        })?;

    let vacation_pay =
        total.round_dp_with_strategy(VACATION_PAY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    debug!(
        average_salary = %average_salary,
        average_days_in_month = %AVERAGE_DAYS_IN_MONTH,
        daily_earnings = %daily,
        payable_days,
        vacation_pay = %vacation_pay,
        "Applied vacation pay formula"
    );

    Ok(vacation_pay)
}
