//! Calendar based strategy.
//!
//! Prices a vacation from an inclusive calendar period. Every day in the
//! period is payable except public holidays, which are looked up in the
//! holiday calendar and excluded.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::holiday::HolidayLookup;
use crate::models::CalculationRequest;

use super::formula::calculate_vacation_pay;

/// The day counts derived from a vacation period.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::count_payable_days;
/// use vacation_pay::holiday::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// let calendar = HolidayCalendar::from_dates([start]);
///
/// let days = count_payable_days(start, end, &calendar).unwrap();
/// assert_eq!(days.calendar_days, 10);
/// assert_eq!(days.holidays, 1);
/// assert_eq!(days.payable_days, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayableDays {
    /// Number of calendar days in the period, both ends included.
    pub calendar_days: u32,
    /// Number of those days that are public holidays.
    pub holidays: u32,
    /// Calendar days minus holidays.
    pub payable_days: u32,
}

/// Returns true if the request carries both dates and no day count.
pub fn supports_calendar_based(request: &CalculationRequest) -> bool {
    !request.has_days() && request.has_period()
}

/// Lists every date from `start` to `end`, both included.
///
/// Returns an empty list when `start` is after `end`.
pub fn vacation_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).collect()
}

/// Counts the payable days in an inclusive period.
///
/// The holiday count comes from `holidays`, which sees each date of the
/// period exactly once, so the payable count never goes below zero.
///
/// The period is materialized one entry per day. The HTTP layer caps its
/// length at [`MAX_VACATION_PERIOD_DAYS`](crate::api::MAX_VACATION_PERIOD_DAYS).
pub fn count_payable_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &dyn HolidayLookup,
) -> EngineResult<PayableDays> {
    let dates = vacation_dates(start, end);

    let calendar_days = u32::try_from(dates.len()).map_err(|_| EngineError::CalculationError {
        message: format!("vacation period {} to {} is too long", start, end),
    })?;
    let holiday_count = holidays.count_holidays_in(&dates).min(dates.len()) as u32;

    Ok(PayableDays {
        calendar_days,
        holidays: holiday_count,
        payable_days: calendar_days - holiday_count,
    })
}

/// Calculates vacation pay for a calendar period, excluding public holidays.
///
/// A period made up entirely of holidays yields zero pay.
///
/// # Returns
///
/// The rounded vacation pay, or a `CalculationError` if the request does not
/// carry both dates (which validation rules out).
///
/// # Examples
///
/// ```
/// use vacation_pay::calculation::calculate_calendar_based;
/// use vacation_pay::holiday::HolidayCalendar;
/// use vacation_pay::models::CalculationRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let request = CalculationRequest::for_period(Decimal::new(30000, 0), day, day);
///
/// let pay = calculate_calendar_based(&request, &HolidayCalendar::default()).unwrap();
/// assert_eq!(pay, Decimal::from_str("1023.89").unwrap());
/// ```
pub fn calculate_calendar_based(
    request: &CalculationRequest,
    holidays: &dyn HolidayLookup,
) -> EngineResult<Decimal> {
    let (start, end) = request
        .period()
        .ok_or_else(|| EngineError::CalculationError {
            message: "calendar based strategy requires both start and end dates".to_string(),
        })?;

    let days = count_payable_days(start, end, holidays)?;
    let vacation_pay = calculate_vacation_pay(request.average_salary, days.payable_days)?;

    debug!(
        average_salary = %request.average_salary,
        date_start = %start,
        date_end = %end,
        total_days = days.calendar_days,
        holidays = days.holidays,
        payable_days = days.payable_days,
        vacation_pay = %vacation_pay,
        "Calculated calendar based vacation pay"
    );

    Ok(vacation_pay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayCalendar;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Reports a fixed holiday count regardless of the dates asked about.
    struct FixedCountLookup(usize);

    impl HolidayLookup for FixedCountLookup {
        fn count_holidays_in(&self, _dates: &[NaiveDate]) -> usize {
            self.0
        }
    }

    #[test]
    fn test_supports_dates_only() {
        let request = CalculationRequest::for_period(dec("50000"), date(2026, 1, 1), date(2026, 1, 14));
        assert!(supports_calendar_based(&request));
    }

    #[test]
    fn test_does_not_support_days() {
        let request = CalculationRequest::for_days(dec("50000"), 14);
        assert!(!supports_calendar_based(&request));
    }

    #[test]
    fn test_does_not_support_days_with_dates() {
        let mut request =
            CalculationRequest::for_period(dec("50000"), date(2026, 1, 1), date(2026, 1, 14));
        request.days_vacation = Some(14);
        assert!(!supports_calendar_based(&request));
    }

    #[test]
    fn test_does_not_support_missing_end() {
        let mut request =
            CalculationRequest::for_period(dec("50000"), date(2026, 1, 1), date(2026, 1, 14));
        request.date_end = None;
        assert!(!supports_calendar_based(&request));
    }

    #[test]
    fn test_vacation_dates_inclusive() {
        let dates = vacation_dates(date(2026, 1, 30), date(2026, 2, 2));
        assert_eq!(
            dates,
            vec![
                date(2026, 1, 30),
                date(2026, 1, 31),
                date(2026, 2, 1),
                date(2026, 2, 2)
            ]
        );
    }

    #[test]
    fn test_vacation_dates_reversed_is_empty() {
        assert!(vacation_dates(date(2026, 1, 14), date(2026, 1, 1)).is_empty());
    }

    #[test]
    fn test_ten_days_with_two_holidays() {
        let request =
            CalculationRequest::for_period(dec("50000"), date(2026, 1, 1), date(2026, 1, 10));

        let pay = calculate_calendar_based(&request, &FixedCountLookup(2)).unwrap();

        // round10(50000 / 29.3) = 1706.4846416382, * 8 = 13651.8771331056
        assert_eq!(pay, dec("13651.88"));
    }

    #[test]
    fn test_no_holidays_in_period() {
        let request =
            CalculationRequest::for_period(dec("100000"), date(2026, 7, 1), date(2026, 7, 14));

        let pay = calculate_calendar_based(&request, &HolidayCalendar::default()).unwrap();

        assert_eq!(pay, dec("47781.57"));
    }

    #[test]
    fn test_single_day_period_has_one_payable_day() {
        let days =
            count_payable_days(date(2026, 3, 15), date(2026, 3, 15), &HolidayCalendar::default())
                .unwrap();

        assert_eq!(days.calendar_days, 1);
        assert_eq!(days.payable_days, 1);
    }

    #[test]
    fn test_all_holidays_yields_zero_pay() {
        let calendar = HolidayCalendar::from_dates(vacation_dates(date(2026, 1, 1), date(2026, 1, 8)));
        let request =
            CalculationRequest::for_period(dec("50000"), date(2026, 1, 1), date(2026, 1, 8));

        let pay = calculate_calendar_based(&request, &calendar).unwrap();

        assert_eq!(pay, Decimal::ZERO);
    }

    #[test]
    fn test_only_holidays_inside_period_count() {
        let calendar = HolidayCalendar::from_dates([
            date(2025, 12, 31),
            date(2026, 1, 2),
            date(2026, 1, 11),
        ]);

        let days = count_payable_days(date(2026, 1, 1), date(2026, 1, 10), &calendar).unwrap();

        assert_eq!(days.holidays, 1);
        assert_eq!(days.payable_days, 9);
    }

    #[test]
    fn test_overreporting_lookup_is_clamped() {
        let days =
            count_payable_days(date(2026, 1, 1), date(2026, 1, 3), &FixedCountLookup(5)).unwrap();

        assert_eq!(days.holidays, 3);
        assert_eq!(days.payable_days, 0);
    }

    #[test]
    fn test_missing_dates_is_calculation_error() {
        let request = CalculationRequest::for_days(dec("50000"), 14);

        let result = calculate_calendar_based(&request, &HolidayCalendar::default());

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    proptest! {
        #[test]
        fn prop_calendar_days_match_inclusive_length(
            offset in 0i64..3650,
            length in 0i64..400,
        ) {
            let start = date(2020, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(length);

            let days = count_payable_days(start, end, &HolidayCalendar::default()).unwrap();

            prop_assert_eq!(i64::from(days.calendar_days), (end - start).num_days() + 1);
            prop_assert_eq!(days.payable_days, days.calendar_days);
        }

        #[test]
        fn prop_payable_days_never_exceed_calendar_days(
            length in 0i64..60,
            holiday_offsets in proptest::collection::vec(0i64..90, 0..30),
        ) {
            let start = date(2026, 1, 1);
            let end = start + chrono::Duration::days(length);
            let calendar = HolidayCalendar::from_dates(
                holiday_offsets.into_iter().map(|o| start + chrono::Duration::days(o)),
            );

            let days = count_payable_days(start, end, &calendar).unwrap();

            prop_assert!(days.holidays <= days.calendar_days);
            prop_assert_eq!(days.payable_days, days.calendar_days - days.holidays);
        }
    }
}
