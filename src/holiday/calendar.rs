//! Holiday calendar loading and lookup.
//!
//! This module provides the [`HolidayLookup`] seam the calculation strategies
//! consult, and [`HolidayCalendar`], the immutable set of public holidays
//! loaded once at startup from a JSON file.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Answers how many of a set of calendar dates are public holidays.
pub trait HolidayLookup: Send + Sync {
    /// Counts the dates in `dates` that are public holidays.
    ///
    /// An empty slice yields zero. Each entry of `dates` is counted at most
    /// once, so the count never exceeds `dates.len()`.
    fn count_holidays_in(&self, dates: &[NaiveDate]) -> usize;
}

/// An immutable set of public holiday dates.
///
/// The calendar file is a JSON array of ISO `YYYY-MM-DD` strings:
///
/// ```text
/// ["2026-01-01", "2026-01-02", "2026-02-23"]
/// ```
///
/// # Example
///
/// ```
/// use vacation_pay::holiday::{HolidayCalendar, HolidayLookup};
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let calendar = HolidayCalendar::from_dates([new_year]);
///
/// let dates = [new_year, new_year.succ_opt().unwrap()];
/// assert_eq!(calendar.count_holidays_in(&dates), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Loads a holiday calendar from a JSON file.
    ///
    /// # Returns
    ///
    /// Returns the calendar on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not a JSON array of strings (`ConfigParseError`)
    /// - An entry is not a valid ISO date (`HolidayDateInvalid`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let entries: Vec<String> =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let holidays = entries
            .iter()
            .map(|value| {
                value
                    .parse::<NaiveDate>()
                    .map_err(|e| EngineError::HolidayDateInvalid {
                        path: path_str.clone(),
                        value: value.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<EngineResult<HashSet<_>>>()?;

        info!(path = %path_str, holidays = holidays.len(), "Loaded holiday calendar");

        Ok(Self { holidays })
    }

    /// Builds a calendar from dates already in memory.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            holidays: dates.into_iter().collect(),
        }
    }

    /// Returns true if `date` is a public holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns the number of distinct holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayLookup for HolidayCalendar {
    fn count_holidays_in(&self, dates: &[NaiveDate]) -> usize {
        if dates.is_empty() || self.holidays.is_empty() {
            return 0;
        }
        dates.iter().filter(|date| self.contains(**date)).count()
    }
}
