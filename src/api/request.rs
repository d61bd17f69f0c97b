//! Request types for the vacation pay API.
//!
//! This module defines the JSON body of the `/calculate` endpoint and the
//! field-level binding checks that run before the engine sees a request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationRequest;

use super::response::ValidationError;

/// Longest vacation period accepted, in calendar days with both ends included.
pub const MAX_VACATION_PERIOD_DAYS: i64 = 366;

/// Body of a `/calculate` request.
///
/// Every field is optional at the JSON level, so a missing salary comes back
/// as a field validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationPayRequest {
    /// Average monthly salary. Required and positive.
    #[serde(default)]
    pub average_salary: Option<Decimal>,
    /// Number of vacation days. Positive when given.
    #[serde(default)]
    pub days_vacation: Option<i64>,
    /// First day of the vacation.
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    /// Last day of the vacation.
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
}

impl TryFrom<VacationPayRequest> for CalculationRequest {
    type Error = Vec<ValidationError>;

    fn try_from(req: VacationPayRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let average_salary = match req.average_salary {
            None => {
                errors.push(ValidationError::new("averageSalary", "Average salary is required"));
                None
            }
            Some(salary) if salary <= Decimal::ZERO => {
                errors.push(ValidationError::new(
                    "averageSalary",
                    "Average salary must be greater than 0",
                ));
                None
            }
            Some(salary) => Some(salary),
        };

        let days_vacation = match req.days_vacation {
            None => None,
            Some(days) if days <= 0 => {
                errors.push(ValidationError::new(
                    "daysVacation",
                    "Vacation days must be greater than 0",
                ));
                None
            }
            Some(days) => match u32::try_from(days) {
                Ok(days) => Some(days),
                Err(_) => {
                    errors.push(ValidationError::new(
                        "daysVacation",
                        format!("Vacation days must not exceed {}", u32::MAX),
                    ));
                    None
                }
            },
        };

        if let (Some(start), Some(end)) = (req.date_start, req.date_end) {
            // Reversed periods are left to the engine's period check.
            if end >= start && (end - start).num_days() + 1 > MAX_VACATION_PERIOD_DAYS {
                errors.push(ValidationError::new(
                    "dateEnd",
                    format!(
                        "Vacation period must not exceed {} days",
                        MAX_VACATION_PERIOD_DAYS
                    ),
                ));
            }
        }

        match average_salary {
            Some(average_salary) if errors.is_empty() => Ok(CalculationRequest {
                average_salary,
                days_vacation,
                date_start: req.date_start,
                date_end: req.date_end,
            }),
            _ => Err(errors),
        }
    }
}
