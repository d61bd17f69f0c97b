//! Public holiday calendar for the vacation pay engine.
//!
//! The calendar is loaded once during startup and shared read-only by every
//! calculation afterwards.

mod calendar;

pub use calendar::{HolidayCalendar, HolidayLookup};
