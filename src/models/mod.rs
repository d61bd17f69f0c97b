//! Core data models for the vacation pay engine.
//!
//! This module contains the request and result types the engine works with.

mod calculation_request;
mod calculation_result;

pub use calculation_request::CalculationRequest;
pub use calculation_result::CalculationResult;
