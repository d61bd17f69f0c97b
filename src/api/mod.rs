//! HTTP API module for the vacation pay service.
//!
//! This module provides the REST endpoints for calculating vacation pay
//! and checking service health.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MAX_VACATION_PERIOD_DAYS, VacationPayRequest};
pub use response::{
    ApiError, ApiErrorResponse, CODE_MALFORMED_JSON, CODE_MISSING_CONTENT_TYPE,
    CODE_VALIDATION_ERROR, ValidationError,
};
pub use state::AppState;
