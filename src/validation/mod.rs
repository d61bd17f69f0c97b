//! Validation of calculation requests before any strategy runs.

mod request_validator;

pub use request_validator::validate_request;
