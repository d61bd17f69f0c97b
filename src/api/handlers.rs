//! HTTP request handlers for the vacation pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::models::CalculationRequest;

use super::request::VacationPayRequest;
use super::response::{ApiError, ApiErrorResponse, CODE_MISSING_CONTENT_TYPE};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// `/calculate` answers both GET and POST with a JSON body, since existing
/// clients send the body on a GET.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", get(calculate_handler).post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for the `/calculate` endpoint.
///
/// Binds the body, runs the calculator and maps failures to error bodies.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation pay request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    CODE_MISSING_CONTENT_TYPE,
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let request = match CalculationRequest::try_from(body) {
        Ok(request) => request,
        Err(errors) => {
            warn!(
                correlation_id = %correlation_id,
                failed_fields = errors.len(),
                "Request binding failed"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_failed(errors))
                .into_response();
        }
    };

    let start_time = Instant::now();
    match state.calculator().calculate(&request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_vacation_pay = %result.total_vacation_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            if err.is_user_error() {
                debug!(
                    correlation_id = %correlation_id,
                    code = err.code(),
                    error = %err,
                    "Calculation rejected"
                );
            } else {
                error!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Calculation failed"
                );
            }
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /health`.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "holidays": state.holidays().len(),
    }))
}
