//! HTTP request handlers for the Fleet Billing Engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! service is stateless: each request carries a full month of entries and
//! gets back freshly computed figures.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_EXTRA_HOURS_THRESHOLD, aggregate_tripsheet, apply_advance_deduction,
    billing_hours_threshold, calculate_billing, calculate_salary,
};
use crate::error::EngineResult;

use super::request::{BillingRequest, SalaryRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, BillingResponse, SalaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tripsheets/summary", post(summary_handler))
        .route("/billing/calculate", post(billing_handler))
        .route("/salary/calculate", post(salary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Logs an intake validation failure against the request.
fn log_validation(correlation_id: Uuid, result: EngineResult<()>) -> EngineResult<()> {
    result.inspect_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request failed validation"
        );
    })
}

/// Handler for POST /tripsheets/summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = log_validation(correlation_id, request.validate()) {
        return error_response(err.into());
    }

    let threshold = state
        .config()
        .extra_hours_threshold_for(request.vehicle_type.as_deref());
    let aggregated = aggregate_tripsheet(request.period, &request.entries, threshold);

    info!(
        correlation_id = %correlation_id,
        period = %request.period,
        working_days = aggregated.summary.total_working_days,
        "Summary completed"
    );
    json_response(StatusCode::OK, aggregated)
}

/// Handler for POST /billing/calculate.
async fn billing_handler(
    State(state): State<AppState>,
    payload: Result<Json<BillingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing billing request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = log_validation(correlation_id, request.validate()) {
        return error_response(err.into());
    }

    let start_time = Instant::now();
    let config = state.config();
    let rules = config.billing_rules_for(&request.vehicle_type);
    let threshold = billing_hours_threshold(&rules);

    let aggregated = aggregate_tripsheet(request.period, &request.entries, threshold);
    let billing = calculate_billing(
        &aggregated.summary,
        &rules,
        &config.billing_options(request.adjustments),
    );

    info!(
        correlation_id = %correlation_id,
        vehicle_type = %request.vehicle_type,
        period = %request.period,
        total_amount = %billing.total_amount,
        duration_us = start_time.elapsed().as_micros(),
        "Billing completed"
    );
    json_response(
        StatusCode::OK,
        BillingResponse {
            vehicle_type: request.vehicle_type,
            summary: aggregated.summary,
            billing,
            warnings: aggregated.warnings,
        },
    )
}

/// Handler for POST /salary/calculate.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = log_validation(correlation_id, request.validate()) {
        return error_response(err.into());
    }

    let start_time = Instant::now();
    let config = state.config();
    let words = config.config().salary().words;

    // Driver overtime uses its own fixed threshold, so the vehicle's billing
    // threshold does not matter here.
    let aggregated = aggregate_tripsheet(
        request.period,
        &request.entries,
        DEFAULT_EXTRA_HOURS_THRESHOLD,
    );
    let salary = calculate_salary(&aggregated.summary, config.salary_rules(), words);
    let net_payout = apply_advance_deduction(&salary, request.advance_deduction, words);

    info!(
        correlation_id = %correlation_id,
        period = %request.period,
        total_salary = %salary.total_salary,
        net_payout = %net_payout.net_payout,
        duration_us = start_time.elapsed().as_micros(),
        "Salary completed"
    );
    json_response(
        StatusCode::OK,
        SalaryResponse {
            summary: aggregated.summary,
            salary,
            net_payout,
        },
    )
}
