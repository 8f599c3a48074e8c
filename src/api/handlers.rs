//! HTTP request handlers for the Workload Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{EmploymentLedger, recalculate_chain};
use crate::error::{EngineError, EngineResult};
use crate::models::WorkloadInput;

use super::request::{
    CalculateWorkloadsRequest, RecalculateBalancesRequest, RecalculateBalancesResponse,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/workload", post(workload_handler))
        .route("/workloads", post(workloads_handler))
        .route("/balances/recalculate", post(recalculate_handler))
        .with_state(state)
}

/// Handler for POST /workload.
///
/// Accepts one teacher's data snapshot and returns the computed workload.
async fn workload_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkloadInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workload request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match state.factory().workload(&input) {
        Ok(workload) => {
            info!(
                correlation_id = %correlation_id,
                teacher_id = %workload.teacher_id,
                school_year = %workload.school_year,
                closing_balance = %workload.closing_balance,
                warnings = workload.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Workload calculated successfully"
            );
            json_response(&workload)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /workloads.
///
/// Computes the workloads of a school year, optionally for one division.
async fn workloads_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateWorkloadsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workloads request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match state.factory().workloads(
        &request.school_year,
        request.division.as_deref(),
        &request.inputs,
    ) {
        Ok(workloads) => {
            info!(
                correlation_id = %correlation_id,
                school_year = %workloads.school_year,
                count = workloads.len(),
                total_balance_change = %workloads.total_balance_change,
                duration_us = start_time.elapsed().as_micros(),
                "Workloads calculated successfully"
            );
            json_response(&workloads)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /balances/recalculate.
///
/// Recalculates a teacher's balances from a school year onwards and returns
/// the updates together with the adjusted employments.
async fn recalculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecalculateBalancesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance recalculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_recalculation(&request, &state) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                teacher_id = %request.teacher_id,
                years = response.updates.len(),
                "Balances recalculated successfully"
            );
            json_response(&response)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Runs the balance chain over the teacher's snapshots.
///
/// Each year is computed from its snapshot with the employment taken from
/// the ledger, so the carried-in opening balance is used.
fn perform_recalculation(
    request: &RecalculateBalancesRequest,
    state: &AppState,
) -> EngineResult<RecalculateBalancesResponse> {
    let factory = state.factory();
    let snapshots: HashMap<&str, &WorkloadInput> = request
        .inputs
        .iter()
        .filter(|input| input.employment.teacher_id == request.teacher_id)
        .map(|input| (input.employment.school_year.as_str(), input))
        .collect();

    let mut ledger = EmploymentLedger::new(
        request
            .inputs
            .iter()
            .map(|input| input.employment.clone())
            .collect(),
    )?;

    let updates = recalculate_chain(
        &mut ledger,
        state.config().config().school_years(),
        &request.teacher_id,
        &request.from_school_year,
        |employment, school_year| {
            let snapshot = snapshots.get(school_year.code.as_str()).ok_or_else(|| {
                EngineError::CalculationError {
                    message: format!("no snapshot for school year {}", school_year.code),
                }
            })?;
            let input = WorkloadInput {
                employment: employment.clone(),
                ..(*snapshot).clone()
            };
            factory.workload(&input)
        },
    )?;

    let employments = ledger
        .into_vec()
        .into_iter()
        .filter(|employment| employment.teacher_id == request.teacher_id)
        .collect();

    Ok(RecalculateBalancesResponse {
        updates,
        employments,
    })
}

fn json_response<T: serde::Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
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
    ApiErrorResponse::bad_request(error).into_response()
}
