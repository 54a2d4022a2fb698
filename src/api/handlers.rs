//! HTTP request handlers for the engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Weekday;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    BonusTier, DayHours, PayPeriod, ShiftAssignment, StaffMember, StoreWeek,
};
use crate::payroll::calculate_period_pay;
use crate::scheduling::{generate_week, week_availability};

use super::request::{CalculatePayRequest, GenerateScheduleRequest};
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/generate", post(generate_schedule_handler))
        .route("/pay/calculate", post(calculate_pay_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /schedule/generate endpoint.
///
/// Accepts a generation request and returns the week's shift assignments
/// plus any conflicts.
async fn generate_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    // Sunday is excluded from scheduling by design.
    if request.days.iter().any(|d| d.weekday == Weekday::Sun) {
        warn!(correlation_id = %correlation_id, "Rejected request scheduling a Sunday");
        let error = ApiError::validation_error("Sunday cannot be scheduled");
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    }

    // Convert request types to domain types
    let days: Vec<DayHours> = request.days.into_iter().map(Into::into).collect();
    let staff: Vec<StaffMember> = request.staff.into_iter().map(Into::into).collect();
    let existing: Vec<ShiftAssignment> =
        request.existing_shifts.into_iter().map(Into::into).collect();
    let settings = request
        .settings
        .unwrap_or_else(|| state.config().scheduling().clone());

    let week = StoreWeek::new(request.week_start, days);
    let availability = week_availability(&staff, &existing, &week, &settings);
    let result = generate_week(&request.store_id, &week, &availability, &settings);

    info!(
        correlation_id = %correlation_id,
        store_id = %request.store_id,
        week_start = %request.week_start,
        shifts = result.shifts.len(),
        conflicts = result.conflicts.len(),
        "Schedule generated"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /pay/calculate endpoint.
///
/// Accepts a pay calculation request and returns the per-staff
/// compensation records plus period totals.
async fn calculate_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let period: PayPeriod = request.period.into();
    let staff: Vec<StaffMember> = request.staff.into_iter().map(Into::into).collect();
    let shifts: Vec<ShiftAssignment> = request.shifts.into_iter().map(Into::into).collect();
    let tiers: Vec<BonusTier> = request.tiers.into_iter().map(Into::into).collect();

    let report = calculate_period_pay(
        &staff,
        &shifts,
        &period,
        &tiers,
        &request.sales,
        state.config().compensation(),
    );

    info!(
        correlation_id = %correlation_id,
        staff_count = report.per_staff.len(),
        total_pay = %report.totals.total_pay,
        "Pay calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
