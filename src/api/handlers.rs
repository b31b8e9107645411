//! HTTP request handlers for the shift pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DataIssue, compute_pay, default_fiscal_start, find_data_issues, summarize_period,
};
use crate::error::EngineError;
use crate::models::RawShiftEntry;

use super::request::{HolidayQuery, SummaryRequest};
use super::response::{
    ApiError, ApiErrorResponse, HolidayCheckResponse, HolidayEntry, HolidayYearResponse,
    SummaryResponse,
};
use super::state::AppState;

/// Years accepted by the holiday endpoints; bounds the calendar memo.
const HOLIDAY_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/compute", post(compute_handler))
        .route("/shifts/summary", post(summary_handler))
        .route("/holidays/check", get(holiday_check_handler))
        .route("/holidays/:year", get(holiday_year_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to an API error, logging the cause.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
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
    }
}

/// Handler for POST /shifts/compute.
///
/// Accepts a single shift entry and returns its pay breakdown, using the
/// policy of the entry's workplace.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<RawShiftEntry>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let workplace = state.config().workplace(&entry.workplace_id);
    match compute_pay(&entry, workplace) {
        Ok(shift) => {
            info!(
                correlation_id = %correlation_id,
                workplace_id = %shift.workplace_id,
                date = %shift.date,
                pay = shift.pay,
                duration_us = start_time.elapsed().as_micros(),
                "Shift computed successfully"
            );
            json_response(shift)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Shift computation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /shifts/summary.
///
/// Computes every shift, aggregates those inside the fiscal period and runs
/// the consistency checks. Shifts with an invalid interval are reported as
/// issues instead of failing the whole request.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let config = state.config();
    let mut shifts = Vec::with_capacity(request.shifts.len());
    let mut issues: Vec<DataIssue> = Vec::new();

    for entry in &request.shifts {
        match compute_pay(entry, config.workplace(&entry.workplace_id)) {
            Ok(shift) => shifts.push(shift),
            Err(EngineError::InvalidInterval { message, .. }) => {
                issues.push(DataIssue::rejected_interval(entry, message));
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Summary computation failed"
                );
                return ApiErrorResponse::from(err).into_response();
            }
        }
    }
    issues.extend(find_data_issues(&shifts));

    let settings = config.settings();
    let fiscal_start = request
        .fiscal_start
        .or(settings.fiscal_start)
        .unwrap_or_else(|| default_fiscal_start(Local::now().date_naive()));
    let limit_income = request.limit_income.unwrap_or(settings.limit_income);

    let summary = summarize_period(&shifts, fiscal_start, limit_income);

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        issues_count = issues.len(),
        total_income = summary.total_income,
        duration_us = start_time.elapsed().as_micros(),
        "Summary completed successfully"
    );

    json_response(SummaryResponse {
        shifts,
        summary,
        issues,
    })
}

/// Handler for GET /holidays/:year.
async fn holiday_year_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Invalid holiday year");
            let error = ApiError::validation_error(rejection.body_text());
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    if !HOLIDAY_YEARS.contains(&year) {
        warn!(year, "Holiday year out of range");
        let error = ApiError::validation_error(format!("year must be between 1 and 9999, got {}", year));
        return ApiErrorResponse::bad_request(error).into_response();
    }

    let holidays = state
        .calendar()
        .holidays_for_year(year)
        .iter()
        .map(|(date, holiday)| HolidayEntry::new(*date, *holiday))
        .collect();

    json_response(HolidayYearResponse { year, holidays })
}

/// Handler for GET /holidays/check?date=YYYY-MM-DD.
async fn holiday_check_handler(
    State(state): State<AppState>,
    query: Result<Query<HolidayQuery>, QueryRejection>,
) -> Response {
    let date = match query {
        Ok(Query(query)) => query.date,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Invalid holiday query");
            let error = ApiError::validation_error(rejection.body_text());
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    if !HOLIDAY_YEARS.contains(&date.year()) {
        warn!(date = %date, "Holiday date out of range");
        let error = ApiError::validation_error(format!("year must be between 1 and 9999, got {}", date.year()));
        return ApiErrorResponse::bad_request(error).into_response();
    }

    let holiday = state.calendar().is_holiday(date);
    json_response(HolidayCheckResponse::new(date, holiday))
}
