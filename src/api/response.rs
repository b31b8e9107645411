//! Response types for the shift pay engine API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{DataIssue, PeriodSummary};
use crate::calendar::HolidayName;
use crate::error::EngineError;
use crate::models::{ComputedShift, hm_time};

/// Response body for the `/shifts/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Every shift that could be computed, in request order.
    pub shifts: Vec<ComputedShift>,
    /// Totals for the shifts inside the fiscal period.
    pub summary: PeriodSummary,
    /// Inconsistencies found, including shifts that could not be computed.
    pub issues: Vec<DataIssue>,
}

/// One holiday in a year listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The holiday's date.
    pub date: NaiveDate,
    /// English name.
    pub name: String,
    /// Japanese name.
    pub name_ja: String,
}

impl HolidayEntry {
    /// Builds an entry from a holiday map item.
    pub fn new(date: NaiveDate, holiday: HolidayName) -> Self {
        Self {
            date,
            name: holiday.name().to_string(),
            name_ja: holiday.japanese_name().to_string(),
        }
    }
}

/// Response body for the `/holidays/:year` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayYearResponse {
    /// The requested year.
    pub year: i32,
    /// Holidays in ascending date order.
    pub holidays: Vec<HolidayEntry>,
}

/// Response body for the `/holidays/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayCheckResponse {
    /// The checked date.
    pub date: NaiveDate,
    /// Whether the date is a public holiday.
    pub is_holiday: bool,
    /// English name, when it is a holiday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Japanese name, when it is a holiday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ja: Option<String>,
}

impl HolidayCheckResponse {
    /// Builds the response for `date` from a calendar lookup.
    pub fn new(date: NaiveDate, holiday: Option<HolidayName>) -> Self {
        Self {
            date,
            is_holiday: holiday.is_some(),
            name: holiday.map(|h| h.name().to_string()),
            name_ja: holiday.map(|h| h.japanese_name().to_string()),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInterval {
                date,
                start,
                end,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_INTERVAL",
                format!(
                    "Invalid shift interval on {} ({}-{})",
                    date,
                    hm_time::format(&start),
                    hm_time::format(&end)
                ),
                message,
            )),
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
