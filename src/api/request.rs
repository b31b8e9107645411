//! Request types for the shift pay engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::RawShiftEntry;

/// Request body for the `/shifts/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The shifts to compute and aggregate.
    pub shifts: Vec<RawShiftEntry>,
    /// First date of the period. Defaults to the configured fiscal start,
    /// then to January 1st of the current year.
    #[serde(default)]
    pub fiscal_start: Option<NaiveDate>,
    /// Dependent-income limit in yen. Defaults to the configured limit.
    #[serde(default)]
    pub limit_income: Option<i64>,
}

/// Query string for the `/holidays/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayQuery {
    /// The date to check, as `YYYY-MM-DD`.
    pub date: NaiveDate,
}
