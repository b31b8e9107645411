//! Raw shift entry model.
//!
//! This module defines [`RawShiftEntry`], the caller-owned record of a single
//! clocked shift as entered by the user.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::hm_time;

/// A shift as entered by the user, before any pay computation.
///
/// Start and end are clock times on `date`; shifts crossing midnight are not
/// supported and are rejected by the pay calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShiftEntry {
    /// The date the shift was worked.
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(with = "hm_time")]
    pub start_time: NaiveTime,
    /// Clock-out time.
    #[serde(with = "hm_time")]
    pub end_time: NaiveTime,
    /// Identifier of the workplace whose policy applies.
    pub workplace_id: String,
    /// Hourly wage pinned by the user, bypassing the wage history.
    #[serde(default)]
    pub wage_override: Option<i64>,
    /// Manual break in minutes. Values of zero or below defer to the break rules.
    #[serde(default)]
    pub manual_break_minutes: Option<i64>,
    /// Whether the shift falls in a busy period.
    #[serde(default)]
    pub is_busy: bool,
    /// Transport allowance. `None` uses the workplace default.
    #[serde(default)]
    pub transport: Option<i64>,
    /// Free-text note.
    #[serde(default)]
    pub memo: String,
}

impl RawShiftEntry {
    /// Creates an entry with no overrides, not busy, and an empty memo.
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        workplace_id: impl Into<String>,
    ) -> Self {
        Self {
            date,
            start_time,
            end_time,
            workplace_id: workplace_id.into(),
            wage_override: None,
            manual_break_minutes: None,
            is_busy: false,
            transport: None,
            memo: String::new(),
        }
    }

    /// Clock-in as a full timestamp.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Clock-out as a full timestamp on the same date.
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }
}
