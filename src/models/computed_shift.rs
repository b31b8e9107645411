//! Computed shift model.
//!
//! [`ComputedShift`] is the fully itemized result of running the pay
//! calculator over a [`RawShiftEntry`](super::RawShiftEntry). Every hour and
//! money field is derived; to change one, change the inputs and recompute.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::hm_time;

/// A shift with its resolved policy and pay breakdown.
///
/// Hour fields keep full decimal precision. The four pay components are each
/// rounded to whole yen, while `pay` is rounded from their unrounded sum, so
/// `pay` can differ by one yen from the sum of the components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedShift {
    /// The date the shift was worked.
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(with = "hm_time")]
    pub start_time: NaiveTime,
    /// Clock-out time.
    #[serde(with = "hm_time")]
    pub end_time: NaiveTime,
    /// Workplace identifier.
    pub workplace_id: String,
    /// Wage override supplied with the entry, if any.
    pub wage_override: Option<i64>,
    /// Manual break supplied with the entry, if any.
    pub manual_break_minutes: Option<i64>,
    /// Busy-period flag.
    pub is_busy: bool,
    /// Transport allowance (entry value, or the workplace default).
    pub transport: i64,
    /// Free-text note.
    pub memo: String,

    /// Paid minutes before clock-in.
    pub pre_minutes: i64,
    /// Paid minutes after clock-out.
    pub post_minutes: i64,
    /// Hourly wage applied.
    pub wage: i64,
    /// Length of the padded interval in hours.
    pub total_hours_raw: Decimal,
    /// Unpaid break applied, in minutes.
    pub break_minutes: i64,
    /// Paid hours: raw hours less the break, never negative.
    pub work_hours: Decimal,
    /// Hours of the padded interval inside the night window.
    pub night_hours: Decimal,
    /// Hours of the padded interval inside the early-morning window.
    pub early_hours: Decimal,

    /// `work_hours * wage`, rounded.
    pub base_pay: i64,
    /// Night premium, rounded.
    pub night_bonus: i64,
    /// Early-morning bonus, rounded.
    pub early_bonus: i64,
    /// Busy-period bonus, rounded.
    pub busy_bonus: i64,
    /// Total pay, rounded from the unrounded component sum.
    pub pay: i64,
}

impl ComputedShift {
    /// Total of pay and transport allowance.
    pub fn pay_with_transport(&self) -> i64 {
        self.pay + self.transport
    }
}
