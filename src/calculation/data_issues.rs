//! Consistency checks over stored shifts.
//!
//! Shift records are edited by hand and imported from CSV, so a stored
//! [`ComputedShift`] may carry values the pay calculator would never produce.
//! [`find_data_issues`] reports them without modifying anything.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ComputedShift, RawShiftEntry, hm_time};

/// A single inconsistency found in the shift records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DataIssue {
    /// The end time is not after the start time.
    NonPositiveInterval {
        /// Shift date.
        date: NaiveDate,
        /// Workplace identifier.
        workplace_id: String,
        /// Clock-in time.
        #[serde(with = "hm_time")]
        start: NaiveTime,
        /// Clock-out time.
        #[serde(with = "hm_time")]
        end: NaiveTime,
    },
    /// The clocked interval is valid but the workplace's pre/post padding
    /// leaves nothing to pay for.
    InvalidPaddedInterval {
        /// Shift date.
        date: NaiveDate,
        /// Workplace identifier.
        workplace_id: String,
        /// Clock-in time.
        #[serde(with = "hm_time")]
        start: NaiveTime,
        /// Clock-out time.
        #[serde(with = "hm_time")]
        end: NaiveTime,
        /// Why the padded interval was rejected.
        reason: String,
    },
    /// Two shifts at the same workplace on the same date overlap.
    OverlappingShifts {
        /// Shift date.
        date: NaiveDate,
        /// Workplace identifier.
        workplace_id: String,
        /// The earlier shift's clock-in time.
        #[serde(with = "hm_time")]
        first_start: NaiveTime,
        /// The earlier shift's clock-out time.
        #[serde(with = "hm_time")]
        first_end: NaiveTime,
        /// The later shift's clock-in time.
        #[serde(with = "hm_time")]
        second_start: NaiveTime,
        /// The later shift's clock-out time.
        #[serde(with = "hm_time")]
        second_end: NaiveTime,
    },
    /// The hourly wage is zero or negative.
    NonPositiveWage {
        /// Shift date.
        date: NaiveDate,
        /// Workplace identifier.
        workplace_id: String,
        /// The stored wage.
        wage: i64,
    },
    /// Paid hours are negative.
    NegativeWorkHours {
        /// Shift date.
        date: NaiveDate,
        /// Workplace identifier.
        workplace_id: String,
        /// The stored paid hours.
        work_hours: Decimal,
    },
    /// Pay is negative.
    NegativePay {
        /// Shift date.
        date: NaiveDate,
        /// Workplace identifier.
        workplace_id: String,
        /// The stored pay.
        pay: i64,
    },
}

impl DataIssue {
    /// Reports a raw entry whose end is not after its start.
    pub fn non_positive_interval(entry: &RawShiftEntry) -> Self {
        DataIssue::NonPositiveInterval {
            date: entry.date,
            workplace_id: entry.workplace_id.clone(),
            start: entry.start_time,
            end: entry.end_time,
        }
    }

    /// Reports a raw entry the pay calculator rejected with `reason`.
    ///
    /// Entries whose end is not after their start become
    /// [`DataIssue::NonPositiveInterval`]; anything else was rejected after
    /// padding and keeps the calculator's reason.
    pub fn rejected_interval(entry: &RawShiftEntry, reason: impl Into<String>) -> Self {
        if entry.end_time <= entry.start_time {
            return Self::non_positive_interval(entry);
        }
        DataIssue::InvalidPaddedInterval {
            date: entry.date,
            workplace_id: entry.workplace_id.clone(),
            start: entry.start_time,
            end: entry.end_time,
            reason: reason.into(),
        }
    }

    /// The date of the shift the issue was found on.
    pub fn date(&self) -> NaiveDate {
        match self {
            DataIssue::NonPositiveInterval { date, .. }
            | DataIssue::InvalidPaddedInterval { date, .. }
            | DataIssue::OverlappingShifts { date, .. }
            | DataIssue::NonPositiveWage { date, .. }
            | DataIssue::NegativeWorkHours { date, .. }
            | DataIssue::NegativePay { date, .. } => *date,
        }
    }

    /// Human-readable description, prefixed with date and workplace.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::NonPositiveInterval {
                date,
                workplace_id,
                start,
                end,
            } => write!(
                f,
                "{} {}: end time is not after start time ({}-{})",
                date,
                workplace_id,
                hm_time::format(start),
                hm_time::format(end)
            ),
            DataIssue::InvalidPaddedInterval {
                date,
                workplace_id,
                start,
                end,
                reason,
            } => write!(
                f,
                "{} {}: shift {}-{} cannot be paid: {}",
                date,
                workplace_id,
                hm_time::format(start),
                hm_time::format(end),
                reason
            ),
            DataIssue::OverlappingShifts {
                date,
                workplace_id,
                first_start,
                first_end,
                second_start,
                second_end,
            } => write!(
                f,
                "{} {}: shifts {}-{} and {}-{} overlap",
                date,
                workplace_id,
                hm_time::format(first_start),
                hm_time::format(first_end),
                hm_time::format(second_start),
                hm_time::format(second_end)
            ),
            DataIssue::NonPositiveWage {
                date,
                workplace_id,
                wage,
            } => write!(f, "{} {}: wage {} is not positive", date, workplace_id, wage),
            DataIssue::NegativeWorkHours {
                date,
                workplace_id,
                work_hours,
            } => write!(
                f,
                "{} {}: work hours {} are negative",
                date, workplace_id, work_hours
            ),
            DataIssue::NegativePay {
                date,
                workplace_id,
                pay,
            } => write!(f, "{} {}: pay {} is negative", date, workplace_id, pay),
        }
    }
}

/// Scans `shifts` for inconsistencies.
///
/// Issues are reported in three passes: invalid intervals in input order,
/// then overlaps grouped by (date, workplace) in ascending key order, then
/// wage, hours and pay problems in input order. Within a group, shifts are
/// sorted by start time and each neighbouring pair is compared; a shift
/// starting exactly when the previous one ends does not overlap it.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::{compute_pay, find_data_issues, DataIssue};
/// use shift_pay_engine::models::RawShiftEntry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// let morning = compute_pay(&RawShiftEntry::new(date, hm(9, 0), hm(13, 0), "cafe"), None).unwrap();
/// let lunch = compute_pay(&RawShiftEntry::new(date, hm(12, 0), hm(15, 0), "cafe"), None).unwrap();
///
/// let issues = find_data_issues(&[morning, lunch]);
/// assert_eq!(issues.len(), 1);
/// assert!(matches!(issues[0], DataIssue::OverlappingShifts { .. }));
/// ```
pub fn find_data_issues(shifts: &[ComputedShift]) -> Vec<DataIssue> {
    let mut issues = Vec::new();

    for shift in shifts {
        if shift.end_time <= shift.start_time {
            issues.push(DataIssue::NonPositiveInterval {
                date: shift.date,
                workplace_id: shift.workplace_id.clone(),
                start: shift.start_time,
                end: shift.end_time,
            });
        }
    }

    let mut groups: BTreeMap<(NaiveDate, &str), Vec<(NaiveTime, NaiveTime)>> = BTreeMap::new();
    for shift in shifts {
        groups
            .entry((shift.date, shift.workplace_id.as_str()))
            .or_default()
            .push((shift.start_time, shift.end_time));
    }
    for ((date, workplace_id), mut intervals) in groups {
        intervals.sort();
        for pair in intervals.windows(2) {
            let (first_start, first_end) = pair[0];
            let (second_start, second_end) = pair[1];
            if second_start < first_end {
                issues.push(DataIssue::OverlappingShifts {
                    date,
                    workplace_id: workplace_id.to_string(),
                    first_start,
                    first_end,
                    second_start,
                    second_end,
                });
            }
        }
    }

    for shift in shifts {
        if shift.wage <= 0 {
            issues.push(DataIssue::NonPositiveWage {
                date: shift.date,
                workplace_id: shift.workplace_id.clone(),
                wage: shift.wage,
            });
        }
        if shift.work_hours < Decimal::ZERO {
            issues.push(DataIssue::NegativeWorkHours {
                date: shift.date,
                workplace_id: shift.workplace_id.clone(),
                work_hours: shift.work_hours,
            });
        }
        if shift.pay < 0 {
            issues.push(DataIssue::NegativePay {
                date: shift.date,
                workplace_id: shift.workplace_id.clone(),
                pay: shift.pay,
            });
        }
    }

    issues
}
