//! Period aggregation and dependent-income limit check.
//!
//! Students working under a parent's tax dependency must keep their annual
//! income below a limit. [`summarize_period`] totals computed shifts from the
//! start of the fiscal period and reports how close that total is to the
//! limit, alongside per-workplace and per-month breakdowns.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ComputedShift;

/// Remaining headroom, in yen, below which the limit is reported as approaching.
pub const APPROACHING_THRESHOLD: i64 = 100_000;

/// How the period's income compares to the dependent-income limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitStatus {
    /// At least [`APPROACHING_THRESHOLD`] yen remain.
    Comfortable,
    /// Under the limit, but less than [`APPROACHING_THRESHOLD`] yen remain.
    Approaching,
    /// Income is above the limit.
    Exceeded,
}

/// Result of comparing total income to the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeLimitCheck {
    /// The limit in yen.
    pub limit_income: i64,
    /// `limit_income - total_income`; negative once the limit is exceeded.
    pub remaining: i64,
    /// Classification of `remaining`.
    pub status: LimitStatus,
}

impl IncomeLimitCheck {
    /// Compares `total_income` against `limit_income`.
    pub fn evaluate(total_income: i64, limit_income: i64) -> Self {
        let remaining = limit_income - total_income;
        let status = if remaining < 0 {
            LimitStatus::Exceeded
        } else if remaining < APPROACHING_THRESHOLD {
            LimitStatus::Approaching
        } else {
            LimitStatus::Comfortable
        };

        Self {
            limit_income,
            remaining,
            status,
        }
    }
}

/// Pay and paid hours for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Month in `YYYY-MM` form.
    pub year_month: String,
    /// Total pay for the month.
    pub pay: i64,
    /// Total paid hours, rounded to two decimal places.
    pub work_hours: Decimal,
}

/// Totals for every shift dated on or after the fiscal start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// First date of the period.
    pub fiscal_start: NaiveDate,
    /// Number of shifts counted.
    pub shift_count: usize,
    /// Total pay, excluding transport.
    pub total_income: i64,
    /// Total transport allowance.
    pub total_transport: i64,
    /// Total busy-period bonus (already part of `total_income`).
    pub total_busy_bonus: i64,
    /// `total_income + total_transport`.
    pub income_with_transport: i64,
    /// Total pay per workplace, ordered by workplace id.
    pub by_workplace: BTreeMap<String, i64>,
    /// Totals per month, in chronological order.
    pub by_month: Vec<MonthlyTotal>,
    /// Dependent-income limit check on `total_income`.
    pub limit_check: IncomeLimitCheck,
}

/// Returns January 1st of `date`'s year, the default fiscal start.
pub fn default_fiscal_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Aggregates `shifts` dated on or after `fiscal_start`.
///
/// Transport is not income for the limit check; it is reported separately
/// and in `income_with_transport` only.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::{compute_pay, summarize_period, LimitStatus};
/// use shift_pay_engine::models::RawShiftEntry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let entry = RawShiftEntry::new(
///     NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     "warehouse",
/// );
/// let shift = compute_pay(&entry, None).unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let summary = summarize_period(&[shift], start, 1_030_000);
/// assert_eq!(summary.total_income, 8800);
/// assert_eq!(summary.limit_check.status, LimitStatus::Comfortable);
/// ```
pub fn summarize_period(
    shifts: &[ComputedShift],
    fiscal_start: NaiveDate,
    limit_income: i64,
) -> PeriodSummary {
    let period: Vec<&ComputedShift> = shifts.iter().filter(|s| s.date >= fiscal_start).collect();

    let total_income: i64 = period.iter().map(|s| s.pay).sum();
    let total_transport: i64 = period.iter().map(|s| s.transport).sum();
    let total_busy_bonus: i64 = period.iter().map(|s| s.busy_bonus).sum();
    let income_with_transport: i64 = period.iter().map(|s| s.pay_with_transport()).sum();

    let mut by_workplace: BTreeMap<String, i64> = BTreeMap::new();
    let mut months: BTreeMap<String, (i64, Decimal)> = BTreeMap::new();
    for shift in &period {
        *by_workplace.entry(shift.workplace_id.clone()).or_default() += shift.pay;

        let month = months
            .entry(shift.date.format("%Y-%m").to_string())
            .or_default();
        month.0 += shift.pay;
        month.1 += shift.work_hours;
    }

    let by_month = months
        .into_iter()
        .map(|(year_month, (pay, hours))| MonthlyTotal {
            year_month,
            pay,
            work_hours: hours.round_dp(2),
        })
        .collect();

    PeriodSummary {
        fiscal_start,
        shift_count: period.len(),
        total_income,
        total_transport,
        total_busy_bonus,
        income_with_transport,
        by_workplace,
        by_month,
        limit_check: IncomeLimitCheck::evaluate(total_income, limit_income),
    }
}
