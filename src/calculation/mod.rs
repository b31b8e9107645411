//! Calculation logic for the shift pay engine.
//!
//! This module contains the pure calculation functions: effective wage
//! lookup, automatic break deduction, overlap of a shift with the night and
//! early-morning windows, the per-shift pay calculation that combines them,
//! period aggregation with the dependent-income limit check, and consistency
//! checks over stored shifts.

mod break_rules;
mod data_issues;
mod pay_calculator;
mod period_summary;
mod wage_resolver;
mod window_overlap;

pub use break_rules::auto_break_minutes;
pub use data_issues::{DataIssue, find_data_issues};
pub use pay_calculator::compute_pay;
pub use period_summary::{
    APPROACHING_THRESHOLD, IncomeLimitCheck, LimitStatus, MonthlyTotal, PeriodSummary,
    default_fiscal_start, summarize_period,
};
pub use wage_resolver::{WageResolution, WageSource, effective_wage, resolve_wage};
pub use window_overlap::overlap_hours;
