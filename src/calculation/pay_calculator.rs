//! Shift pay calculation.
//!
//! This module turns a [`RawShiftEntry`] and its workplace's policy into a
//! fully itemized [`ComputedShift`]:
//!
//! 1. Reject shifts whose end is not after their start
//! 2. Pad the clocked interval with the workplace's pre/post minutes
//! 3. Resolve the unpaid break (manual override, else break rules)
//! 4. Paid hours = padded hours - break, floored at zero
//! 5. Night and early-morning hours from the padded interval
//! 6. Resolve the wage (override, else wage history)
//! 7. Price base pay, night premium, early bonus and busy bonus

use chrono::Duration;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::WorkplaceConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ComputedShift, RawShiftEntry};

use super::break_rules::auto_break_minutes;
use super::wage_resolver::resolve_wage;
use super::window_overlap::overlap_hours;

/// Rounds a yen amount half away from zero.
fn round_yen(amount: Decimal) -> EngineResult<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} does not fit in whole yen", amount),
        })
}

/// Computes the pay breakdown for a single shift.
///
/// `config` is the policy of the entry's workplace; `None` means the
/// workplace is not configured and every policy value falls back to its
/// default (wage 1100, no padding, no breaks, no premiums). The result
/// depends only on the two inputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInterval`] when the end time is not after the
/// start time, or when negative padding collapses the interval.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::compute_pay;
/// use shift_pay_engine::config::{BreakRule, WorkplaceConfig};
/// use shift_pay_engine::models::RawShiftEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let mut cafe = WorkplaceConfig::new("cafe");
/// cafe.default_wage = 1310;
/// cafe.pre_minutes = 10;
/// cafe.post_minutes = 5;
/// cafe.break_rules = vec![BreakRule { min_hours: Decimal::from(6), break_minutes: 45 }];
///
/// let entry = RawShiftEntry::new(
///     NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
///     NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(22, 30, 0).unwrap(),
///     "cafe",
/// );
///
/// let shift = compute_pay(&entry, Some(&cafe)).unwrap();
/// assert_eq!(shift.total_hours_raw, Decimal::new(775, 2));
/// assert_eq!(shift.work_hours, Decimal::from(7));
/// assert_eq!(shift.pay, 9170);
/// ```
pub fn compute_pay(
    entry: &RawShiftEntry,
    config: Option<&WorkplaceConfig>,
) -> EngineResult<ComputedShift> {
    let invalid = |message: &str| EngineError::InvalidInterval {
        date: entry.date,
        start: entry.start_time,
        end: entry.end_time,
        message: message.to_string(),
    };

    if entry.end_time <= entry.start_time {
        return Err(invalid(
            "end time must be after start time; shifts crossing midnight are not supported",
        ));
    }

    let default_policy = WorkplaceConfig::default();
    let policy = config.unwrap_or(&default_policy);

    let pay_start = Duration::try_minutes(policy.pre_minutes)
        .and_then(|pre| entry.start_datetime().checked_sub_signed(pre))
        .ok_or_else(|| invalid("pre-shift padding is out of range"))?;
    let pay_end = Duration::try_minutes(policy.post_minutes)
        .and_then(|post| entry.end_datetime().checked_add_signed(post))
        .ok_or_else(|| invalid("post-shift padding is out of range"))?;
    let total_seconds = (pay_end - pay_start).num_seconds();
    if total_seconds <= 0 {
        return Err(invalid("padded interval has no positive length"));
    }
    let total_hours_raw = Decimal::new(total_seconds, 0) / Decimal::new(3600, 0);

    let break_minutes = match entry.manual_break_minutes {
        Some(minutes) if minutes > 0 => minutes,
        _ => auto_break_minutes(config, total_hours_raw),
    };

    let work_hours =
        (total_hours_raw - Decimal::new(break_minutes, 0) / Decimal::new(60, 0)).max(Decimal::ZERO);

    let night_hours = overlap_hours(
        pay_start,
        pay_end,
        policy.night_start_hour,
        policy.night_end_hour,
    );
    let early_hours = overlap_hours(
        pay_start,
        pay_end,
        policy.early_start_hour,
        policy.early_end_hour,
    );

    let wage = match entry.wage_override {
        Some(wage) => wage,
        None => resolve_wage(config, entry.date).wage,
    };
    let wage_dec = Decimal::from(wage);

    let base_pay = work_hours * wage_dec;
    let night_premium = (policy.night_rate - Decimal::ONE).max(Decimal::ZERO);
    let night_bonus = night_hours * wage_dec * night_premium;
    let early_bonus = early_hours * Decimal::from(policy.early_bonus_per_hour);
    let busy_bonus = if entry.is_busy {
        work_hours * Decimal::from(policy.busy_bonus_per_hour)
    } else {
        Decimal::ZERO
    };
    let pay = round_yen(base_pay + night_bonus + early_bonus + busy_bonus)?;

    debug!(
        date = %entry.date,
        workplace_id = %entry.workplace_id,
        wage,
        break_minutes,
        work_hours = %work_hours,
        pay,
        "Computed shift pay"
    );

    Ok(ComputedShift {
        date: entry.date,
        start_time: entry.start_time,
        end_time: entry.end_time,
        workplace_id: entry.workplace_id.clone(),
        wage_override: entry.wage_override,
        manual_break_minutes: entry.manual_break_minutes,
        is_busy: entry.is_busy,
        transport: entry.transport.unwrap_or(policy.default_transport),
        memo: entry.memo.clone(),
        pre_minutes: policy.pre_minutes,
        post_minutes: policy.post_minutes,
        wage,
        total_hours_raw,
        break_minutes,
        work_hours,
        night_hours,
        early_hours,
        base_pay: round_yen(base_pay)?,
        night_bonus: round_yen(night_bonus)?,
        early_bonus: round_yen(early_bonus)?,
        busy_bonus: round_yen(busy_bonus)?,
        pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BreakRule, WageHistoryEntry};
    use crate::models::hm_time;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        hm_time::parse(time_str).unwrap()
    }

    fn entry(date: &str, start: &str, end: &str) -> RawShiftEntry {
        RawShiftEntry::new(make_date(date), make_time(start), make_time(end), "cafe")
    }

    fn rule(min_hours: &str, break_minutes: i64) -> BreakRule {
        BreakRule {
            min_hours: dec(min_hours),
            break_minutes,
        }
    }

    /// Plain workplace: wage 1310, 10/5 minute padding, 45 minute break from 6h.
    fn plain_workplace() -> WorkplaceConfig {
        let mut config = WorkplaceConfig::new("cafe");
        config.default_wage = 1310;
        config.pre_minutes = 10;
        config.post_minutes = 5;
        config.break_rules = vec![rule("6", 45)];
        config
    }

    /// Cafe with the full premium setup.
    fn cafe() -> WorkplaceConfig {
        let mut config = plain_workplace();
        config.default_transport = 640;
        config.wage_history = vec![
            WageHistoryEntry {
                effective_from: NaiveDate::from_ymd_opt(2024, 12, 12),
                wage: 1200,
            },
            WageHistoryEntry {
                effective_from: NaiveDate::from_ymd_opt(2025, 4, 1),
                wage: 1220,
            },
            WageHistoryEntry {
                effective_from: NaiveDate::from_ymd_opt(2025, 10, 1),
                wage: 1310,
            },
        ];
        config.break_rules = vec![rule("4", 15), rule("6", 45), rule("8", 60)];
        config.night_start_hour = 22;
        config.night_end_hour = 1;
        config.night_rate = dec("1.25");
        config.early_start_hour = 5;
        config.early_end_hour = 7;
        config.early_bonus_per_hour = 160;
        config.busy_bonus_per_hour = 200;
        config
    }

    #[test]
    fn test_standard_closing_shift() {
        let shift = compute_pay(&entry("2025-05-01", "15:00", "22:30"), Some(&plain_workplace()))
            .unwrap();

        assert_eq!(shift.total_hours_raw, dec("7.75"));
        assert_eq!(shift.break_minutes, 45);
        assert_eq!(shift.work_hours, dec("7.0"));
        assert_eq!(shift.wage, 1310);
        assert_eq!(shift.base_pay, 9170);
        assert_eq!(shift.night_bonus, 0);
        assert_eq!(shift.early_bonus, 0);
        assert_eq!(shift.busy_bonus, 0);
        assert_eq!(shift.pay, 9170);
    }

    #[test]
    fn test_night_premium_on_padded_tail() {
        // Padded interval 14:50-22:35; 35 minutes fall in the 22:00-01:00 window
        let shift = compute_pay(&entry("2025-11-03", "15:00", "22:30"), Some(&cafe())).unwrap();

        assert_eq!(shift.wage, 1310);
        assert_eq!(shift.night_hours, dec("35") / dec("60"));
        assert_eq!(shift.night_bonus, 191);
        assert_eq!(shift.base_pay, 9170);
        assert_eq!(shift.pay, 9361);
    }

    #[test]
    fn test_early_bonus_and_busy_bonus() {
        // Padded 05:50-11:05 = 5.25h, 15 minute break, 1h10m in the 05:00-07:00 window
        let mut raw = entry("2025-05-01", "06:00", "11:00");
        raw.is_busy = true;

        let shift = compute_pay(&raw, Some(&cafe())).unwrap();

        assert_eq!(shift.wage, 1220);
        assert_eq!(shift.total_hours_raw, dec("5.25"));
        assert_eq!(shift.break_minutes, 15);
        assert_eq!(shift.work_hours, dec("5"));
        assert_eq!(shift.early_hours, dec("70") / dec("60"));
        assert_eq!(shift.base_pay, 6100);
        assert_eq!(shift.early_bonus, 187);
        assert_eq!(shift.busy_bonus, 1000);
        // 6100 + 186.67 + 1000
        assert_eq!(shift.pay, 7287);
    }

    #[test]
    fn test_pay_is_rounded_from_unrounded_sum() {
        // Components 100.4 + 100.4 round to 100 each but sum to 200.8 -> 201
        let mut config = WorkplaceConfig::new("lab");
        config.default_wage = 1004;
        config.early_start_hour = 9;
        config.early_end_hour = 10;
        config.early_bonus_per_hour = 1004;

        // 09:00-09:06 = 0.1h
        let shift = compute_pay(
            &RawShiftEntry::new(make_date("2025-05-01"), make_time("09:00"), make_time("09:06"), "lab"),
            Some(&config),
        )
        .unwrap();

        assert_eq!(shift.base_pay, 100);
        assert_eq!(shift.early_bonus, 100);
        assert_eq!(shift.pay, 201);
    }

    #[test]
    fn test_manual_break_overrides_rules() {
        let mut raw = entry("2025-05-01", "15:00", "22:30");
        raw.manual_break_minutes = Some(30);

        let shift = compute_pay(&raw, Some(&plain_workplace())).unwrap();
        assert_eq!(shift.break_minutes, 30);
        assert_eq!(shift.work_hours, dec("7.25"));
    }

    #[test]
    fn test_zero_manual_break_defers_to_rules() {
        let mut raw = entry("2025-05-01", "15:00", "22:30");
        raw.manual_break_minutes = Some(0);

        let shift = compute_pay(&raw, Some(&plain_workplace())).unwrap();
        assert_eq!(shift.break_minutes, 45);
    }

    #[test]
    fn test_work_hours_floored_at_zero() {
        let mut raw = entry("2025-05-01", "10:00", "10:30");
        raw.manual_break_minutes = Some(120);

        let shift = compute_pay(&raw, Some(&WorkplaceConfig::new("cafe"))).unwrap();
        assert_eq!(shift.work_hours, Decimal::ZERO);
        assert_eq!(shift.base_pay, 0);
        assert_eq!(shift.pay, 0);
    }

    #[test]
    fn test_wage_override_bypasses_history() {
        let mut raw = entry("2025-05-01", "15:00", "22:30");
        raw.wage_override = Some(1500);

        let shift = compute_pay(&raw, Some(&cafe())).unwrap();
        assert_eq!(shift.wage, 1500);
        assert_eq!(shift.base_pay, 10500);
    }

    #[test]
    fn test_transport_defaults_to_workplace() {
        let shift = compute_pay(&entry("2025-05-01", "15:00", "22:30"), Some(&cafe())).unwrap();
        assert_eq!(shift.transport, 640);

        let mut raw = entry("2025-05-01", "15:00", "22:30");
        raw.transport = Some(0);
        let shift = compute_pay(&raw, Some(&cafe())).unwrap();
        assert_eq!(shift.transport, 0);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let shift = compute_pay(&entry("2025-05-01", "09:00", "17:00"), None).unwrap();

        assert_eq!(shift.wage, 1100);
        assert_eq!(shift.pre_minutes, 0);
        assert_eq!(shift.break_minutes, 0);
        assert_eq!(shift.transport, 0);
        assert_eq!(shift.work_hours, dec("8"));
        assert_eq!(shift.pay, 8800);
    }

    #[test]
    fn test_night_rate_below_one_gives_no_premium() {
        let mut config = WorkplaceConfig::new("cafe");
        config.night_rate = dec("0.8");

        let shift = compute_pay(&entry("2025-05-01", "20:00", "23:00"), Some(&config)).unwrap();
        assert_eq!(shift.night_hours, dec("1"));
        assert_eq!(shift.night_bonus, 0);
    }

    #[test]
    fn test_extreme_window_hours_price_no_premium() {
        let mut config = WorkplaceConfig::new("cafe");
        config.night_end_hour = 3_000_000_000;
        config.early_start_hour = u32::MAX;

        let shift = compute_pay(&entry("2025-05-01", "20:00", "23:00"), Some(&config)).unwrap();
        assert_eq!(shift.night_hours, Decimal::ZERO);
        assert_eq!(shift.early_hours, Decimal::ZERO);
        assert_eq!(shift.pay, 3300);
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let result = compute_pay(&entry("2025-05-01", "22:00", "06:00"), Some(&cafe()));

        match result {
            Err(EngineError::InvalidInterval { date, .. }) => {
                assert_eq!(date, make_date("2025-05-01"));
            }
            other => panic!("Expected InvalidInterval, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_length_shift_is_invalid() {
        let result = compute_pay(&entry("2025-05-01", "09:00", "09:00"), Some(&cafe()));
        assert!(matches!(result, Err(EngineError::InvalidInterval { .. })));
    }

    #[test]
    fn test_negative_padding_collapsing_interval_is_invalid() {
        let mut config = WorkplaceConfig::new("cafe");
        config.pre_minutes = -20;
        config.post_minutes = -20;

        let result = compute_pay(&entry("2025-05-01", "09:00", "09:30"), Some(&config));
        assert!(matches!(result, Err(EngineError::InvalidInterval { .. })));
    }

    #[test]
    fn test_recomputing_is_idempotent() {
        let mut raw = entry("2025-11-03", "05:30", "22:30");
        raw.is_busy = true;
        raw.memo = "inventory".to_string();

        let first = compute_pay(&raw, Some(&cafe())).unwrap();
        let second = compute_pay(&raw, Some(&cafe())).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_entry_fields_are_carried_over() {
        let mut raw = entry("2025-05-01", "15:00", "22:30");
        raw.memo = "covering a colleague".to_string();
        raw.manual_break_minutes = Some(20);

        let shift = compute_pay(&raw, Some(&cafe())).unwrap();
        assert_eq!(shift.memo, "covering a colleague");
        assert_eq!(shift.manual_break_minutes, Some(20));
        assert_eq!(shift.workplace_id, "cafe");
        assert_eq!(shift.start_time, make_time("15:00"));
        assert_eq!(shift.end_time, make_time("22:30"));
        assert_eq!(shift.pre_minutes, 10);
        assert_eq!(shift.post_minutes, 5);
    }
}
