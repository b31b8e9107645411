//! Automatic break deduction.
//!
//! Workplaces deduct an unpaid break whose length depends on how long the
//! shift is. Each rule applies from its `min_hours` threshold upwards and the
//! highest threshold reached decides.

use rust_decimal::Decimal;

use crate::config::WorkplaceConfig;

/// Returns the unpaid break, in minutes, for a shift of `total_hours`.
///
/// Returns 0 when no rule's threshold is reached or when there is no
/// workplace configuration. Manual break overrides are handled by the pay
/// calculator and never reach this function.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::auto_break_minutes;
/// use shift_pay_engine::config::{BreakRule, WorkplaceConfig};
/// use rust_decimal::Decimal;
///
/// let mut cafe = WorkplaceConfig::new("cafe");
/// cafe.break_rules = vec![
///     BreakRule { min_hours: Decimal::from(6), break_minutes: 45 },
///     BreakRule { min_hours: Decimal::from(4), break_minutes: 15 },
/// ];
///
/// assert_eq!(auto_break_minutes(Some(&cafe), Decimal::new(775, 2)), 45);
/// assert_eq!(auto_break_minutes(Some(&cafe), Decimal::from(3)), 0);
/// ```
pub fn auto_break_minutes(config: Option<&WorkplaceConfig>, total_hours: Decimal) -> i64 {
    let Some(config) = config else {
        return 0;
    };

    let mut rules: Vec<_> = config.break_rules.iter().collect();
    rules.sort_by_key(|rule| rule.min_hours);

    rules
        .iter()
        .rfind(|rule| rule.min_hours <= total_hours)
        .map(|rule| rule.break_minutes)
        .unwrap_or(0)
}
