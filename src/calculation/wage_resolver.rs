//! Effective wage lookup.
//!
//! This module determines the hourly wage in force at a workplace on a given
//! date, from the workplace's wage history with its default wage as fallback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{FALLBACK_WAGE, WorkplaceConfig};

/// Where a resolved wage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum WageSource {
    /// A wage history entry effective from the given date.
    History {
        /// The entry's effective date.
        effective_from: NaiveDate,
    },
    /// The workplace's default wage; no history entry applied.
    WorkplaceDefault,
    /// No workplace configuration was available.
    Fallback,
}

/// The result of a wage lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageResolution {
    /// The hourly wage.
    pub wage: i64,
    /// Where the wage came from.
    pub source: WageSource,
}

/// Resolves the wage for `date`, recording where it came from.
///
/// History entries are considered in ascending order of effective date and
/// the last one effective on or before `date` wins. Entries without a valid
/// effective date are skipped.
pub fn resolve_wage(config: Option<&WorkplaceConfig>, date: NaiveDate) -> WageResolution {
    let Some(config) = config else {
        return WageResolution {
            wage: FALLBACK_WAGE,
            source: WageSource::Fallback,
        };
    };

    let mut history: Vec<(NaiveDate, i64)> = config
        .wage_history
        .iter()
        .filter_map(|entry| entry.effective_from.map(|from| (from, entry.wage)))
        .collect();
    history.sort_by_key(|(from, _)| *from);

    match history.iter().rfind(|(from, _)| *from <= date) {
        Some(&(effective_from, wage)) => WageResolution {
            wage,
            source: WageSource::History { effective_from },
        },
        None => WageResolution {
            wage: config.default_wage,
            source: WageSource::WorkplaceDefault,
        },
    }
}

/// Returns the hourly wage in force on `date`. Never fails.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::effective_wage;
/// use shift_pay_engine::config::{WageHistoryEntry, WorkplaceConfig};
/// use chrono::NaiveDate;
///
/// let mut cafe = WorkplaceConfig::new("cafe");
/// cafe.default_wage = 1310;
/// cafe.wage_history = vec![
///     WageHistoryEntry { effective_from: NaiveDate::from_ymd_opt(2025, 4, 1), wage: 1220 },
/// ];
///
/// let may = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// assert_eq!(effective_wage(Some(&cafe), may), 1220);
/// assert_eq!(effective_wage(None, may), 1100);
/// ```
pub fn effective_wage(config: Option<&WorkplaceConfig>, date: NaiveDate) -> i64 {
    resolve_wage(config, date).wage
}
