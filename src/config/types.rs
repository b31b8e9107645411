//! Configuration types for shift pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML workplace configuration file. Every field
//! carries its default as part of the type, so a partially-filled workplace
//! entry still yields a complete [`WorkplaceConfig`].

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::models::{RawShiftEntry, hm_time};

/// Hourly wage used when neither the wage history nor the workplace provides one.
pub const FALLBACK_WAGE: i64 = 1100;

/// Default annual dependent-income limit in yen.
pub const DEFAULT_LIMIT_INCOME: i64 = 1_030_000;

/// One entry of a workplace's wage history.
///
/// `effective_from` is `None` when the source value was missing or could not
/// be parsed as a date; such entries are ignored by the wage resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageHistoryEntry {
    /// First date on which `wage` applies.
    #[serde(default, alias = "from", deserialize_with = "lenient_date")]
    pub effective_from: Option<NaiveDate>,
    /// Hourly wage in yen.
    pub wage: i64,
}

/// A tiered break rule: shifts of at least `min_hours` get `break_minutes` unpaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRule {
    /// Minimum raw hours for this rule to apply.
    pub min_hours: Decimal,
    /// Unpaid break length in minutes.
    pub break_minutes: i64,
}

/// Pay policy for a single workplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkplaceConfig {
    /// Workplace identifier. Filled from the map key when loaded from YAML.
    pub id: String,
    /// Hourly wage when no wage history entry applies.
    pub default_wage: i64,
    /// Transport allowance used when a shift does not specify one.
    pub default_transport: i64,
    /// Wage changes keyed by effective date, in any order.
    pub wage_history: Vec<WageHistoryEntry>,
    /// Minutes paid before clock-in.
    pub pre_minutes: i64,
    /// Minutes paid after clock-out.
    pub post_minutes: i64,
    /// Break rules, one per distinct threshold.
    pub break_rules: Vec<BreakRule>,
    /// Start hour of the night window.
    #[serde(alias = "night_start")]
    pub night_start_hour: u32,
    /// End hour of the night window; may be below the start hour.
    #[serde(alias = "night_end")]
    pub night_end_hour: u32,
    /// Multiplier for night hours; the premium is `wage * (rate - 1)`.
    pub night_rate: Decimal,
    /// Start hour of the early-morning window.
    #[serde(alias = "early_start")]
    pub early_start_hour: u32,
    /// End hour of the early-morning window.
    #[serde(alias = "early_end")]
    pub early_end_hour: u32,
    /// Flat bonus per early-window hour.
    pub early_bonus_per_hour: i64,
    /// Flat bonus per paid hour of a busy-period shift.
    pub busy_bonus_per_hour: i64,
}

impl Default for WorkplaceConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            default_wage: FALLBACK_WAGE,
            default_transport: 0,
            wage_history: Vec::new(),
            pre_minutes: 0,
            post_minutes: 0,
            break_rules: Vec::new(),
            night_start_hour: 22,
            night_end_hour: 5,
            night_rate: Decimal::ONE,
            early_start_hour: 5,
            early_end_hour: 8,
            early_bonus_per_hour: 0,
            busy_bonus_per_hour: 0,
        }
    }
}

impl WorkplaceConfig {
    /// Creates a workplace with default policy and the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A named shift preset that pre-fills a shift entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPattern {
    /// Workplace the pattern belongs to.
    pub workplace: String,
    /// Clock-in time.
    #[serde(with = "hm_time")]
    pub start: NaiveTime,
    /// Clock-out time.
    #[serde(with = "hm_time")]
    pub end: NaiveTime,
    /// Wage to pin on the entry, if any.
    #[serde(default)]
    pub wage: Option<i64>,
    /// Manual break in minutes; zero means the break rules decide.
    #[serde(default)]
    pub manual_break_min: i64,
    /// Transport allowance, if any.
    #[serde(default)]
    pub transport: Option<i64>,
}

impl ShiftPattern {
    /// Builds a raw shift entry for `date` from this pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::config::ShiftPattern;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let pattern = ShiftPattern {
    ///     workplace: "cafe".to_string(),
    ///     start: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(22, 30, 0).unwrap(),
    ///     wage: Some(1310),
    ///     manual_break_min: 45,
    ///     transport: Some(640),
    /// };
    /// let entry = pattern.to_entry(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
    /// assert_eq!(entry.workplace_id, "cafe");
    /// assert_eq!(entry.manual_break_minutes, Some(45));
    /// ```
    pub fn to_entry(&self, date: NaiveDate) -> RawShiftEntry {
        RawShiftEntry {
            date,
            start_time: self.start,
            end_time: self.end,
            workplace_id: self.workplace.clone(),
            wage_override: self.wage,
            manual_break_minutes: (self.manual_break_min > 0).then_some(self.manual_break_min),
            is_busy: false,
            transport: self.transport,
            memo: String::new(),
        }
    }
}

/// Application-wide settings used by the period summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Annual dependent-income limit in yen.
    pub limit_income: i64,
    /// First date counted by the period summary. `None` means January 1st
    /// of the current year.
    pub fiscal_start: Option<NaiveDate>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            limit_income: DEFAULT_LIMIT_INCOME,
            fiscal_start: None,
        }
    }
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Application settings.
    pub settings: AppSettings,
    /// Workplace policies keyed by workplace identifier.
    pub workplaces: HashMap<String, WorkplaceConfig>,
    /// Shift presets keyed by name.
    pub patterns: HashMap<String, ShiftPattern>,
}

impl EngineConfig {
    /// Copies each map key into its workplace's `id` field.
    pub(crate) fn normalize(mut self) -> Self {
        for (id, workplace) in self.workplaces.iter_mut() {
            workplace.id = id.clone();
        }
        self
    }
}

/// Deserializes an optional date, mapping unparseable values to `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}
