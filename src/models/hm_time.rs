//! Serde helpers for clock times written as `HH:MM`.
//!
//! Shift entries and patterns carry wall-clock times without a date. They are
//! written as `HH:MM`, and `HH:MM:SS` is accepted on input.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats a time as `HH:MM`, or `HH:MM:SS` when it has seconds.
pub fn format(time: &NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Serializes a time with [`format`].
pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(time))
}

/// Deserializes a time with [`parse`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid clock time '{}', expected HH:MM", raw))
    })
}
