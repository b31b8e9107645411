//! One-off, year-specific changes to the holiday calendar.
//!
//! These cannot be derived from any rule: they were set by special
//! legislation for the 2019 imperial transition and the Tokyo Olympics.

use chrono::NaiveDate;

use super::HolidayMap;
use super::holiday_name::HolidayName;

/// A single change applied to a year's base holiday map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayPatch {
    /// Drop the holiday entirely for the year.
    Cancel(HolidayName),
    /// Drop the holiday from its usual date and observe it on `month`/`day`.
    Move {
        /// The holiday being moved.
        holiday: HolidayName,
        /// Target month (1-12).
        month: u32,
        /// Target day of month.
        day: u32,
    },
}

/// The patches applied to one year, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearOverride {
    /// The affected year.
    pub year: i32,
    /// Patches applied in order.
    pub patches: &'static [HolidayPatch],
}

/// All known historical overrides, ordered by year.
pub const HISTORICAL_OVERRIDES: &[YearOverride] = &[
    YearOverride {
        year: 2019,
        patches: &[HolidayPatch::Cancel(HolidayName::EmperorsBirthday)],
    },
    YearOverride {
        year: 2020,
        patches: &[
            HolidayPatch::Move {
                holiday: HolidayName::MarineDay,
                month: 7,
                day: 23,
            },
            HolidayPatch::Move {
                holiday: HolidayName::SportsDay,
                month: 7,
                day: 24,
            },
            HolidayPatch::Move {
                holiday: HolidayName::MountainDay,
                month: 8,
                day: 10,
            },
        ],
    },
    YearOverride {
        year: 2021,
        patches: &[
            HolidayPatch::Move {
                holiday: HolidayName::MarineDay,
                month: 7,
                day: 22,
            },
            HolidayPatch::Move {
                holiday: HolidayName::SportsDay,
                month: 7,
                day: 23,
            },
            HolidayPatch::Move {
                holiday: HolidayName::MountainDay,
                month: 8,
                day: 8,
            },
        ],
    },
];

/// Applies every override registered for `year` to `map`.
pub(crate) fn apply_overrides(year: i32, map: &mut HolidayMap) {
    for year_override in HISTORICAL_OVERRIDES.iter().filter(|o| o.year == year) {
        for patch in year_override.patches {
            apply_patch(year, *patch, map);
        }
    }
}

fn apply_patch(year: i32, patch: HolidayPatch, map: &mut HolidayMap) {
    match patch {
        HolidayPatch::Cancel(holiday) => {
            map.retain(|_, name| *name != holiday);
        }
        HolidayPatch::Move {
            holiday,
            month,
            day,
        } => {
            map.retain(|_, name| *name != holiday);
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                map.insert(date, holiday);
            }
        }
    }
}
