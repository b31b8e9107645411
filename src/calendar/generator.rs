//! Japanese public holiday generation.
//!
//! Builds the holiday map for a single year from the current ("Happy Monday")
//! rules. The build runs in ordered passes, each over a snapshot of the
//! previous pass's result:
//!
//! 1. fixed-date holidays
//! 2. nth-Monday holidays
//! 3. equinox holidays from the 1980-2099 approximation
//! 4. historical one-off overrides
//! 5. substitute holidays for holidays falling on Sunday
//! 6. citizen's holidays for weekdays sandwiched between holidays

use chrono::{Datelike, NaiveDate, Weekday};

use super::HolidayMap;
use super::holiday_name::HolidayName;
use super::overrides::apply_overrides;

const FIXED_HOLIDAYS: &[(u32, u32, HolidayName)] = &[
    (1, 1, HolidayName::NewYearsDay),
    (2, 11, HolidayName::NationalFoundationDay),
    (2, 23, HolidayName::EmperorsBirthday),
    (4, 29, HolidayName::ShowaDay),
    (5, 3, HolidayName::ConstitutionMemorialDay),
    (5, 4, HolidayName::GreeneryDay),
    (5, 5, HolidayName::ChildrensDay),
    (8, 11, HolidayName::MountainDay),
    (11, 3, HolidayName::CultureDay),
    (11, 23, HolidayName::LaborThanksgivingDay),
];

/// (month, nth Monday, holiday)
const HAPPY_MONDAY_HOLIDAYS: &[(u32, u32, HolidayName)] = &[
    (1, 2, HolidayName::ComingOfAgeDay),
    (7, 3, HolidayName::MarineDay),
    (9, 3, HolidayName::RespectForTheAgedDay),
    (10, 2, HolidayName::SportsDay),
];

/// Day of March on which the vernal equinox falls (valid 1980-2099).
pub fn vernal_equinox_day(year: i32) -> u32 {
    equinox_day(20.8431, year)
}

/// Day of September on which the autumnal equinox falls (valid 1980-2099).
pub fn autumnal_equinox_day(year: i32) -> u32 {
    equinox_day(23.2488, year)
}

fn equinox_day(base: f64, year: i32) -> u32 {
    let offset = (i64::from(year) - 1980) as f64;
    let day = (base + 0.242194 * offset - (offset / 4.0).floor()).floor();
    day.max(0.0) as u32
}

/// Returns the `n`th occurrence of `weekday` in the given month.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calendar::nth_weekday_of_month;
/// use chrono::{NaiveDate, Weekday};
///
/// // Coming of Age Day 2024: second Monday of January
/// assert_eq!(
///     nth_weekday_of_month(2024, 1, Weekday::Mon, 2),
///     NaiveDate::from_ymd_opt(2024, 1, 8)
/// );
/// ```
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    let day = 1 + offset + n.checked_sub(1)? * 7;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Builds the holiday map for `year` before substitute and citizen's
/// holidays are derived (passes 1-4).
pub fn base_holidays(year: i32) -> HolidayMap {
    let mut map = HolidayMap::new();
    let mut add = |date: Option<NaiveDate>, name: HolidayName| {
        if let Some(date) = date {
            map.insert(date, name);
        }
    };

    for &(month, day, name) in FIXED_HOLIDAYS {
        add(NaiveDate::from_ymd_opt(year, month, day), name);
    }

    for &(month, n, name) in HAPPY_MONDAY_HOLIDAYS {
        add(nth_weekday_of_month(year, month, Weekday::Mon, n), name);
    }

    add(
        NaiveDate::from_ymd_opt(year, 3, vernal_equinox_day(year)),
        HolidayName::VernalEquinoxDay,
    );
    add(
        NaiveDate::from_ymd_opt(year, 9, autumnal_equinox_day(year)),
        HolidayName::AutumnalEquinoxDay,
    );

    apply_overrides(year, &mut map);
    map
}

/// Builds the complete holiday map for `year`.
///
/// This is a pure function; see [`HolidayCalendar`](super::HolidayCalendar)
/// for a memoizing wrapper.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calendar::{holidays_for_year, HolidayName};
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2025);
/// let feb_24 = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
/// assert_eq!(holidays.get(&feb_24), Some(&HolidayName::SubstituteHoliday));
/// ```
pub fn holidays_for_year(year: i32) -> HolidayMap {
    let mut map = base_holidays(year);
    add_substitute_holidays(year, &mut map);
    add_citizens_holidays(year, &mut map);
    map
}

fn add_substitute_holidays(year: i32, map: &mut HolidayMap) {
    let sundays: Vec<NaiveDate> = map
        .keys()
        .copied()
        .filter(|date| date.weekday() == Weekday::Sun)
        .collect();

    for sunday in sundays {
        let mut candidate = sunday.succ_opt();
        while let Some(date) = candidate {
            if !map.contains_key(&date) {
                break;
            }
            candidate = date.succ_opt();
        }

        if let Some(date) = candidate.filter(|d| d.year() == year) {
            map.insert(date, HolidayName::SubstituteHoliday);
        }
    }
}

fn add_citizens_holidays(year: i32, map: &mut HolidayMap) {
    let snapshot = map.clone();
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return;
    };

    let is_holiday = |date: Option<NaiveDate>| date.is_some_and(|d| snapshot.contains_key(&d));

    for date in first.iter_days().take_while(|d| d.year() == year) {
        if snapshot.contains_key(&date) || is_weekend(date) {
            continue;
        }
        if is_holiday(date.pred_opt()) && is_holiday(date.succ_opt()) {
            map.insert(date, HolidayName::CitizensHoliday);
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn count(map: &HolidayMap, name: HolidayName) -> usize {
        map.values().filter(|n| **n == name).count()
    }

    #[test]
    fn test_nth_weekday_of_month() {
        // July 2020 starts on a Wednesday
        assert_eq!(
            nth_weekday_of_month(2020, 7, Weekday::Mon, 3),
            Some(date(2020, 7, 20))
        );
        // October 2020 starts on a Thursday
        assert_eq!(
            nth_weekday_of_month(2020, 10, Weekday::Mon, 2),
            Some(date(2020, 10, 12))
        );
        // Month starting on the target weekday
        assert_eq!(
            nth_weekday_of_month(2024, 1, Weekday::Mon, 1),
            Some(date(2024, 1, 1))
        );
        assert_eq!(nth_weekday_of_month(2024, 1, Weekday::Mon, 0), None);
        assert_eq!(nth_weekday_of_month(2024, 2, Weekday::Mon, 5), None);
    }

    #[test]
    fn test_equinox_days_known_years() {
        assert_eq!(vernal_equinox_day(2020), 20);
        assert_eq!(autumnal_equinox_day(2020), 22);
        assert_eq!(vernal_equinox_day(2025), 20);
        assert_eq!(autumnal_equinox_day(2025), 23);
        assert_eq!(autumnal_equinox_day(2012), 22);
    }

    #[test]
    fn test_exactly_one_equinox_each_for_supported_years() {
        for year in 1980..=2099 {
            let map = holidays_for_year(year);
            assert_eq!(count(&map, HolidayName::VernalEquinoxDay), 1, "year {}", year);
            assert_eq!(count(&map, HolidayName::AutumnalEquinoxDay), 1, "year {}", year);
            assert_eq!(
                map.get(&date(year, 3, vernal_equinox_day(year))),
                Some(&HolidayName::VernalEquinoxDay),
                "year {}",
                year
            );
            assert_eq!(
                map.get(&date(year, 9, autumnal_equinox_day(year))),
                Some(&HolidayName::AutumnalEquinoxDay),
                "year {}",
                year
            );
        }
    }

    #[test]
    fn test_years_outside_date_range_are_empty() {
        assert!(holidays_for_year(i32::MIN).is_empty());
        assert!(holidays_for_year(i32::MAX).is_empty());
        // Formula still evaluates without overflow
        let _ = vernal_equinox_day(i32::MIN);
        let _ = autumnal_equinox_day(i32::MAX);
    }

    #[test]
    fn test_2025_calendar() {
        let map = holidays_for_year(2025);

        assert_eq!(map.get(&date(2025, 1, 1)), Some(&HolidayName::NewYearsDay));
        assert_eq!(map.get(&date(2025, 1, 13)), Some(&HolidayName::ComingOfAgeDay));
        assert_eq!(map.get(&date(2025, 2, 23)), Some(&HolidayName::EmperorsBirthday));
        assert_eq!(map.get(&date(2025, 2, 24)), Some(&HolidayName::SubstituteHoliday));
        assert_eq!(map.get(&date(2025, 3, 20)), Some(&HolidayName::VernalEquinoxDay));
        // May 4th falls on a Sunday; May 5th is taken, so the substitute is May 6th
        assert_eq!(map.get(&date(2025, 5, 6)), Some(&HolidayName::SubstituteHoliday));
        assert_eq!(map.get(&date(2025, 7, 21)), Some(&HolidayName::MarineDay));
        assert_eq!(map.get(&date(2025, 9, 15)), Some(&HolidayName::RespectForTheAgedDay));
        assert_eq!(map.get(&date(2025, 9, 23)), Some(&HolidayName::AutumnalEquinoxDay));
        assert_eq!(map.get(&date(2025, 10, 13)), Some(&HolidayName::SportsDay));
        assert_eq!(map.get(&date(2025, 11, 24)), Some(&HolidayName::SubstituteHoliday));
        assert_eq!(map.len(), 19);
    }

    #[test]
    fn test_2020_olympic_moves() {
        let map = holidays_for_year(2020);

        assert_eq!(map.get(&date(2020, 7, 23)), Some(&HolidayName::MarineDay));
        assert_eq!(map.get(&date(2020, 7, 24)), Some(&HolidayName::SportsDay));
        assert_eq!(map.get(&date(2020, 8, 10)), Some(&HolidayName::MountainDay));

        assert_eq!(map.get(&date(2020, 7, 20)), None);
        assert_eq!(map.get(&date(2020, 10, 12)), None);
        assert_eq!(map.get(&date(2020, 8, 11)), None);
        assert_eq!(count(&map, HolidayName::MarineDay), 1);
        assert_eq!(count(&map, HolidayName::SportsDay), 1);
        assert_eq!(count(&map, HolidayName::MountainDay), 1);
    }

    #[test]
    fn test_2021_mountain_day_on_sunday_gets_substitute() {
        let map = holidays_for_year(2021);

        assert_eq!(map.get(&date(2021, 7, 22)), Some(&HolidayName::MarineDay));
        assert_eq!(map.get(&date(2021, 7, 23)), Some(&HolidayName::SportsDay));
        assert_eq!(map.get(&date(2021, 8, 8)), Some(&HolidayName::MountainDay));
        assert_eq!(map.get(&date(2021, 8, 9)), Some(&HolidayName::SubstituteHoliday));
    }

    #[test]
    fn test_2019_has_no_emperors_birthday() {
        let map = holidays_for_year(2019);
        assert_eq!(count(&map, HolidayName::EmperorsBirthday), 0);
        assert_eq!(map.get(&date(2019, 2, 23)), None);
    }

    #[test]
    fn test_citizens_holiday_in_silver_week() {
        // 2026: Respect for the Aged Day on Mon 21st, equinox on Wed 23rd
        let map = holidays_for_year(2026);
        assert_eq!(map.get(&date(2026, 9, 21)), Some(&HolidayName::RespectForTheAgedDay));
        assert_eq!(map.get(&date(2026, 9, 22)), Some(&HolidayName::CitizensHoliday));
        assert_eq!(map.get(&date(2026, 9, 23)), Some(&HolidayName::AutumnalEquinoxDay));
    }

    #[test]
    fn test_substitute_rule_holds_for_all_years() {
        for year in 1980..=2099 {
            let base = base_holidays(year);
            let full = holidays_for_year(year);

            for sunday in base.keys().filter(|d| d.weekday() == Weekday::Sun) {
                let mut next = sunday.succ_opt().unwrap();
                while base.contains_key(&next) {
                    next = next.succ_opt().unwrap();
                }
                if next.year() == year {
                    assert_eq!(
                        full.get(&next),
                        Some(&HolidayName::SubstituteHoliday),
                        "{} should substitute for {}",
                        next,
                        sunday
                    );
                }
            }
        }
    }

    #[test]
    fn test_substitutes_never_chain() {
        for year in 1980..=2099 {
            let full = holidays_for_year(year);
            let base = base_holidays(year);
            let sunday_count = base.keys().filter(|d| d.weekday() == Weekday::Sun).count();
            assert_eq!(count(&full, HolidayName::SubstituteHoliday), sunday_count, "year {}", year);
        }
    }

    #[test]
    fn test_citizens_rule_holds_for_all_years() {
        for year in 1980..=2099 {
            let full = holidays_for_year(year);

            for (day, name) in &full {
                if *name == HolidayName::CitizensHoliday {
                    assert!(!is_weekend(*day));
                    assert!(full.contains_key(&day.pred_opt().unwrap()));
                    assert!(full.contains_key(&day.succ_opt().unwrap()));
                }
            }

            let last = date(year, 12, 31);
            for day in date(year, 1, 2).iter_days().take_while(|d| *d < last) {
                let sandwiched = full.contains_key(&day.pred_opt().unwrap())
                    && full.contains_key(&day.succ_opt().unwrap());
                if sandwiched && !is_weekend(day) {
                    assert!(full.contains_key(&day), "{} should be a holiday", day);
                }
            }
        }
    }
}
