//! Japanese public holiday calendar.
//!
//! [`holidays_for_year`] builds a year's holiday map from scratch;
//! [`HolidayCalendar`] memoizes those maps per year so calendar views can ask
//! [`HolidayCalendar::is_holiday`] for every rendered day cheaply.
//!
//! # Example
//!
//! ```
//! use shift_pay_engine::calendar::{HolidayCalendar, HolidayName};
//! use chrono::NaiveDate;
//!
//! let calendar = HolidayCalendar::new();
//! let marine_day = NaiveDate::from_ymd_opt(2020, 7, 23).unwrap();
//! assert_eq!(calendar.is_holiday(marine_day), Some(HolidayName::MarineDay));
//! ```

mod generator;
mod holiday_name;
mod overrides;

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub use generator::{
    autumnal_equinox_day, base_holidays, holidays_for_year, nth_weekday_of_month,
    vernal_equinox_day,
};
pub use holiday_name::HolidayName;
pub use overrides::{HISTORICAL_OVERRIDES, HolidayPatch, YearOverride};

/// Holidays of one year, ordered by date.
pub type HolidayMap = BTreeMap<NaiveDate, HolidayName>;

/// A year-keyed memo of holiday maps.
///
/// Each year is built once on first request and never changes afterwards.
/// The calendar is `Send + Sync`; share one instance (for example behind an
/// `Arc`) for the lifetime of the process.
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    years: RwLock<HashMap<i32, Arc<HolidayMap>>>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holiday map for `year`, building it on first use.
    ///
    /// Concurrent first requests for the same year may each build the map;
    /// the results are identical and the first one stored is kept.
    pub fn holidays_for_year(&self, year: i32) -> Arc<HolidayMap> {
        if let Some(map) = self
            .years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Arc::clone(map);
        }

        let built = Arc::new(holidays_for_year(year));
        debug!(year, holidays = built.len(), "Built holiday calendar");

        let mut years = self.years.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(years.entry(year).or_insert(built))
    }

    /// Returns the holiday observed on `date`, if any.
    pub fn is_holiday(&self, date: NaiveDate) -> Option<HolidayName> {
        self.holidays_for_year(date.year()).get(&date).copied()
    }

    /// Number of years built so far.
    pub fn cached_years(&self) -> usize {
        self.years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_holiday_lookup() {
        let calendar = HolidayCalendar::new();

        assert_eq!(calendar.is_holiday(date(2025, 1, 1)), Some(HolidayName::NewYearsDay));
        assert_eq!(calendar.is_holiday(date(2025, 1, 2)), None);
        assert_eq!(
            calendar.is_holiday(date(2025, 5, 6)),
            Some(HolidayName::SubstituteHoliday)
        );
    }

    #[test]
    fn test_year_is_built_once() {
        let calendar = HolidayCalendar::new();

        let first = calendar.holidays_for_year(2024);
        let second = calendar.holidays_for_year(2024);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calendar.cached_years(), 1);

        calendar.is_holiday(date(2023, 5, 5));
        assert_eq!(calendar.cached_years(), 2);
    }

    #[test]
    fn test_cached_map_matches_generator() {
        let calendar = HolidayCalendar::new();
        assert_eq!(*calendar.holidays_for_year(2021), holidays_for_year(2021));
    }

    #[test]
    fn test_concurrent_readers_agree() {
        let calendar = Arc::new(HolidayCalendar::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let calendar = Arc::clone(&calendar);
                thread::spawn(move || calendar.holidays_for_year(2026))
            })
            .collect();

        let maps: Vec<Arc<HolidayMap>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(maps.iter().all(|m| **m == *maps[0]));
        assert_eq!(calendar.cached_years(), 1);
    }

    #[test]
    fn test_calendar_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HolidayCalendar>();
    }
}
