//! Japanese public holiday names.

use serde::{Deserialize, Serialize};

/// The closed set of Japanese public holidays produced by the generator.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calendar::HolidayName;
///
/// assert_eq!(HolidayName::MarineDay.name(), "Marine Day");
/// assert_eq!(HolidayName::MarineDay.japanese_name(), "海の日");
/// assert_eq!(HolidayName::MarineDay.to_string(), "Marine Day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayName {
    /// January 1st.
    NewYearsDay,
    /// Second Monday of January.
    ComingOfAgeDay,
    /// February 11th.
    NationalFoundationDay,
    /// February 23rd.
    EmperorsBirthday,
    /// March equinox.
    VernalEquinoxDay,
    /// April 29th.
    ShowaDay,
    /// May 3rd.
    ConstitutionMemorialDay,
    /// May 4th.
    GreeneryDay,
    /// May 5th.
    ChildrensDay,
    /// Third Monday of July.
    MarineDay,
    /// August 11th.
    MountainDay,
    /// Third Monday of September.
    RespectForTheAgedDay,
    /// September equinox.
    AutumnalEquinoxDay,
    /// Second Monday of October.
    SportsDay,
    /// November 3rd.
    CultureDay,
    /// November 23rd.
    LaborThanksgivingDay,
    /// Observed on the next free day after a holiday falling on Sunday.
    SubstituteHoliday,
    /// A weekday sandwiched between two holidays.
    CitizensHoliday,
}

impl HolidayName {
    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            HolidayName::NewYearsDay => "New Year's Day",
            HolidayName::ComingOfAgeDay => "Coming of Age Day",
            HolidayName::NationalFoundationDay => "National Foundation Day",
            HolidayName::EmperorsBirthday => "Emperor's Birthday",
            HolidayName::VernalEquinoxDay => "Vernal Equinox Day",
            HolidayName::ShowaDay => "Showa Day",
            HolidayName::ConstitutionMemorialDay => "Constitution Memorial Day",
            HolidayName::GreeneryDay => "Greenery Day",
            HolidayName::ChildrensDay => "Children's Day",
            HolidayName::MarineDay => "Marine Day",
            HolidayName::MountainDay => "Mountain Day",
            HolidayName::RespectForTheAgedDay => "Respect for the Aged Day",
            HolidayName::AutumnalEquinoxDay => "Autumnal Equinox Day",
            HolidayName::SportsDay => "Sports Day",
            HolidayName::CultureDay => "Culture Day",
            HolidayName::LaborThanksgivingDay => "Labor Thanksgiving Day",
            HolidayName::SubstituteHoliday => "Substitute Holiday",
            HolidayName::CitizensHoliday => "Citizen's Holiday",
        }
    }

    /// Official Japanese name.
    pub fn japanese_name(self) -> &'static str {
        match self {
            HolidayName::NewYearsDay => "元日",
            HolidayName::ComingOfAgeDay => "成人の日",
            HolidayName::NationalFoundationDay => "建国記念の日",
            HolidayName::EmperorsBirthday => "天皇誕生日",
            HolidayName::VernalEquinoxDay => "春分の日",
            HolidayName::ShowaDay => "昭和の日",
            HolidayName::ConstitutionMemorialDay => "憲法記念日",
            HolidayName::GreeneryDay => "みどりの日",
            HolidayName::ChildrensDay => "こどもの日",
            HolidayName::MarineDay => "海の日",
            HolidayName::MountainDay => "山の日",
            HolidayName::RespectForTheAgedDay => "敬老の日",
            HolidayName::AutumnalEquinoxDay => "秋分の日",
            HolidayName::SportsDay => "スポーツの日",
            HolidayName::CultureDay => "文化の日",
            HolidayName::LaborThanksgivingDay => "勤労感謝の日",
            HolidayName::SubstituteHoliday => "振替休日",
            HolidayName::CitizensHoliday => "国民の休日",
        }
    }

    /// Whether the holiday is derived from other holidays rather than the calendar.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            HolidayName::SubstituteHoliday | HolidayName::CitizensHoliday
        )
    }
}

impl std::fmt::Display for HolidayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&HolidayName::RespectForTheAgedDay).unwrap();
        assert_eq!(json, "\"respect_for_the_aged_day\"");

        let parsed: HolidayName = serde_json::from_str("\"citizens_holiday\"").unwrap();
        assert_eq!(parsed, HolidayName::CitizensHoliday);
    }

    #[test]
    fn test_derived_holidays() {
        assert!(HolidayName::SubstituteHoliday.is_derived());
        assert!(HolidayName::CitizensHoliday.is_derived());
        assert!(!HolidayName::NewYearsDay.is_derived());
    }

    #[test]
    fn test_display_matches_english_name() {
        assert_eq!(HolidayName::ChildrensDay.to_string(), "Children's Day");
    }
}
