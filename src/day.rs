use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Day of the week a travel entry belongs to.
///
/// Variants are declared Monday first so the derived `Ord` matches the
/// order the week is rendered and summarized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Lowercase form used in URLs and element ids.
    pub fn slug(self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day '{0}'")]
pub struct UnknownDay(pub String);

impl FromStr for Day {
    type Err = UnknownDay;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Day::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownDay(value.to_string()))
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_days_start_on_monday_and_are_sorted() {
        assert_eq!(Day::ALL.first(), Some(&Day::Monday));
        assert_eq!(Day::ALL.last(), Some(&Day::Sunday));
        let mut sorted = Day::ALL;
        sorted.sort();
        assert_eq!(sorted, Day::ALL);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("wednesday".parse::<Day>(), Ok(Day::Wednesday));
        assert_eq!(" FRIDAY ".parse::<Day>(), Ok(Day::Friday));
        assert_eq!(
            "someday".parse::<Day>(),
            Err(UnknownDay("someday".to_string()))
        );
    }

    #[test]
    fn converts_from_chrono_weekday() {
        assert_eq!(Day::from(Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn serializes_as_english_name() {
        let json = serde_json::to_string(&Day::Thursday).unwrap();
        assert_eq!(json, "\"Thursday\"");
    }
}
