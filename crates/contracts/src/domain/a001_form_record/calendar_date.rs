use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Календарная дата без времени (дата рождения, срок действия паспорта).
///
/// The API stores these as ISO instants, so on the way in everything after
/// the `T` separator is dropped. On the way out it is always `YYYY-MM-DD`,
/// which is also what `<input type="date">` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(pub NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

/// Returns the date component of an ISO date or date-time string.
/// Example: "1990-05-01T00:00:00.000Z" -> "1990-05-01"
pub fn date_only(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

impl FromStr for CalendarDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date_part = date_only(s.trim());
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(CalendarDate)
            .map_err(|e| format!("Invalid date '{}': {}", s, e))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date: CalendarDate = "1990-05-01".parse().unwrap();
        assert_eq!(date.value(), NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
    }

    #[test]
    fn test_parse_strips_time_of_day() {
        let date: CalendarDate = "2031-12-31T00:00:00.000Z".parse().unwrap();
        assert_eq!(date.to_string(), "2031-12-31");
    }

    #[test]
    fn test_invalid_date() {
        assert!("".parse::<CalendarDate>().is_err());
        assert!("31.12.2031".parse::<CalendarDate>().is_err());
        assert!("2031-02-30".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_json_shape() {
        let date: CalendarDate = serde_json::from_str("\"1985-01-20T10:15:00Z\"").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"1985-01-20\"");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(date_only("2024-03-15"), "2024-03-15");
        assert_eq!(date_only(""), "");
    }
}
