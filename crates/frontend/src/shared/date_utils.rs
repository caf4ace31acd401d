/// Date/time formatting for table cells
use chrono::{DateTime, Utc};

/// "2024-03-15T14:02:26Z" -> "15.03.2024 14:02"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(&ts), "15.03.2024 14:02");
    }
}
