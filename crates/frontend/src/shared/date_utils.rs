/// Utilities for date formatting in table cells

use chrono::NaiveDate;

/// Parse a record date in the server's YYYY-MM-DD shape.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Format ISO date string to DD.MM.YYYY for display.
/// Example: "2024-03-15" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Today's date as the YYYY-MM-DD wire string.
pub fn today_string(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert!(parse_date("invalid").is_none());
    }

    #[test]
    fn test_round_trip() {
        let date = parse_date("2025-02-01").unwrap();
        assert_eq!(today_string(date), "2025-02-01");
    }
}
