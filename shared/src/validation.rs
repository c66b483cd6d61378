//! Validation utilities for gateway requests

use chrono::NaiveDate;

use crate::types::DEFAULT_OUTLOOK_DAYS;

/// Longest outlook the weather provider serves
pub const MAX_OUTLOOK_DAYS: u32 = 14;

/// Return the value when it is present and non-empty
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validate a "YYYY-MM-DD" date
pub fn parse_forecast_date(date: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| "Invalid date format. Use YYYY-MM-DD")
}

/// Extract the hour from an "HH:MM" time.
///
/// Only the part before the first ':' is read. The hour is not range-checked
/// above: values past 23 are left to the forecast hour fallback. A negative
/// hour such as "-3:00" is not a valid `u32` and is rejected like any other
/// non-numeric hour instead of falling back.
pub fn parse_requested_hour(time: &str) -> Result<u32, &'static str> {
    let hour = time.split(':').next().unwrap_or_default();
    hour.trim()
        .parse::<u32>()
        .map_err(|_| "Invalid time format. Use HH:MM")
}

/// Resolve the requested outlook length
pub fn validate_outlook_days(days: Option<u32>) -> Result<u32, &'static str> {
    let days = days.unwrap_or(DEFAULT_OUTLOOK_DAYS);
    if days == 0 || days > MAX_OUTLOOK_DAYS {
        return Err("days must be between 1 and 14");
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("London")), Some("London"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_valid_dates() {
        assert_eq!(
            parse_forecast_date("2025-10-15"),
            Ok(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap())
        );
        assert!(parse_forecast_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_forecast_date("15-10-2025").is_err());
        assert!(parse_forecast_date("2025/10/15").is_err());
        assert!(parse_forecast_date("2025-13-01").is_err());
        assert!(parse_forecast_date("2023-02-29").is_err());
        assert!(parse_forecast_date("tomorrow").is_err());
        assert!(parse_forecast_date("").is_err());
    }

    #[test]
    fn test_requested_hour() {
        assert_eq!(parse_requested_hour("14:00"), Ok(14));
        assert_eq!(parse_requested_hour("09:45"), Ok(9));
        assert_eq!(parse_requested_hour("7"), Ok(7));
        assert_eq!(parse_requested_hour("25:00"), Ok(25));
    }

    #[test]
    fn test_requested_hour_rejects_non_numeric() {
        assert!(parse_requested_hour("noon").is_err());
        assert!(parse_requested_hour(":30").is_err());
        assert!(parse_requested_hour("-3:00").is_err());
    }

    #[test]
    fn test_outlook_days() {
        assert_eq!(validate_outlook_days(None), Ok(7));
        assert_eq!(validate_outlook_days(Some(1)), Ok(1));
        assert_eq!(validate_outlook_days(Some(14)), Ok(14));
        assert!(validate_outlook_days(Some(0)).is_err());
        assert!(validate_outlook_days(Some(15)).is_err());
    }
}
