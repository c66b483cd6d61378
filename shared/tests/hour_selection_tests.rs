//! Hour selection and request validation properties

use proptest::prelude::*;
use shared::{parse_forecast_date, parse_requested_hour, select_hour, Condition, ForecastHour};

fn hour_at(label: u32) -> ForecastHour {
    ForecastHour {
        time: format!("2025-10-15 {:02}:00", label),
        temp_c: label as f64,
        feelslike_c: label as f64,
        condition: Condition {
            text: "Clear".to_string(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".to_string(),
        },
        wind_kph: 5.0,
        wind_dir: "N".to_string(),
        humidity: 50,
        vis_km: 10.0,
        uv: 1.0,
        chance_of_rain: 0,
        precip_mm: 0.0,
    }
}

fn full_day() -> Vec<ForecastHour> {
    (0..24).map(hour_at).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every valid hour of a complete day selects its own entry, whatever the minutes
    #[test]
    fn prop_exact_hour_selected(hour in 0u32..24, minute in 0u32..60) {
        let hours = full_day();
        let time = format!("{:02}:{:02}", hour, minute);
        let requested = parse_requested_hour(&time).unwrap();

        let selected = select_hour(&hours, requested).unwrap();
        prop_assert_eq!(selected, &hours[hour as usize]);
    }

    /// Hours past the end of the day fall back to the last entry
    #[test]
    fn prop_out_of_range_hour_clamps(hour in 24u32..10_000) {
        let hours = full_day();
        let selected = select_hour(&hours, hour).unwrap();
        prop_assert_eq!(selected, &hours[23]);
    }

    /// On a partial day the fallback is the clamped raw index
    #[test]
    fn prop_partial_day_fallback(len in 1usize..24, hour in 0u32..48) {
        // Labels start at 12:00 so only hours 12.. can match exactly
        let hours: Vec<ForecastHour> = (0..len as u32).map(|i| hour_at(i + 12)).collect();
        let selected = select_hour(&hours, hour).unwrap();

        let expected = hours
            .iter()
            .find(|h| h.is_hour(hour))
            .unwrap_or_else(|| &hours[(hour as usize).min(len - 1)]);
        prop_assert_eq!(selected, expected);
    }

    /// Strings that are not calendar dates never validate
    #[test]
    fn prop_non_dates_rejected(text in "[a-zA-Z ]{0,12}") {
        prop_assert!(parse_forecast_date(&text).is_err());
    }

    /// Day-first and slash-separated dates are rejected
    #[test]
    fn prop_wrong_order_rejected(year in 1000u32..9999, month in 1u32..13, day in 1u32..29) {
        let day_first = format!("{:02}-{:02}-{}", day, month, year);
        let slashed = format!("{}/{:02}/{:02}", year, month, day);
        prop_assert!(parse_forecast_date(&day_first).is_err());
        prop_assert!(parse_forecast_date(&slashed).is_err());
    }

    /// Well-formed dates always validate
    #[test]
    fn prop_iso_dates_accepted(year in 1900i32..2100, month in 1u32..13, day in 1u32..29) {
        let date = format!("{}-{:02}-{:02}", year, month, day);
        prop_assert!(parse_forecast_date(&date).is_ok());
    }
}
