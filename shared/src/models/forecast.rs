//! Forecast models and hour selection

use serde::{Deserialize, Serialize};

/// Weather condition text and icon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

/// One hour of a forecast day as reported by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastHour {
    /// Local timestamp, "YYYY-MM-DD HH:MM"
    pub time: String,
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub humidity: i32,
    pub vis_km: f64,
    pub uv: f64,
    pub chance_of_rain: i32,
    pub precip_mm: f64,
}

/// Day-level aggregates of a forecast day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    pub mintemp_c: f64,
    pub maxtemp_c: f64,
}

/// A single forecast day with its hourly breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    /// Hours 0 through 23 in chronological order
    pub hour: Vec<ForecastHour>,
}

impl ForecastHour {
    /// Whether this entry's timestamp falls on the given hour of the day
    pub fn is_hour(&self, hour: u32) -> bool {
        self.time.ends_with(&format!(" {:02}:00", hour))
    }
}

/// Select the forecast entry for the requested hour.
///
/// The first entry whose timestamp ends in `" HH:00"` wins. When nothing matches,
/// the requested hour is used as a direct index into `hours`, clamped to the last
/// entry; that index is not guaranteed to be the requested hour of the day.
/// Returns `None` only when `hours` is empty.
pub fn select_hour(hours: &[ForecastHour], requested_hour: u32) -> Option<&ForecastHour> {
    if let Some(exact) = hours.iter().find(|h| h.is_hour(requested_hour)) {
        return Some(exact);
    }

    let last = hours.len().checked_sub(1)?;
    let index = usize::try_from(requested_hour).unwrap_or(usize::MAX).min(last);
    hours.get(index)
}
