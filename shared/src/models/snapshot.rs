//! Reshaped forecast snapshot and response bodies

use serde::{Deserialize, Serialize};

use super::{ForecastDay, ForecastHour, LocationSummary};

/// Temperatures for the selected hour and the day's range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureReading {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionReading {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindReading {
    pub speed_kph: f64,
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecipitationReading {
    pub chance_of_rain: i32,
    pub amount_mm: f64,
}

/// Weather at the requested date and hour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: TemperatureReading,
    pub condition: ConditionReading,
    pub wind: WindReading,
    pub precipitation: PrecipitationReading,
    pub humidity: i32,
    pub visibility_km: f64,
    pub uv_index: f64,
}

impl WeatherSnapshot {
    /// Build a snapshot from the selected hour and its day
    pub fn new(day: &ForecastDay, hour: &ForecastHour) -> Self {
        Self {
            temperature: TemperatureReading {
                current: hour.temp_c,
                feels_like: hour.feelslike_c,
                min: day.day.mintemp_c,
                max: day.day.maxtemp_c,
            },
            condition: ConditionReading {
                text: hour.condition.text.clone(),
                icon: hour.condition.icon.clone(),
            },
            wind: WindReading {
                speed_kph: hour.wind_kph,
                direction: hour.wind_dir.clone(),
            },
            precipitation: PrecipitationReading {
                chance_of_rain: hour.chance_of_rain,
                amount_mm: hour.precip_mm,
            },
            humidity: hour.humidity,
            visibility_km: hour.vis_km,
            uv_index: hour.uv,
        }
    }
}

/// Response body for a forecast with natural-language analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastAnalysisResponse {
    pub location: LocationSummary,
    pub date: String,
    pub time: String,
    pub weather: WeatherSnapshot,
    pub ai_analysis: String,
}

/// Response body for recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationsResponse {
    pub location: String,
    pub date: String,
    pub time: String,
    pub recommendations: String,
}
