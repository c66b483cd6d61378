//! Current conditions models

use serde::{Deserialize, Serialize};

use super::{Condition, Location, LocationDetail};

/// Current conditions block as reported by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub humidity: i32,
    pub cloud: i32,
    pub feelslike_c: f64,
    pub vis_km: f64,
    pub uv: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQuality>,
}

/// Air quality readings, present when requested from the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AirQuality {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub so2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm2_5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    #[serde(
        rename = "us-epa-index",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub us_epa_index: Option<i32>,
    #[serde(
        rename = "gb-defra-index",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gb_defra_index: Option<i32>,
}

/// Reshaped current conditions returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentSnapshot {
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub condition: String,
    pub icon: String,
    pub wind_kph: f64,
    pub wind_direction: String,
    pub pressure_mb: f64,
    pub precipitation_mm: f64,
    pub humidity: i32,
    pub cloud: i32,
    pub feels_like_c: f64,
    pub visibility_km: f64,
    pub uv_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQuality>,
}

impl From<&CurrentConditions> for CurrentSnapshot {
    fn from(current: &CurrentConditions) -> Self {
        Self {
            temperature_c: current.temp_c,
            temperature_f: current.temp_f,
            condition: current.condition.text.clone(),
            icon: current.condition.icon.clone(),
            wind_kph: current.wind_kph,
            wind_direction: current.wind_dir.clone(),
            pressure_mb: current.pressure_mb,
            precipitation_mm: current.precip_mm,
            humidity: current.humidity,
            cloud: current.cloud,
            feels_like_c: current.feelslike_c,
            visibility_km: current.vis_km,
            uv_index: current.uv,
            air_quality: current.air_quality.clone(),
        }
    }
}

/// Response body for current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeatherResponse {
    pub location: LocationDetail,
    pub current: CurrentSnapshot,
}

impl CurrentWeatherResponse {
    pub fn new(location: &Location, current: &CurrentConditions) -> Self {
        Self {
            location: location.into(),
            current: current.into(),
        }
    }
}
