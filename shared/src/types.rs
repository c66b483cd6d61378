//! Request types accepted by the gateway

use serde::{Deserialize, Serialize};

/// Query string for current conditions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentWeatherQuery {
    pub location: Option<String>,
}

/// Body for forecast analysis and recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub location: Option<String>,
    /// "YYYY-MM-DD"
    pub date: Option<String>,
    /// "HH:MM", 24-hour
    pub time: Option<String>,
}

/// Body for the multi-day outlook
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlookRequest {
    pub location: Option<String>,
    pub days: Option<u32>,
}

/// Number of days returned when an outlook request does not specify one
pub const DEFAULT_OUTLOOK_DAYS: u32 = 7;
