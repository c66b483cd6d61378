//! Location models

use serde::{Deserialize, Serialize};

/// Location block as reported by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime: String,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Full location identity returned with current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationDetail {
    pub name: String,
    pub region: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub timezone: String,
    pub localtime: String,
}

/// Short location identity returned with forecasts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationSummary {
    pub name: String,
    pub region: String,
    pub country: String,
}

impl From<&Location> for LocationDetail {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            region: location.region.clone(),
            country: location.country.clone(),
            coordinates: Coordinates {
                lat: location.lat,
                lon: location.lon,
            },
            timezone: location.tz_id.clone(),
            localtime: location.localtime.clone(),
        }
    }
}

impl From<&Location> for LocationSummary {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            region: location.region.clone(),
            country: location.country.clone(),
        }
    }
}
