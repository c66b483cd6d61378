//! Weather API client for fetching weather data
//!
//! Integrates with WeatherAPI.com for current conditions and forecasts

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use shared::{CurrentConditions, ForecastDay, Location};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI.com response for current conditions
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub location: Location,
    pub current: CurrentConditions,
}

/// WeatherAPI.com response for a forecast
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub forecast: Forecast,
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Whether an API key is configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fetch current conditions, including air quality
    pub async fn get_current(&self, location: &str) -> AppResult<CurrentResponse> {
        tracing::debug!(location, "Fetching current conditions");
        let response = self
            .get("current.json", &[("q", location), ("aqi", "yes")])
            .await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))
    }

    /// Fetch the hourly forecast for a single date
    pub async fn get_forecast_day(&self, location: &str, date: &str) -> AppResult<ForecastResponse> {
        tracing::debug!(location, date, "Fetching forecast day");
        let response = self
            .get("forecast.json", &[("q", location), ("dt", date)])
            .await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))
    }

    /// Fetch a multi-day forecast as the provider returns it
    pub async fn get_outlook(&self, location: &str, days: u32) -> AppResult<serde_json::Value> {
        tracing::debug!(location, days, "Fetching outlook");
        let days = days.to_string();
        let response = self
            .get(
                "forecast.json",
                &[("q", location), ("days", days.as_str()), ("aqi", "no"), ("alerts", "no")],
            )
            .await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))
    }

    /// Issue a GET against the provider, turning non-success statuses into
    /// upstream errors that carry the provider's body
    async fn get(&self, operation: &str, params: &[(&str, &str)]) -> AppResult<Response> {
        let url = format!("{}/{}", self.base_url, operation);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, operation, "Weather API returned an error");
            return Err(AppError::Upstream {
                message: "Failed to fetch weather data".to_string(),
                status,
                details: provider_details(&body),
            });
        }

        Ok(response)
    }
}

/// Provider error body as JSON, or as a string when it is not JSON
fn provider_details(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}
