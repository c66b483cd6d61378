//! Weather gateway service
//!
//! Validates caller input, calls the weather provider once, reshapes its answer
//! and, for forecasts, asks the text generation provider to describe it.

use shared::{
    non_empty, parse_forecast_date, parse_requested_hour, select_hour, validate_outlook_days,
    CurrentWeatherResponse, ForecastAnalysisResponse, ForecastDay, ForecastHour, ForecastRequest,
    LocationSummary, OutlookRequest, RecommendationsResponse, WeatherSnapshot,
};

use crate::error::{AppError, AppResult};
use crate::external::weather::ForecastResponse;
use crate::external::{GeminiClient, WeatherClient};
use crate::services::prompts;

/// Validated forecast request
#[derive(Debug)]
struct ForecastParams<'a> {
    location: &'a str,
    date: &'a str,
    time: &'a str,
    hour: u32,
}

/// Gateway between callers and the weather and text providers
#[derive(Clone)]
pub struct WeatherGateway {
    weather: WeatherClient,
    gemini: GeminiClient,
}

impl WeatherGateway {
    pub fn new(weather: WeatherClient, gemini: GeminiClient) -> Self {
        Self { weather, gemini }
    }

    /// Current conditions for a location
    pub async fn current_conditions(&self, location: Option<&str>) -> AppResult<CurrentWeatherResponse> {
        let location = non_empty(location)
            .ok_or_else(|| AppError::Validation("Location parameter is required".to_string()))?;

        if !self.weather.is_configured() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let data = self.weather.get_current(location).await?;
        Ok(CurrentWeatherResponse::new(&data.location, &data.current))
    }

    /// Forecast at a date and hour, with a natural-language analysis
    pub async fn forecast_with_analysis(
        &self,
        request: &ForecastRequest,
    ) -> AppResult<ForecastAnalysisResponse> {
        let params = self.forecast_params(request)?;

        let data = self
            .weather
            .get_forecast_day(params.location, params.date)
            .await
            .map_err(|e| e.with_upstream_message("Failed to fetch forecast data"))?;
        let (day, hour) = selected_hour(&data, params.hour)?;

        let location = LocationSummary::from(&data.location);
        let weather = WeatherSnapshot::new(day, hour);
        let prompt = prompts::analysis_prompt(&location, params.date, params.time, &weather);
        let ai_analysis = self.gemini.generate(&prompt).await?;

        Ok(ForecastAnalysisResponse {
            location,
            date: params.date.to_string(),
            time: params.time.to_string(),
            weather,
            ai_analysis,
        })
    }

    /// Clothing, item and precaution recommendations for a date and hour
    pub async fn recommendations(
        &self,
        request: &ForecastRequest,
    ) -> AppResult<RecommendationsResponse> {
        let params = self.forecast_params(request)?;

        let data = self
            .weather
            .get_forecast_day(params.location, params.date)
            .await?;
        let (_, hour) = selected_hour(&data, params.hour)?;

        let prompt = prompts::recommendations_prompt(hour);
        let recommendations = self.gemini.generate(&prompt).await?;

        Ok(RecommendationsResponse {
            location: data.location.name.clone(),
            date: params.date.to_string(),
            time: params.time.to_string(),
            recommendations: recommendations.trim().to_string(),
        })
    }

    /// Multi-day forecast, returned as the provider sends it
    pub async fn outlook(&self, request: &OutlookRequest) -> AppResult<serde_json::Value> {
        let location = non_empty(request.location.as_deref())
            .ok_or_else(|| AppError::Validation("Location is required".to_string()))?;

        if !self.weather.is_configured() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let days = validate_outlook_days(request.days)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.weather.get_outlook(location, days).await
    }

    /// Validate a forecast request before anything is sent upstream
    fn forecast_params<'a>(&self, request: &'a ForecastRequest) -> AppResult<ForecastParams<'a>> {
        let (Some(location), Some(date), Some(time)) = (
            non_empty(request.location.as_deref()),
            non_empty(request.date.as_deref()),
            non_empty(request.time.as_deref()),
        ) else {
            return Err(AppError::Validation(
                "location, date, and time are required".to_string(),
            ));
        };

        if !self.weather.is_configured() || !self.gemini.is_configured() {
            return Err(AppError::Configuration(
                "API keys not configured".to_string(),
            ));
        }

        parse_forecast_date(date).map_err(|e| AppError::Validation(e.to_string()))?;
        let hour = parse_requested_hour(time).map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(ForecastParams {
            location,
            date,
            time,
            hour,
        })
    }
}

/// First forecast day and its selected hour
fn selected_hour(data: &ForecastResponse, hour: u32) -> AppResult<(&ForecastDay, &ForecastHour)> {
    let day = data
        .forecast
        .forecastday
        .first()
        .ok_or_else(|| AppError::Internal("Forecast contained no days".to_string()))?;
    let selected = select_hour(&day.hour, hour)
        .ok_or_else(|| AppError::Internal("Forecast day contained no hours".to_string()))?;
    Ok((day, selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use proptest::prelude::*;
    use proptest::test_runner::TestRunner;

    fn gateway(weather_key: &str, gemini_key: &str) -> WeatherGateway {
        let mut config = Config::default();
        // Unroutable endpoints: any network call in these tests would fail
        config.weather.api_endpoint = "http://127.0.0.1:9".to_string();
        config.weather.api_key = weather_key.to_string();
        config.gemini.api_endpoint = "http://127.0.0.1:9".to_string();
        config.gemini.api_key = gemini_key.to_string();
        WeatherGateway::new(
            WeatherClient::new(&config.weather).unwrap(),
            GeminiClient::new(&config.gemini).unwrap(),
        )
    }

    fn request(location: &str, date: &str, time: &str) -> ForecastRequest {
        ForecastRequest {
            location: Some(location.to_string()),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
        }
    }

    #[test]
    fn test_forecast_params_valid() {
        let gateway = gateway("w", "g");
        let req = request("London", "2025-10-15", "14:30");
        let params = gateway.forecast_params(&req).unwrap();
        assert_eq!(params.location, "London");
        assert_eq!(params.hour, 14);
    }

    #[test]
    fn test_forecast_params_missing_field() {
        let gateway = gateway("w", "g");
        let mut req = request("London", "2025-10-15", "14:00");
        req.time = None;
        let err = gateway.forecast_params(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "location, date, and time are required"));

        let req = request("", "2025-10-15", "14:00");
        assert!(matches!(gateway.forecast_params(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_forecast_params_missing_keys() {
        let req = request("London", "2025-10-15", "14:00");
        assert!(matches!(gateway("", "g").forecast_params(&req), Err(AppError::Configuration(_))));
        assert!(matches!(gateway("w", "").forecast_params(&req), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_missing_fields_reported_before_missing_keys() {
        let req = ForecastRequest::default();
        assert!(matches!(gateway("", "").forecast_params(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_forecast_params_bad_date_and_time() {
        let gateway = gateway("w", "g");
        let err = gateway
            .forecast_params(&request("London", "15/10/2025", "14:00"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid date format. Use YYYY-MM-DD"));

        let err = gateway
            .forecast_params(&request("London", "2025-10-15", "afternoon"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid time format. Use HH:MM"));
    }

    // One gateway per test: building the HTTP clients is the expensive part
    #[test]
    fn prop_numeric_hour_is_accepted() {
        let gateway = gateway("w", "g");
        let mut runner = TestRunner::default();
        runner
            .run(&(0u32..100, 0u32..60), |(hour, minutes)| {
                let req = request("London", "2025-10-15", &format!("{:02}:{:02}", hour, minutes));
                let params = gateway.forecast_params(&req).unwrap();
                prop_assert_eq!(params.hour, hour);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn prop_non_numeric_hour_is_rejected() {
        let gateway = gateway("w", "g");
        let mut runner = TestRunner::default();
        runner
            .run(&"[a-zA-Z-]{1,8}(:[0-9]{2})?", |time| {
                let req = request("London", "2025-10-15", &time);
                prop_assert!(matches!(
                    gateway.forecast_params(&req),
                    Err(AppError::Validation(_))
                ));
                Ok(())
            })
            .unwrap();
    }

    #[tokio::test]
    async fn test_current_conditions_requires_location() {
        let err = gateway("w", "g").current_conditions(None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = gateway("w", "g").current_conditions(Some("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_current_conditions_requires_key() {
        let err = gateway("", "g").current_conditions(Some("London")).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(ref m) if m == "Weather API key not configured"));
    }

    #[tokio::test]
    async fn test_outlook_validation() {
        let gateway = gateway("w", "");
        let err = gateway.outlook(&OutlookRequest::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Location is required"));

        let err = gateway
            .outlook(&OutlookRequest {
                location: Some("Paris".to_string()),
                days: Some(30),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
