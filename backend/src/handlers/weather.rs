//! HTTP handlers for weather endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use shared::{
    CurrentWeatherQuery, CurrentWeatherResponse, ForecastAnalysisResponse, ForecastRequest,
    OutlookRequest, RecommendationsResponse,
};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Unwrap a JSON body, treating a missing or unreadable body as a validation error
fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::Validation("Request body is required".to_string())
    })
}

/// Current conditions for `?location=`
pub async fn get_current_weather(
    State(state): State<AppState>,
    query: Result<Query<CurrentWeatherQuery>, QueryRejection>,
) -> AppResult<Json<CurrentWeatherResponse>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::Validation("Invalid query string".to_string())
    })?;
    let current = state
        .gateway
        .current_conditions(query.location.as_deref())
        .await?;
    Ok(Json(current))
}

/// Forecast at a date and time with analysis
pub async fn get_forecast_with_analysis(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> AppResult<Json<ForecastAnalysisResponse>> {
    let request = require_body(payload)?;
    let forecast = state.gateway.forecast_with_analysis(&request).await?;
    Ok(Json(forecast))
}

/// Recommendations for a date and time
pub async fn get_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationsResponse>> {
    let request = require_body(payload)?;
    let recommendations = state.gateway.recommendations(&request).await?;
    Ok(Json(recommendations))
}

/// Multi-day outlook
pub async fn get_outlook(
    State(state): State<AppState>,
    payload: Result<Json<OutlookRequest>, JsonRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let request = require_body(payload)?;
    let outlook = state.gateway.outlook(&request).await?;
    Ok(Json(outlook))
}
