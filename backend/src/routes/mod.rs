//! Route definitions for the Weather Gateway

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Weather routes, nested under `/weather`
pub fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/forecast", post(handlers::get_forecast_with_analysis))
        .route("/recommendations", post(handlers::get_recommendations))
        .route("/outlook", post(handlers::get_outlook))
}
