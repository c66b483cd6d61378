//! Weather Gateway
//!
//! Proxies a weather data provider, reshapes its answers, and asks a text
//! generation provider to describe forecasts in plain language.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::{GeminiClient, WeatherClient};
use services::WeatherGateway;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: WeatherGateway,
}

impl AppState {
    /// Build the provider clients from configuration
    pub fn new(config: Config) -> AppResult<Self> {
        let weather = WeatherClient::new(&config.weather)?;
        let gemini = GeminiClient::new(&config.gemini)?;

        Ok(Self {
            config: Arc::new(config),
            gateway: WeatherGateway::new(weather, gemini),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/weather", routes::weather_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Gateway API v1.0"
}
