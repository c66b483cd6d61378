//! HTTP handlers

pub mod health;
pub mod weather;

pub use health::health_check;
pub use weather::{get_current_weather, get_forecast_with_analysis, get_outlook, get_recommendations};
