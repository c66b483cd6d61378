//! Business logic services for the Weather Gateway

pub mod gateway;
pub mod prompts;

pub use gateway::WeatherGateway;
