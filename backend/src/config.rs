//! Configuration management for the Weather Gateway
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with GATEWAY_ prefix and `__` nesting
//!    (e.g. GATEWAY_WEATHER__API_KEY)
//! 4. The plain WEATHER_API_KEY, GEMINI_API_KEY and PORT variables

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Plain environment variables that override the layered configuration
const PLAIN_ENV_OVERRIDES: [(&str, &str); 2] = [
    ("WEATHER_API_KEY", "weather.api_key"),
    ("GEMINI_API_KEY", "gemini.api_key"),
];

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Text generation provider configuration
    pub gemini: GeminiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,

    /// Outbound request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Generative language API endpoint
    pub api_endpoint: String,

    /// Generative language API key
    pub api_key: String,

    /// Model used for analysis and recommendations
    pub model: String,

    /// Outbound request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log format (pretty or json)
    pub format: String,
}

impl WeatherConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl GeminiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("GATEWAY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let mut builder = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GATEWAY_ prefix)
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in PLAIN_ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }

    /// Builder holding the in-code defaults
    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("server.port", 10000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.weatherapi.com/v1")?
            .set_default("weather.api_key", "")?
            .set_default("weather.timeout_seconds", 30)?
            .set_default(
                "gemini.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.model", "gemini-2.5-flash")?
            .set_default("gemini.timeout_seconds", 60)?
            .set_default("logging.format", "pretty")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig {
                api_endpoint: "https://api.weatherapi.com/v1".to_string(),
                api_key: String::new(),
                timeout_seconds: 30,
            },
            gemini: GeminiConfig {
                api_endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key: String::new(),
                model: "gemini-2.5-flash".to_string(),
                timeout_seconds: 60,
            },
            logging: LoggingConfig {
                format: "pretty".to_string(),
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 10000,
            host: "0.0.0.0".to_string(),
        }
    }
}
