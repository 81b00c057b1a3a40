use crate::core::{AppError, Result};
use std::env;
use tracing_subscriber::EnvFilter;

pub mod calculation;

pub use calculation::{CalculationConfig, ItemDefaults};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub calculation: CalculationConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            calculation: CalculationConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.log_level.trim().is_empty() {
            return Err(AppError::configuration("LOG_LEVEL cannot be empty"));
        }

        EnvFilter::try_new(&self.app.log_level).map_err(|err| {
            AppError::configuration(format!(
                "Invalid LOG_LEVEL '{}': {}",
                self.app.log_level, err
            ))
        })?;

        Ok(())
    }
}
