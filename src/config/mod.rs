use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::fmt;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Filter directives used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> String {
        format!("incometax={},actix_web=info", self.log_level)
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::configuration(format!("Invalid LOG_FORMAT: {}", other))),
        }
    }
}

/// Credentials guarding the admin endpoints
#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL")
                    .unwrap_or_else(|_| "info".to_string())
                    .to_lowercase(),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            admin: AdminConfig {
                username: env::var("ADMIN_USERNAME")
                    .map_err(|_| AppError::configuration("ADMIN_USERNAME not set"))?,
                password: env::var("ADMIN_PASSWORD")
                    .map_err(|_| AppError::configuration("ADMIN_PASSWORD not set"))?,
            },
            security: SecurityConfig {
                rate_limit_per_minute: env::var("RATE_LIMIT_PER_MINUTE")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid RATE_LIMIT_PER_MINUTE"))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.security.rate_limit_per_minute == 0 {
            return Err(AppError::configuration("Rate limit must be greater than 0"));
        }

        if !LOG_LEVELS.contains(&self.app.log_level.as_str()) {
            return Err(AppError::configuration(format!(
                "Invalid LOG_LEVEL: {}",
                self.app.log_level
            )));
        }

        if self.admin.username.is_empty() || self.admin.password.is_empty() {
            return Err(AppError::configuration(
                "Admin username and password must not be empty",
            ));
        }

        self.server.validate()?;
        self.database.validate()?;

        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.app.env == "development"
    }
}
