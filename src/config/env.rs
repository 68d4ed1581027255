// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Clone)]
pub struct Config {
    /// SQLite connection string
    /// Format: sqlite:path/to/file.db
    pub database_url: String,

    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Shared secret required by DELETE /report-closed/{id}
    pub api_key: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cafes.db".to_string()),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            api_key: env::var("API_KEY").unwrap_or_default(),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            db_connection_timeout: env::var("DB_CONNECTION_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.is_empty() {
            return Err("DATABASE_URL is required".to_string());
        }

        if self.api_key.is_empty() {
            log::warn!("API_KEY not configured - every report-closed request will be forbidden");
        }

        Ok(())
    }
}

// Hand-written so the secret never reaches the logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("server_address", &self.server_address)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("api_key", &"<redacted>")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_connection_timeout", &self.db_connection_timeout)
            .finish()
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by in-process tests
    pub fn for_tests(api_key: &str) -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            server_address: "127.0.0.1".to_string(),
            server_port: 0,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            api_key: api_key.to_string(),
            db_max_connections: 1,
            db_connection_timeout: 5,
        }
    }
}
