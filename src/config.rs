use std::time::Duration;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub database_max_connections: u32,
}

impl AppConfig {
    /// Reads configuration from the environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let port = parsed_or("PORT", 3001)?;
        let request_timeout = Duration::from_secs(parsed_or("REQUEST_TIMEOUT_SECS", 10)?);
        let database_max_connections = parsed_or("DATABASE_MAX_CONNECTIONS", 10)?;

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            allowed_origins,
            request_timeout,
            database_max_connections,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    std::env::var(key).map_err(|_| AppError::EnvError(format!("{key} must be set")))
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::EnvError(format!("{key} has an invalid value: {raw}"))),
        Err(_) => Ok(default),
    }
}
