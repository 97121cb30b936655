//! Process configuration, read once from the environment at startup.

use std::env;

use crate::auth::SYMMETRIC_KEY_SIZE;
use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, MAX_TOKEN_DURATION};

pub mod db;

pub use db::DbSettings;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TOKEN_DURATION_SECS: i64 = 15 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db: DbSettings,
    pub security: SecurityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let key = db::must_var("TOKEN_SYMMETRIC_KEY")?;
        if key.len() != SYMMETRIC_KEY_SIZE {
            return Err(AppError::config(format!(
                "TOKEN_SYMMETRIC_KEY must be exactly {SYMMETRIC_KEY_SIZE} bytes, got {}",
                key.len()
            )));
        }

        let duration_secs = match env::var("TOKEN_DURATION_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| (1..=MAX_TOKEN_DURATION.whole_seconds()).contains(secs))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "TOKEN_DURATION_SECS must be between 1 and {} seconds, got '{raw}'",
                        MAX_TOKEN_DURATION.whole_seconds()
                    ))
                })?,
            Err(_) => DEFAULT_TOKEN_DURATION_SECS,
        };

        Ok(Self {
            host,
            port,
            db: DbSettings::from_env()?,
            security: SecurityConfig::new(
                key.into_bytes(),
                time::Duration::seconds(duration_secs),
            ),
        })
    }
}
