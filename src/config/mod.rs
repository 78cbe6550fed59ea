//! Environment-driven configuration

use std::env;
use thiserror::Error;

pub const DEFAULT_FRED_BASE_URL: &str = "https://api.stlouisfed.org/fred";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODELS: &[&str] =
    &["gemini-1.5-flash", "gemini-1.5-flash-latest", "gemini-pro"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub fred_api_key: String,
    pub gemini_api_key: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Reserved for response caching; nothing reads it yet.
    pub cache_ttl_seconds: u64,
    pub fred_base_url: String,
    pub gemini_base_url: String,
    pub gemini_models: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Keys are upper-case variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let fred_api_key = get("FRED_API_KEY").ok_or(ConfigError::Missing("FRED_API_KEY"))?;
        let gemini_api_key =
            get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8000,
        };

        let debug = match get("DEBUG") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "DEBUG",
                value: raw,
            })?,
            None => true,
        };

        let cache_ttl_seconds = match get("CACHE_TTL") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "CACHE_TTL",
                value: raw,
            })?,
            None => 3600,
        };

        let gemini_models = get("GEMINI_MODELS")
            .map(|raw| {
                raw.split(',')
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|models| !models.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODELS.iter().map(|m| m.to_string()).collect());

        Ok(Self {
            fred_api_key,
            gemini_api_key,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            debug,
            cache_ttl_seconds,
            fred_base_url: get("FRED_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FRED_BASE_URL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_models,
            environment: get("APP_ENV").unwrap_or_else(|| "sandbox".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Deployment environment name from `APP_ENV`, `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
