#[cfg(feature = "cli")]
pub mod console;

use crate::adapters::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use std::env;
use std::time::Duration;

/// Server configuration, read from the environment at startup. The upstream
/// credential is deliberately absent: it is read per request, never cached.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base: String,
    pub model: String,
    pub max_attempts: u32,
    pub retry_base_ms: u64,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            api_base: env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_attempts: env::var("UPSTREAM_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            retry_base_ms: env::var("UPSTREAM_RETRY_BASE_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
        }
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_ms)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("model", &self.model)?;
        validate_positive_number("max_attempts", self.max_attempts as usize, 1)?;
        validate_positive_number("retry_base_ms", self.retry_base_ms as usize, 1)?;
        Ok(())
    }
}
