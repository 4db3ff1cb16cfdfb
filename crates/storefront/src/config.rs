//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DUKA_BACKEND_URL` - Base URL of the payment backend
//!
//! ## Optional
//! - `DUKA_CATALOG_URL` - Product catalog endpoint (default: the public fake store API)
//! - `DUKA_PAYMENT_TIMEOUT_SECS` - Hard deadline for a payment request (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default product catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default hard deadline for a payment request, in seconds.
pub const DEFAULT_PAYMENT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Payment backend configuration
    pub backend: BackendConfig,
    /// Product catalog configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Payment backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the payment backend (path segments are appended per endpoint)
    pub base_url: Url,
    /// Hard deadline for a single payment request
    pub payment_timeout: Duration,
}

/// Product catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Full URL of the product listing endpoint
    pub products_url: Url,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            backend: BackendConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_url("DUKA_BACKEND_URL", &get_required_env("DUKA_BACKEND_URL")?)?;

        let timeout_secs = get_env_or_default(
            "DUKA_PAYMENT_TIMEOUT_SECS",
            &DEFAULT_PAYMENT_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs: u64 = timeout_secs.parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidEnvVar("DUKA_PAYMENT_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            payment_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let products_url = parse_url(
            "DUKA_CATALOG_URL",
            &get_env_or_default("DUKA_CATALOG_URL", DEFAULT_CATALOG_URL),
        )?;

        Ok(Self { products_url })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL-valued variable, attributing failures to the variable name.
fn parse_url(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))
}
