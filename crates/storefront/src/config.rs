//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TAILORZONE_API_URL` - Catalog service base URL (default: `http://localhost:5000`)
//! - `TAILORZONE_DATA_DIR` - Directory for cart/wishlist snapshots (default: `.tailorzone`)
//! - `TAILORZONE_CACHE_TTL_SECS` - Catalog response cache TTL (default: 300)
//! - `TAILORZONE_REQUEST_TIMEOUT_SECS` - Catalog request timeout (default: 10)
//! - `TAILORZONE_PRODUCTS_PER_PAGE` - Product grid page size (default: 12)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_DATA_DIR: &str = ".tailorzone";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog service configuration
    pub catalog: CatalogConfig,
    /// Directory holding the cart and wishlist snapshots
    pub data_dir: PathBuf,
    /// Products per page in listings
    pub products_per_page: usize,
}

/// Catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service (http or https)
    pub base_url: Url,
    /// How long catalog responses stay cached
    pub cache_ttl: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl CatalogConfig {
    /// Build a catalog configuration for `base_url` with default timings.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            cache_ttl: Duration::from_secs(300),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Parse `base_url` and build a configuration with default timings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL does not parse or is
    /// not http(s).
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(parse_base_url("TAILORZONE_API_URL", base_url)?))
    }

    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(
            "TAILORZONE_API_URL",
            &get_env_or_default("TAILORZONE_API_URL", DEFAULT_API_URL),
        )?;
        let cache_ttl = Duration::from_secs(get_parsed_or_default(
            "TAILORZONE_CACHE_TTL_SECS",
            300,
        )?);
        let request_timeout = Duration::from_secs(get_parsed_or_default(
            "TAILORZONE_REQUEST_TIMEOUT_SECS",
            10,
        )?);

        Ok(Self {
            base_url,
            cache_ttl,
            request_timeout,
        })
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = CatalogConfig::from_env()?;
        let data_dir = PathBuf::from(get_env_or_default("TAILORZONE_DATA_DIR", DEFAULT_DATA_DIR));
        let products_per_page = get_parsed_or_default("TAILORZONE_PRODUCTS_PER_PAGE", 12)?;
        if products_per_page == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "TAILORZONE_PRODUCTS_PER_PAGE".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            catalog,
            data_dir,
            products_per_page,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to `default` if unset.
fn get_parsed_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_or_default(key, std::env::var(key).ok().as_deref(), default)
}

/// Parse `value` read from `key`, or return `default` when there is none.
fn parse_or_default<T>(key: &str, value: Option<&str>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse and validate a catalog base URL.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}
