//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults match a backend running locally.
//!
//! - `BACKOFFICE_API_URL` - Base URL of the REST API (default: `http://localhost:3002`)
//! - `BACKOFFICE_API_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `BACKOFFICE_SEARCH_DEBOUNCE_MS` - Debounce for customer/product lookups (default: 500)
//! - `BACKOFFICE_PRODUCTS_PAGE_SIZE` - Rows per page in the products grid (default: 30)
//! - `BACKOFFICE_ORDERS_PAGE_SIZE` - Rows per page in the orders grid (default: 10)
//! - `BACKOFFICE_CUSTOMERS_PAGE_SIZE` - Rows per page in the customers table (default: 20)
//! - `BACKOFFICE_THEME_FILE` - Where the light/dark theme flag is persisted
//!   (default: `.backoffice-theme.json`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:3002";
const DEFAULT_TIMEOUT_SECS: &str = "30";
const DEFAULT_DEBOUNCE_MS: &str = "500";
const DEFAULT_PRODUCTS_PAGE_SIZE: &str = "30";
const DEFAULT_ORDERS_PAGE_SIZE: &str = "10";
const DEFAULT_CUSTOMERS_PAGE_SIZE: &str = "20";
const DEFAULT_THEME_FILE: &str = ".backoffice-theme.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// REST API connection settings
    pub api: ApiConfig,
    /// Grid page sizes
    pub grid: GridConfig,
    /// Debounce applied to as-you-type lookups
    pub search_debounce: Duration,
    /// File holding the persisted theme flag
    pub theme_file: PathBuf,
}

/// REST API connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every resource path is joined onto
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Page sizes for the client-side grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub products_page_size: usize,
    pub orders_page_size: usize,
    pub customers_page_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            products_page_size: 30,
            orders_page_size: 10,
            customers_page_size: 20,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let base_url = parse_base_url(&env("BACKOFFICE_API_URL", DEFAULT_API_URL))?;
        let timeout_secs: u64 = parse_var(
            "BACKOFFICE_API_TIMEOUT_SECS",
            &env("BACKOFFICE_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        )?;
        let debounce_ms: u64 = parse_var(
            "BACKOFFICE_SEARCH_DEBOUNCE_MS",
            &env("BACKOFFICE_SEARCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
        )?;
        let products_page_size = parse_page_size(
            "BACKOFFICE_PRODUCTS_PAGE_SIZE",
            &env("BACKOFFICE_PRODUCTS_PAGE_SIZE", DEFAULT_PRODUCTS_PAGE_SIZE),
        )?;
        let orders_page_size = parse_page_size(
            "BACKOFFICE_ORDERS_PAGE_SIZE",
            &env("BACKOFFICE_ORDERS_PAGE_SIZE", DEFAULT_ORDERS_PAGE_SIZE),
        )?;
        let customers_page_size = parse_page_size(
            "BACKOFFICE_CUSTOMERS_PAGE_SIZE",
            &env("BACKOFFICE_CUSTOMERS_PAGE_SIZE", DEFAULT_CUSTOMERS_PAGE_SIZE),
        )?;
        let theme_file = PathBuf::from(env("BACKOFFICE_THEME_FILE", DEFAULT_THEME_FILE));

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            grid: GridConfig {
                products_page_size,
                orders_page_size,
                customers_page_size,
            },
            search_debounce: Duration::from_millis(debounce_ms),
            theme_file,
        })
    }

    /// Configuration pointing at a specific API URL, everything else default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an http(s) URL.
    pub fn for_api_url(base_url: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| (key == "BACKOFFICE_API_URL").then(|| base_url.to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_page_size(key: &str, value: &str) -> Result<usize, ConfigError> {
    let size: usize = parse_var(key, value)?;
    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(size)
}

/// Parse the API base URL, forcing a trailing slash so `Url::join` keeps any
/// path prefix (e.g. `https://host/api/`).
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar("BACKOFFICE_API_URL".to_string(), msg);

    let mut url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme: {}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
