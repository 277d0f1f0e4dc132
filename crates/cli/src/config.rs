//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPHUB_FREE_SHIPPING_THRESHOLD` - Subtotal above which shipping is free (default: 50)
//! - `SHOPHUB_SHIPPING_FEE` - Flat shipping fee below the threshold (default: 9.99)
//! - `SHOPHUB_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: `shophub=info`)

use shophub_core::{Price, ShippingPolicy};
use thiserror::Error;

const DEFAULT_FREE_SHIPPING_THRESHOLD: &str = "50";
const DEFAULT_SHIPPING_FEE: &str = "9.99";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Shipping rules applied to the cart
    pub shipping: ShippingPolicy,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but can't be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let free_shipping_threshold = get_price(
            &lookup,
            "SHOPHUB_FREE_SHIPPING_THRESHOLD",
            DEFAULT_FREE_SHIPPING_THRESHOLD,
        )?;
        let flat_fee = get_price(&lookup, "SHOPHUB_SHIPPING_FEE", DEFAULT_SHIPPING_FEE)?;

        let log_format = match lookup("SHOPHUB_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "SHOPHUB_LOG_FORMAT".to_string(),
                    format!("expected 'pretty' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            shipping: ShippingPolicy::new(free_shipping_threshold, flat_fee),
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a price variable with a default value.
fn get_price(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<Price, ConfigError> {
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<Price>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
