//! Runtime configuration from environment variables

use std::env;

/// Configuration for the dealflow runtimes.
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct DealflowConfig {
    /// Catalog API root URL
    pub api_url: String,

    /// Path to the wishlist JSON document
    pub wishlist_path: String,

    /// Base directory for CSV/JSON exports
    pub export_dir: String,

    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,

    /// How many top-savings rows the report prints
    pub top_limit: usize,
}

impl DealflowConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `DEALFLOW_API_URL` (default: https://www.cheapshark.com/api/1.0)
    /// - `DEALFLOW_WISHLIST_PATH` (default: wishlist.json)
    /// - `DEALFLOW_EXPORT_DIR` (default: exports)
    /// - `DEALFLOW_HTTP_TIMEOUT_SECS` (default: 10)
    /// - `DEALFLOW_TOP_LIMIT` (default: 5)
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("DEALFLOW_API_URL")
                .unwrap_or_else(|_| crate::catalog::DEFAULT_API_URL.to_string()),

            wishlist_path: env::var("DEALFLOW_WISHLIST_PATH")
                .unwrap_or_else(|_| "wishlist.json".to_string()),

            export_dir: env::var("DEALFLOW_EXPORT_DIR")
                .unwrap_or_else(|_| "exports".to_string()),

            http_timeout_secs: env::var("DEALFLOW_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            top_limit: env::var("DEALFLOW_TOP_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}
