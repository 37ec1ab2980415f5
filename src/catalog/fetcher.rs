//! CheapShark API client
//!
//! Thin async client over the public deal catalog. All endpoints return the
//! raw JSON mappings as delivered by the API; typing happens later in
//! `normalizer`. Transport failures and non-2xx statuses surface as
//! `CatalogError` — the catalog being partially garbled is the normalizer's
//! problem, the catalog being unreachable is the caller's.
//!
//! Endpoint reference: https://apidocs.cheapshark.com/

use serde_json::{Map, Value};
use std::time::Duration;

/// Default API root; override via `DealflowConfig` for tests.
pub const DEFAULT_API_URL: &str = "https://www.cheapshark.com/api/1.0";

#[derive(Debug)]
pub enum CatalogError {
    /// Connection, timeout, or body decode failure
    Http(reqwest::Error),
    /// Non-2xx response from the catalog
    Status(u16),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Http(e) => write!(f, "catalog request failed: {}", e),
            CatalogError::Status(code) => write!(f, "catalog API error: HTTP {}", code),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Async client for the deal catalog API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against the public API with a 10s timeout.
    pub fn with_defaults() -> Result<Self, CatalogError> {
        Self::new(DEFAULT_API_URL, Duration::from_secs(10))
    }

    /// List current deals, optionally narrowed by seller and price ceiling.
    ///
    /// Both filters are applied API-side when given; `None` omits the
    /// query parameter entirely.
    pub async fn list_deals(
        &self,
        store_id: Option<&str>,
        upper_price: Option<f64>,
    ) -> Result<Vec<Map<String, Value>>, CatalogError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(id) = store_id {
            params.push(("storeID", id.to_string()));
        }
        if let Some(price) = upper_price {
            params.push(("upperPrice", price.to_string()));
        }

        let url = format!("{}/deals", self.base_url);
        self.get_json(&url, &params).await
    }

    /// Search games by title.
    pub async fn search_games(&self, title: &str) -> Result<Vec<Map<String, Value>>, CatalogError> {
        let url = format!("{}/games", self.base_url);
        self.get_json(&url, &[("title", title.to_string())]).await
    }

    /// Fetch the detail mapping for one game, with its embedded offer list.
    pub async fn get_game_offers(&self, game_id: &str) -> Result<Map<String, Value>, CatalogError> {
        let url = format!("{}/games", self.base_url);
        self.get_json(&url, &[("id", game_id.to_string())]).await
    }

    /// List all sellers known to the catalog ({storeID, storeName, ...}).
    pub async fn list_stores(&self) -> Result<Vec<Map<String, Value>>, CatalogError> {
        let url = format!("{}/stores", self.base_url);
        self.get_json(&url, &[]).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = self.http.get(url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogClient::new("http://localhost:9999/api/", Duration::from_secs(1))
            .expect("client should build");
        assert_eq!(client.base_url, "http://localhost:9999/api");
    }

    #[tokio::test]
    #[ignore] // Run only when testing with live API
    async fn test_live_list_stores() {
        let client = CatalogClient::with_defaults().unwrap();
        let stores = client.list_stores().await.unwrap();
        assert!(!stores.is_empty());
        assert!(stores[0].contains_key("storeID"));
    }
}
