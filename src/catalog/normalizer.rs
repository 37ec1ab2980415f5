//! Normalization of raw catalog records into typed datasets
//!
//! The catalog API returns loosely typed JSON objects: prices arrive as
//! strings, fields come and go between responses, and individual records
//! may be garbled. Every record type here is produced through the same
//! default-then-coerce discipline:
//!
//! - string fields default to `""` when absent
//! - numeric-bearing fields default to `"0"` when absent, then coerce
//! - a present but non-numeric value coerces to `None`, never an error
//!
//! Normalization preserves input order and never deduplicates. Malformed
//! individual fields degrade locally; only transport failures (handled in
//! `fetcher`) propagate.

use serde::Serialize;
use serde_json::{Map, Value};

/// One normalized deal row from the `/deals` listing.
#[derive(Debug, Clone, Serialize)]
pub struct DealRecord {
    pub title: String,
    #[serde(rename = "salePrice")]
    pub sale_price: Option<f64>,
    #[serde(rename = "normalPrice")]
    pub normal_price: Option<f64>,
    pub savings: Option<f64>,
    #[serde(rename = "steamRating")]
    pub steam_rating: String,
    #[serde(rename = "storeID")]
    pub store_id: String,
    #[serde(rename = "gameID")]
    pub game_id: String,
    #[serde(rename = "thumb")]
    pub thumbnail_url: String,
}

/// One seller's offer for a single game, from the game-detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GameOffer {
    #[serde(rename = "storeID")]
    pub store_id: String,
    pub price: Option<f64>,
    #[serde(rename = "retailPrice")]
    pub retail_price: Option<f64>,
    pub savings: Option<f64>,
    #[serde(rename = "dealID")]
    pub deal_id: String,
}

/// One row from a title search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub title: String,
    #[serde(rename = "cheapest")]
    pub cheapest_price: Option<f64>,
    #[serde(rename = "steamAppID")]
    pub steam_app_id: String,
}

/// Read a string field, defaulting to `""` when absent or non-string.
fn text_field(raw: &Map<String, Value>, key: &str) -> String {
    text_field_or(raw, key, "")
}

fn text_field_or(raw: &Map<String, Value>, key: &str, default: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Read a numeric-bearing field with the default-then-coerce rule.
///
/// An absent field behaves as the default `"0"` (coercing to 0.0). A field
/// that is present but not numeric (empty string, garbage text, null, an
/// array) coerces to `None`.
fn numeric_field(raw: &Map<String, Value>, key: &str) -> Option<f64> {
    match raw.get(key) {
        None => Some(0.0),
        Some(value) => coerce_number(value),
    }
}

/// Coerce a JSON value to f64: numbers pass through, strings are parsed,
/// everything else is `None`. A string parsing to NaN counts as missing,
/// not as a value — NaN would poison every downstream mean.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        _ => None,
    }
}

/// Normalize raw `/deals` records into `DealRecord` rows.
///
/// Empty input yields an empty dataset. Input order is preserved.
pub fn normalize_deals(raw: &[Map<String, Value>]) -> Vec<DealRecord> {
    raw.iter()
        .map(|deal| DealRecord {
            title: text_field(deal, "title"),
            sale_price: numeric_field(deal, "salePrice"),
            normal_price: numeric_field(deal, "normalPrice"),
            savings: numeric_field(deal, "savings"),
            steam_rating: text_field_or(deal, "steamRatingText", "N/A"),
            store_id: text_field(deal, "storeID"),
            game_id: text_field(deal, "gameID"),
            thumbnail_url: text_field(deal, "thumb"),
        })
        .collect()
}

/// Normalize a raw game-detail mapping into its per-seller offers.
///
/// The embedded `deals` list may be absent entirely ⇒ empty dataset.
/// Non-object entries in the list are skipped.
pub fn normalize_game_offers(raw_game: &Map<String, Value>) -> Vec<GameOffer> {
    let deals = match raw_game.get("deals") {
        Some(Value::Array(deals)) => deals,
        _ => return Vec::new(),
    };

    deals
        .iter()
        .filter_map(|entry| entry.as_object())
        .map(|offer| GameOffer {
            store_id: text_field(offer, "storeID"),
            price: numeric_field(offer, "price"),
            retail_price: numeric_field(offer, "retailPrice"),
            savings: numeric_field(offer, "savings"),
            deal_id: text_field(offer, "dealID"),
        })
        .collect()
}

/// Normalize raw title-search records.
///
/// The API reports the title under `external` and may return a null
/// `steamAppID` for games not on Steam (normalized to `""`).
pub fn normalize_search_results(raw: &[Map<String, Value>]) -> Vec<SearchResult> {
    raw.iter()
        .map(|game| SearchResult {
            game_id: text_field(game, "gameID"),
            title: text_field(game, "external"),
            cheapest_price: numeric_field(game, "cheapest"),
            steam_app_id: text_field(game, "steamAppID"),
        })
        .collect()
}
