//! Catalog ingestion: API client, record normalization, seller directory
//!
//! ```text
//! CheapShark API → CatalogClient (raw JSON mappings)
//!     ↓
//! normalizer (DealRecord / GameOffer / SearchResult datasets)
//!     ↓
//! analytics / wishlist consumers
//! ```
//!
//! Raw records stay untyped until normalization so a partially garbled
//! API response can never take down the pipeline: individual fields
//! degrade to defaults or null, and only transport errors propagate.

pub mod custom_stores;
pub mod fetcher;
pub mod normalizer;
pub mod sellers;

pub use fetcher::{CatalogClient, CatalogError, DEFAULT_API_URL};
pub use normalizer::{
    normalize_deals, normalize_game_offers, normalize_search_results, DealRecord, GameOffer,
    SearchResult,
};
pub use sellers::SellerDirectory;
