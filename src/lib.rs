//! dealflow - game deal tracking over the CheapShark catalog
//!
//! ```text
//! CheapShark API → catalog (fetch + normalize + seller directory)
//!      ↓
//! analytics (statistics, rankings, best offer, filters)
//!      ↓
//! export (CSV / JSON sinks)
//!
//! wishlist store ←→ price-alert evaluator → AlertEvent
//! ```
//!
//! Runtime binaries live in `src/bin/`:
//! - `deal_report` - one-shot analysis report over the current catalog
//! - `price_watch` - wishlist price check (alert pass)


pub mod analytics;
pub mod catalog;
pub mod config;
pub mod export;
pub mod wishlist;

pub use config::DealflowConfig;
