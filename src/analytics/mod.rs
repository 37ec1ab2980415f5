//! Analytics over normalized datasets: aggregates, rankings, filtering
//!
//! All entry points treat the empty dataset as a first-class state and
//! never error on data shape. Transport problems belong to `catalog`.

pub mod aggregator;
pub mod best_offer;
pub mod filters;

pub use aggregator::{average_saving, statistics, store_analysis, top_savings, DealStatistics, StoreStats};
pub use best_offer::{best_offer_for_game, BestOffer};
pub use filters::{filter_deals, DealFilter, StoreSelector};
