//! Wishlist persistence and price alerting
//!
//! The store owns the durable JSON document (read-modify-write as one
//! operation); the evaluator is handed a store and an offer source rather
//! than reaching for ambient state, so failure paths stay visible in the
//! signatures.

pub mod alerts;
pub mod store;

pub use alerts::{AlertEvent, OfferSource, PriceAlertEvaluator};
pub use store::{AddOutcome, WishlistItem, WishlistStore};
