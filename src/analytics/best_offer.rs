//! Best-offer selection for a single game across sellers

use crate::catalog::{GameOffer, SellerDirectory};
use serde::Serialize;

/// The winning offer for one game: resolved seller name plus the price
/// fields of that one offer (not recomputed aggregates).
#[derive(Debug, Clone, Serialize)]
pub struct BestOffer {
    pub store: String,
    pub price: f64,
    pub savings: Option<f64>,
    #[serde(rename = "retailPrice")]
    pub retail_price: Option<f64>,
}

/// Pick the minimum-price offer, resolving the seller name through the
/// directory (placeholder fallback for unknown ids).
///
/// Ties keep the first occurrence in input order. Returns `None` when the
/// offer set is empty or no offer carries a usable price.
pub fn best_offer_for_game(offers: &[GameOffer], directory: &SellerDirectory) -> Option<BestOffer> {
    let mut best: Option<(&GameOffer, f64)> = None;

    for offer in offers {
        let Some(price) = offer.price else { continue };
        // Strict less-than keeps the earliest offer on ties
        match best {
            Some((_, lowest)) if price >= lowest => {}
            _ => best = Some((offer, price)),
        }
    }

    best.map(|(offer, price)| BestOffer {
        store: directory.name_for(&offer.store_id),
        price,
        savings: offer.savings,
        retail_price: offer.retail_price,
    })
}
