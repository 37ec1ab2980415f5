//! Price-alert evaluation over the wishlist
//!
//! One alert pass walks every wishlist item carrying a target price,
//! re-fetches its current offers through the injected `OfferSource`, and
//! raises an `AlertEvent` when the cheapest current offer is at or below
//! the target. Per-item failures (fetch error, empty offer set) skip that
//! item and never abort the pass. The wishlist document is persisted once,
//! after all items are processed.
//!
//! Items without a target price are excluded from evaluation entirely:
//! neither `lastChecked` nor `lowestPriceSeen` is touched for them.

use super::store::WishlistStore;
use crate::catalog::{normalize_game_offers, CatalogClient, CatalogError, GameOffer};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;

/// Raised when a tracked game's cheapest offer meets its target price.
/// Transient: produced fresh on each pass, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub title: String,
    #[serde(rename = "targetPrice")]
    pub target_price: f64,
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    #[serde(rename = "storeID")]
    pub store_id: String,
    #[serde(rename = "dealID")]
    pub deal_id: String,
}

/// Source of current offers for one game. The catalog client is the
/// production implementation; tests inject canned sources.
#[async_trait]
pub trait OfferSource {
    async fn offers_for_game(&self, game_id: &str) -> Result<Vec<GameOffer>, CatalogError>;
}

#[async_trait]
impl OfferSource for CatalogClient {
    async fn offers_for_game(&self, game_id: &str) -> Result<Vec<GameOffer>, CatalogError> {
        let raw = self.get_game_offers(game_id).await?;
        Ok(normalize_game_offers(&raw))
    }
}

/// Evaluator owning one alert pass: wishlist store, offer source, clock.
pub struct PriceAlertEvaluator<S: OfferSource> {
    store: WishlistStore,
    source: S,
    now_fn: Box<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl<S: OfferSource> PriceAlertEvaluator<S> {
    /// Evaluator on the system clock.
    pub fn new(store: WishlistStore, source: S) -> Self {
        Self::with_clock(store, source, Box::new(Utc::now))
    }

    /// Evaluator with an injected clock, for deterministic tests.
    pub fn with_clock(
        store: WishlistStore,
        source: S,
        now_fn: Box<dyn Fn() -> DateTime<Utc> + Send + Sync>,
    ) -> Self {
        Self { store, source, now_fn }
    }

    /// Run one alert pass over all targeted wishlist items.
    ///
    /// Mutations (`lastChecked`, monotone `lowestPriceSeen`) are batched
    /// into a single document write at the end of the pass. Returns the
    /// alerts raised, possibly empty.
    pub async fn run_pass(&self) -> Result<Vec<AlertEvent>, Box<dyn Error>> {
        let mut items = self.store.load();
        if items.is_empty() {
            log::info!("Wishlist is empty, nothing to check");
            return Ok(Vec::new());
        }

        let mut alerts = Vec::new();

        for item in items.iter_mut() {
            let Some(target) = item.target_price else {
                continue; // untracked: no fetch, no timestamp update
            };

            let offers = match self.source.offers_for_game(&item.game_id).await {
                Ok(offers) => offers,
                Err(e) => {
                    log::debug!("Skipping '{}' ({}): {}", item.title, item.game_id, e);
                    continue;
                }
            };

            let Some((price, offer)) = cheapest_offer(&offers) else {
                log::debug!("No priced offers for '{}' ({})", item.title, item.game_id);
                continue;
            };

            item.lowest_price_seen = Some(match item.lowest_price_seen {
                Some(seen) => seen.min(price),
                None => price,
            });
            item.last_checked = Some((self.now_fn)());

            if price <= target {
                alerts.push(AlertEvent {
                    game_id: item.game_id.clone(),
                    title: item.title.clone(),
                    target_price: target,
                    current_price: price,
                    store_id: offer.store_id.clone(),
                    deal_id: offer.deal_id.clone(),
                });
            }
        }

        self.store.save(&items)?;

        log::info!("Alert pass complete: {} alert(s) over {} item(s)", alerts.len(), items.len());
        Ok(alerts)
    }
}

/// Minimum-price offer with its price; first occurrence wins ties.
fn cheapest_offer(offers: &[GameOffer]) -> Option<(f64, &GameOffer)> {
    let mut best: Option<(f64, &GameOffer)> = None;
    for offer in offers {
        let Some(price) = offer.price else { continue };
        match best {
            Some((lowest, _)) if price >= lowest => {}
            _ => best = Some((price, offer)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use tempfile::tempdir;

    /// Canned offer source: per-game offer sets, plus ids that fail.
    struct FixedOffers {
        offers: HashMap<String, Vec<GameOffer>>,
        failing: Vec<String>,
    }

    impl FixedOffers {
        fn new() -> Self {
            Self {
                offers: HashMap::new(),
                failing: Vec::new(),
            }
        }

        fn with_offers(mut self, game_id: &str, prices: &[f64]) -> Self {
            let offers = prices
                .iter()
                .enumerate()
                .map(|(i, &price)| GameOffer {
                    store_id: format!("{}", i + 1),
                    price: Some(price),
                    retail_price: Some(price * 2.0),
                    savings: Some(50.0),
                    deal_id: format!("deal-{}-{}", game_id, i),
                })
                .collect();
            self.offers.insert(game_id.to_string(), offers);
            self
        }

        fn with_failure(mut self, game_id: &str) -> Self {
            self.failing.push(game_id.to_string());
            self
        }
    }

    #[async_trait]
    impl OfferSource for FixedOffers {
        async fn offers_for_game(&self, game_id: &str) -> Result<Vec<GameOffer>, CatalogError> {
            if self.failing.iter().any(|id| id == game_id) {
                return Err(CatalogError::Status(503));
            }
            Ok(self.offers.get(game_id).cloned().unwrap_or_default())
        }
    }

    fn fixed_clock() -> Box<dyn Fn() -> DateTime<Utc> + Send + Sync> {
        Box::new(|| Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    fn store_with_item(
        dir: &tempfile::TempDir,
        game_id: &str,
        target_price: Option<f64>,
    ) -> WishlistStore {
        let store = WishlistStore::new(dir.path().join("wishlist.json"));
        store.add(game_id, &format!("Game {}", game_id), target_price).unwrap();
        store
    }

    #[tokio::test]
    async fn test_alert_raised_at_or_below_target() {
        let dir = tempdir().unwrap();
        let store = store_with_item(&dir, "208", Some(15.0));
        let source = FixedOffers::new().with_offers("208", &[16.0, 14.0, 19.0]);

        let evaluator = PriceAlertEvaluator::with_clock(store, source, fixed_clock());
        let alerts = evaluator.run_pass().await.unwrap();

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].current_price, 14.0);
        assert_eq!(alerts[0].target_price, 15.0);
        assert_eq!(alerts[0].store_id, "2");
        assert_eq!(alerts[0].deal_id, "deal-208-1");
    }

    #[tokio::test]
    async fn test_no_alert_but_timestamp_still_updates() {
        let dir = tempdir().unwrap();
        let store = store_with_item(&dir, "208", Some(15.0));
        let source = FixedOffers::new().with_offers("208", &[16.0]);

        let evaluator = PriceAlertEvaluator::with_clock(store, source, fixed_clock());
        let alerts = evaluator.run_pass().await.unwrap();
        assert!(alerts.is_empty());

        let items = WishlistStore::new(dir.path().join("wishlist.json")).items();
        assert!(items[0].last_checked.is_some());
        assert_eq!(items[0].lowest_price_seen, Some(16.0));
    }

    #[tokio::test]
    async fn test_lowest_price_seen_is_monotone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishlist.json");
        WishlistStore::new(&path).add("208", "Portal 2", Some(1.0)).unwrap();

        // Observed price sequence [30, 45, 20] -> final lowest seen 20
        for price in [30.0, 45.0, 20.0] {
            let store = WishlistStore::new(&path);
            let source = FixedOffers::new().with_offers("208", &[price]);
            let evaluator = PriceAlertEvaluator::with_clock(store, source, fixed_clock());
            evaluator.run_pass().await.unwrap();
        }

        let items = WishlistStore::new(&path).items();
        assert_eq!(items[0].lowest_price_seen, Some(20.0));
    }

    #[tokio::test]
    async fn test_untargeted_items_left_untouched() {
        let dir = tempdir().unwrap();
        let store = store_with_item(&dir, "208", None);
        let source = FixedOffers::new().with_offers("208", &[1.0]);

        let evaluator = PriceAlertEvaluator::with_clock(store, source, fixed_clock());
        let alerts = evaluator.run_pass().await.unwrap();
        assert!(alerts.is_empty());

        let items = WishlistStore::new(dir.path().join("wishlist.json")).items();
        assert_eq!(items[0].last_checked, None);
        assert_eq!(items[0].lowest_price_seen, None);
    }

    #[tokio::test]
    async fn test_per_item_failure_does_not_abort_pass() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishlist.json");
        let store = WishlistStore::new(&path);
        store.add("bad", "Broken Game", Some(10.0)).unwrap();
        store.add("good", "Working Game", Some(10.0)).unwrap();

        let source = FixedOffers::new()
            .with_failure("bad")
            .with_offers("good", &[9.0]);

        let evaluator = PriceAlertEvaluator::with_clock(store, source, fixed_clock());
        let alerts = evaluator.run_pass().await.unwrap();

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].game_id, "good");

        // Failed item untouched, succeeding item updated
        let items = WishlistStore::new(&path).items();
        assert_eq!(items[0].last_checked, None);
        assert!(items[1].last_checked.is_some());
    }

    #[tokio::test]
    async fn test_empty_offer_set_skipped_silently() {
        let dir = tempdir().unwrap();
        let store = store_with_item(&dir, "208", Some(15.0));
        let source = FixedOffers::new(); // no offers for any game

        let evaluator = PriceAlertEvaluator::with_clock(store, source, fixed_clock());
        let alerts = evaluator.run_pass().await.unwrap();
        assert!(alerts.is_empty());

        let items = WishlistStore::new(dir.path().join("wishlist.json")).items();
        assert_eq!(items[0].last_checked, None);
    }
}
