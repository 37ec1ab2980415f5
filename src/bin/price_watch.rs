//! Price Watch - on-demand alert pass over the wishlist
//!
//! Loads the wishlist document, re-checks current offers for every item
//! with a target price, and logs an alert for each game whose cheapest
//! offer is at or below its target. The wishlist (lastChecked /
//! lowestPriceSeen) is persisted once at the end of the pass.
//!
//! Usage:
//!   cargo run --release --bin price_watch
//!
//! Environment variables:
//!   DEALFLOW_API_URL - catalog API root (default: public CheapShark API)
//!   DEALFLOW_WISHLIST_PATH - wishlist document (default: wishlist.json)
//!   DEALFLOW_HTTP_TIMEOUT_SECS - request timeout (default: 10)

use dealflow::catalog::CatalogClient;
use dealflow::wishlist::{PriceAlertEvaluator, WishlistStore};
use dealflow::DealflowConfig;
use dotenv::dotenv;
use log::info;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config = DealflowConfig::from_env();

    info!("🚀 Price Watch");
    info!("   ├─ API: {}", config.api_url);
    info!("   └─ Wishlist: {}", config.wishlist_path);

    let client = CatalogClient::new(&config.api_url, Duration::from_secs(config.http_timeout_secs))?;
    let store = WishlistStore::new(&config.wishlist_path);

    let tracked = store.items();
    let targeted = tracked.iter().filter(|i| i.target_price.is_some()).count();
    info!("📋 {} wishlist item(s), {} with a target price", tracked.len(), targeted);

    let evaluator = PriceAlertEvaluator::new(store, client);
    let alerts = evaluator.run_pass().await?;

    if alerts.is_empty() {
        info!("✅ No price targets hit");
        return Ok(());
    }

    info!("🔔 {} alert(s):", alerts.len());
    for alert in &alerts {
        info!(
            "   ├─ {} at ${:.2} (target ${:.2}, store {}, deal {})",
            alert.title, alert.current_price, alert.target_price, alert.store_id, alert.deal_id
        );
    }

    Ok(())
}
