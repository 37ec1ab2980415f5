//! Deal Report - one-shot analysis over the current deal catalog
//!
//! Fetches the live deal listing, normalizes it, logs summary statistics,
//! top savings, and per-seller rollups, then exports the dataset to CSV
//! and JSON.
//!
//! Usage:
//!   cargo run --release --bin deal_report
//!
//! Environment variables:
//!   DEALFLOW_API_URL - catalog API root (default: public CheapShark API)
//!   DEALFLOW_EXPORT_DIR - export base directory (default: exports)
//!   DEALFLOW_TOP_LIMIT - top-savings rows to print (default: 5)
//!   DEALFLOW_HTTP_TIMEOUT_SECS - request timeout (default: 10)

use dealflow::analytics::{average_saving, statistics, store_analysis, top_savings};
use dealflow::catalog::{normalize_deals, CatalogClient, SellerDirectory};
use dealflow::export::Exporter;
use dealflow::DealflowConfig;
use dotenv::dotenv;
use log::{info, warn};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let config = DealflowConfig::from_env();

    info!("🚀 Deal Report");
    info!("   ├─ API: {}", config.api_url);
    info!("   ├─ Export dir: {}", config.export_dir);
    info!("   └─ Top limit: {}", config.top_limit);

    let client = CatalogClient::new(&config.api_url, Duration::from_secs(config.http_timeout_secs))?;

    info!("📡 Fetching current deals...");
    let raw_deals = client.list_deals(None, None).await?;
    let deals = normalize_deals(&raw_deals);
    info!("✅ {} deals fetched", deals.len());

    let Some(stats) = statistics(&deals) else {
        warn!("❌ No deal data available, nothing to report");
        return Ok(());
    };

    info!("📊 Statistics:");
    info!("   ├─ Total deals: {}", stats.total_deals);
    info!("   ├─ Avg saving: {:.2}%", stats.avg_saving);
    info!("   ├─ Max saving: {:.2}%", stats.max_saving);
    info!("   ├─ Price range: ${:.2} - ${:.2} (avg ${:.2})", stats.min_price, stats.max_price, stats.avg_price);
    info!("   ├─ Deals ≥50% off: {}", stats.deals_over_50);
    info!("   ├─ Deals ≥75% off: {}", stats.deals_over_75);
    info!("   └─ Deals ≥90% off: {}", stats.deals_over_90);

    info!("🏆 Top {} savings (overall avg {:.2}%):", config.top_limit, average_saving(&deals));
    for (rank, deal) in top_savings(&deals, config.top_limit).iter().enumerate() {
        let price = deal.sale_price.map(|p| format!("${:.2}", p)).unwrap_or_else(|| "n/a".to_string());
        let saving = deal.savings.map(|s| format!("{:.2}%", s)).unwrap_or_else(|| "n/a".to_string());
        info!("   {}. {} - {} ({} off)", rank + 1, deal.title, price, saving);
    }

    info!("📡 Fetching seller directory...");
    let directory = match client.list_stores().await {
        Ok(raw) => SellerDirectory::from_raw(&raw),
        Err(e) => {
            warn!("⚠️  Seller directory unavailable ({}), skipping store rollups", e);
            SellerDirectory::new()
        }
    };

    let mut rollups = store_analysis(&deals, &directory);
    rollups.sort_by(|a, b| b.num_deals.cmp(&a.num_deals));
    if !rollups.is_empty() {
        info!("🏪 Per-store rollups:");
        for row in &rollups {
            info!(
                "   ├─ {}: {} deals, avg {:.2}% off, avg ${:.2}",
                row.store_name, row.num_deals, row.avg_savings, row.avg_price
            );
        }
    }

    let exporter = Exporter::new(&config.export_dir);
    exporter.export_deals_csv(&deals, "deals")?;
    exporter.export_json(&deals, "deals")?;
    exporter.export_store_stats_csv(&rollups, "stores")?;

    info!("✅ Report complete");
    Ok(())
}
