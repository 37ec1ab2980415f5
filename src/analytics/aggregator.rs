//! Aggregate statistics and rankings over normalized deal datasets
//!
//! Every operation here accepts a possibly empty dataset and returns a
//! defined empty/zero result instead of erroring. Means and extrema only
//! consider non-null values; a column that is entirely null behaves like a
//! missing column (zero fallback).

use crate::catalog::{DealRecord, SellerDirectory};
use serde::Serialize;

/// Summary statistics over one deal dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DealStatistics {
    pub total_deals: usize,
    pub avg_saving: f64,
    pub max_saving: f64,
    pub deals_over_50: usize,
    pub deals_over_75: usize,
    pub deals_over_90: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
}

/// Per-seller rollup produced by `store_analysis`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    #[serde(rename = "storeID")]
    pub store_id: String,
    #[serde(rename = "storeName")]
    pub store_name: String,
    #[serde(rename = "numDeals")]
    pub num_deals: usize,
    #[serde(rename = "avgSavings")]
    pub avg_savings: f64,
    #[serde(rename = "avgPrice")]
    pub avg_price: f64,
    #[serde(rename = "minPrice")]
    pub min_price: f64,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
}

/// Mean over the non-null `savings` column; 0.0 when there is nothing to
/// average.
pub fn average_saving(deals: &[DealRecord]) -> f64 {
    mean(deals.iter().filter_map(|d| d.savings))
}

/// Up to `limit` records ordered by `savings` descending.
///
/// Rows with a null saving are dropped first, so the output length is
/// `min(limit, rows with non-null savings)`. The sort is stable: ties keep
/// their original relative order. `limit == 0` ⇒ empty.
pub fn top_savings(deals: &[DealRecord], limit: usize) -> Vec<DealRecord> {
    if limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&DealRecord> = deals.iter().filter(|d| d.savings.is_some()).collect();
    // Incomparable pairs (NaN) fall back to Equal, keeping original order
    ranked.sort_by(|a, b| {
        b.savings
            .partial_cmp(&a.savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked.into_iter().take(limit).cloned().collect()
}

/// Full summary over the dataset, or `None` when it is empty.
///
/// `None` is the distinguishable "no data" result; all-null columns inside
/// a non-empty dataset fall back to zeros field by field.
pub fn statistics(deals: &[DealRecord]) -> Option<DealStatistics> {
    if deals.is_empty() {
        return None;
    }

    let savings: Vec<f64> = deals.iter().filter_map(|d| d.savings).collect();
    let prices: Vec<f64> = deals.iter().filter_map(|d| d.sale_price).collect();

    Some(DealStatistics {
        total_deals: deals.len(),
        avg_saving: mean(savings.iter().copied()),
        max_saving: fold_max(&savings),
        deals_over_50: count_over(&savings, 50.0),
        deals_over_75: count_over(&savings, 75.0),
        deals_over_90: count_over(&savings, 90.0),
        min_price: fold_min(&prices),
        max_price: fold_max(&prices),
        avg_price: mean(prices.iter().copied()),
    })
}

/// Per-seller rollups: one row per directory seller with at least one
/// matching deal. Sellers with zero matches are skipped. Row order follows
/// directory iteration order (unspecified).
pub fn store_analysis(deals: &[DealRecord], directory: &SellerDirectory) -> Vec<StoreStats> {
    if deals.is_empty() {
        return Vec::new();
    }

    let mut rollups = Vec::new();

    for (store_id, store_name) in directory.iter() {
        let matches: Vec<&DealRecord> =
            deals.iter().filter(|d| &d.store_id == store_id).collect();

        if matches.is_empty() {
            continue;
        }

        let savings: Vec<f64> = matches.iter().filter_map(|d| d.savings).collect();
        let prices: Vec<f64> = matches.iter().filter_map(|d| d.sale_price).collect();

        rollups.push(StoreStats {
            store_id: store_id.clone(),
            store_name: store_name.clone(),
            num_deals: matches.len(),
            avg_savings: mean(savings.iter().copied()),
            avg_price: mean(prices.iter().copied()),
            min_price: fold_min(&prices),
            max_price: fold_max(&prices),
        });
    }

    rollups
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn fold_min(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

fn fold_max(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

fn count_over(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v >= threshold).count()
}
