//! Conjunctive filtering over normalized deal datasets
//!
//! Each supplied constraint is an independent predicate; leaving a bound
//! unset skips it entirely rather than treating it as zero or a wildcard.
//! A row whose relevant field is null never satisfies a specified bound
//! (mirroring how a missing source column filters nothing when the bound
//! is unset, but cannot match when it is).

use crate::catalog::DealRecord;

/// Seller constraint: a single id or set membership.
#[derive(Debug, Clone)]
pub enum StoreSelector {
    One(String),
    Many(Vec<String>),
}

impl StoreSelector {
    fn matches(&self, store_id: &str) -> bool {
        match self {
            StoreSelector::One(id) => id == store_id,
            StoreSelector::Many(ids) => ids.iter().any(|id| id == store_id),
        }
    }
}

/// Filter over `salePrice`, `savings`, and `storeID`. All fields optional;
/// the default filter passes everything through.
#[derive(Debug, Clone, Default)]
pub struct DealFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_savings: Option<f64>,
    pub stores: Option<StoreSelector>,
}

impl DealFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn accepts(&self, deal: &DealRecord) -> bool {
        if let Some(min) = self.min_price {
            if !deal.sale_price.is_some_and(|p| p >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !deal.sale_price.is_some_and(|p| p <= max) {
                return false;
            }
        }
        if let Some(min) = self.min_savings {
            if !deal.savings.is_some_and(|s| s >= min) {
                return false;
            }
        }
        if let Some(selector) = &self.stores {
            if !selector.matches(&deal.store_id) {
                return false;
            }
        }
        true
    }
}

/// Apply the filter as a pure conjunction, preserving the relative order of
/// surviving rows. Empty input ⇒ empty output.
pub fn filter_deals(deals: &[DealRecord], filter: &DealFilter) -> Vec<DealRecord> {
    deals
        .iter()
        .filter(|deal| filter.accepts(deal))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_deal(title: &str, sale_price: Option<f64>, savings: Option<f64>, store_id: &str) -> DealRecord {
        DealRecord {
            title: title.to_string(),
            sale_price,
            normal_price: None,
            savings,
            steam_rating: "N/A".to_string(),
            store_id: store_id.to_string(),
            game_id: title.to_string(),
            thumbnail_url: String::new(),
        }
    }

    fn sample() -> Vec<DealRecord> {
        vec![
            make_deal("cheap", Some(4.0), Some(80.0), "1"),
            make_deal("mid", Some(15.0), Some(50.0), "2"),
            make_deal("pricey", Some(40.0), Some(10.0), "1"),
            make_deal("nulls", None, None, "3"),
        ]
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let deals = sample();
        let out = filter_deals(&deals, &DealFilter::new());
        assert_eq!(out.len(), deals.len());
    }

    #[test]
    fn test_price_bounds() {
        let deals = sample();
        let filter = DealFilter {
            min_price: Some(5.0),
            max_price: Some(20.0),
            ..Default::default()
        };

        let out = filter_deals(&deals, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "mid");
    }

    #[test]
    fn test_null_fields_never_match_specified_bounds() {
        let deals = sample();
        let filter = DealFilter {
            min_savings: Some(0.0),
            ..Default::default()
        };

        // "nulls" has no savings value, so even a 0.0 bound excludes it
        let out = filter_deals(&deals, &filter);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|d| d.title != "nulls"));
    }

    #[test]
    fn test_store_selector_one_and_many() {
        let deals = sample();

        let one = DealFilter {
            stores: Some(StoreSelector::One("1".to_string())),
            ..Default::default()
        };
        assert_eq!(filter_deals(&deals, &one).len(), 2);

        let many = DealFilter {
            stores: Some(StoreSelector::Many(vec!["2".to_string(), "3".to_string()])),
            ..Default::default()
        };
        let out = filter_deals(&deals, &many);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "mid");
        assert_eq!(out[1].title, "nulls");
    }

    #[test]
    fn test_sequential_equals_simultaneous() {
        // Conjunction property: two disjoint filters applied one after the
        // other match applying both at once
        let deals = sample();

        let price_only = DealFilter {
            max_price: Some(20.0),
            ..Default::default()
        };
        let savings_only = DealFilter {
            min_savings: Some(60.0),
            ..Default::default()
        };
        let both = DealFilter {
            max_price: Some(20.0),
            min_savings: Some(60.0),
            ..Default::default()
        };

        let sequential = filter_deals(&filter_deals(&deals, &price_only), &savings_only);
        let simultaneous = filter_deals(&deals, &both);

        let seq_titles: Vec<_> = sequential.iter().map(|d| d.title.clone()).collect();
        let sim_titles: Vec<_> = simultaneous.iter().map(|d| d.title.clone()).collect();
        assert_eq!(seq_titles, sim_titles);
        assert_eq!(seq_titles, vec!["cheap"]);
    }

    #[test]
    fn test_empty_input() {
        let filter = DealFilter {
            min_price: Some(1.0),
            ..Default::default()
        };
        assert!(filter_deals(&[], &filter).is_empty());
    }
}
