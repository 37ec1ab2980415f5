//! Seller directory: storeID → display name

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Id-to-name mapping for catalog storefronts.
///
/// Rebuilt on demand from the `/stores` endpoint; lookups on unknown ids
/// synthesize a placeholder name rather than failing.
#[derive(Debug, Clone, Default)]
pub struct SellerDirectory {
    names: HashMap<String, String>,
}

impl SellerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the directory from raw `/stores` records.
    ///
    /// Records without a usable `storeID` are skipped; a missing
    /// `storeName` still registers the id (it resolves via the placeholder
    /// path at lookup time otherwise).
    pub fn from_raw(raw: &[Map<String, Value>]) -> Self {
        let mut names = HashMap::new();

        for store in raw {
            let id = match store.get("storeID") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => continue,
            };
            let name = match store.get("storeName") {
                Some(Value::String(s)) => s.clone(),
                _ => format!("Store {}", id),
            };
            names.insert(id, name);
        }

        Self { names }
    }

    pub fn insert(&mut self, id: &str, name: &str) {
        self.names.insert(id.to_string(), name.to_string());
    }

    /// Resolve a seller name, falling back to `"Store {id}"`.
    pub fn name_for(&self, id: &str) -> String {
        self.names
            .get(id)
            .cloned()
            .unwrap_or_else(|| format!("Store {}", id))
    }

    /// Iterate over (id, name) pairs. Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
