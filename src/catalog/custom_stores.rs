//! Storefronts outside the catalog API
//!
//! A handful of popular stores are not indexed by CheapShark. This static
//! directory lets the runtimes point users at them anyway, with a best-effort
//! search URL when the store exposes one.

/// One storefront entry, indexed or not.
#[derive(Debug, Clone, Copy)]
pub struct CustomStore {
    pub name: &'static str,
    pub website: &'static str,
    pub search_url: &'static str,
    /// Whether the catalog API already covers this store
    pub supported: bool,
}

const CUSTOM_STORES: &[CustomStore] = &[
    CustomStore {
        name: "Epic Games Store",
        website: "https://store.epicgames.com/",
        search_url: "https://store.epicgames.com/en-US/browse",
        supported: false,
    },
    CustomStore {
        name: "Humble Store",
        website: "https://www.humblebundle.com/store",
        search_url: "https://www.humblebundle.com/store/search",
        supported: true,
    },
    CustomStore {
        name: "Microsoft Store",
        website: "https://www.microsoft.com/store/games",
        search_url: "https://www.microsoft.com/store/search/games",
        supported: false,
    },
    CustomStore {
        name: "Battle.net",
        website: "https://www.battle.net/",
        search_url: "https://www.battle.net/shop",
        supported: false,
    },
    CustomStore {
        name: "Itch.io",
        website: "https://itch.io/",
        search_url: "https://itch.io/games",
        supported: false,
    },
    CustomStore {
        name: "Fanatical",
        website: "https://www.fanatical.com/",
        search_url: "https://www.fanatical.com/en/search",
        supported: true,
    },
    CustomStore {
        name: "CDKeys",
        website: "https://www.cdkeys.com/",
        search_url: "https://www.cdkeys.com/search",
        supported: false,
    },
    CustomStore {
        name: "IndieGala",
        website: "https://www.indiegala.com/store",
        search_url: "https://www.indiegala.com/store/search",
        supported: true,
    },
];

/// All known custom storefronts, indexed or not.
pub fn all_stores() -> &'static [CustomStore] {
    CUSTOM_STORES
}

/// Storefronts the catalog API does not cover.
pub fn unsupported_stores() -> impl Iterator<Item = &'static CustomStore> {
    CUSTOM_STORES.iter().filter(|s| !s.supported)
}

/// Look up a storefront by display name.
pub fn store_info(name: &str) -> Option<&'static CustomStore> {
    CUSTOM_STORES.iter().find(|s| s.name == name)
}

/// Build a search URL for a store, appending the title as a query when the
/// store exposes a search endpoint. Unknown store ⇒ `None`.
pub fn search_url_for_store(name: &str, title: &str) -> Option<String> {
    let store = store_info(name)?;

    if title.is_empty() || !store.search_url.to_lowercase().contains("search") {
        return Some(store.search_url.to_string());
    }

    let query = title.replace(' ', "+");
    let sep = if store.search_url.contains('?') { '&' } else { '?' };
    Some(format!("{}{}q={}", store.search_url, sep, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_excludes_indexed_stores() {
        assert!(unsupported_stores().all(|s| !s.supported));
        assert!(unsupported_stores().any(|s| s.name == "Epic Games Store"));
        assert!(!unsupported_stores().any(|s| s.name == "Fanatical"));
    }

    #[test]
    fn test_search_url_builder() {
        let url = search_url_for_store("CDKeys", "Hollow Knight").unwrap();
        assert_eq!(url, "https://www.cdkeys.com/search?q=Hollow+Knight");

        // No search endpoint -> base URL unchanged
        let url = search_url_for_store("Battle.net", "Overwatch").unwrap();
        assert_eq!(url, "https://www.battle.net/shop");

        assert!(search_url_for_store("Nonexistent Shop", "x").is_none());
    }
}
