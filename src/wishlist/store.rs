//! Durable wishlist document
//!
//! The whole wishlist is one pretty-printed JSON array rewritten on every
//! mutation: read the full document, mutate in memory, write the full
//! document back. A corrupt or missing file degrades to an empty wishlist
//! instead of failing — losing tracking state is recoverable, crashing the
//! alert pass is not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// One tracked game. Field names match the on-disk document exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub title: String,
    #[serde(rename = "targetPrice")]
    pub target_price: Option<f64>,
    #[serde(rename = "addedDate")]
    pub added_date: DateTime<Utc>,
    #[serde(rename = "lastChecked")]
    pub last_checked: Option<DateTime<Utc>>,
    #[serde(rename = "lowestPriceSeen")]
    pub lowest_price_seen: Option<f64>,
}

/// Outcome of an `add`: whether the item was inserted plus a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: bool,
    pub message: String,
}

/// Store owning the wishlist document at one path.
pub struct WishlistStore {
    path: PathBuf,
}

impl WishlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full ordered wishlist. Missing or corrupt document ⇒ empty.
    pub fn load(&self) -> Vec<WishlistItem> {
        if !self.path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Corrupt wishlist document at {}: {}", self.path.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                log::warn!("Unreadable wishlist document at {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Rewrite the full document.
    pub fn save(&self, items: &[WishlistItem]) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;

        log::debug!("Saved {} wishlist items to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Append a new tracked game unless its id is already present.
    ///
    /// A duplicate insert is a reported outcome, not an error and not an
    /// overwrite: the stored sequence is left untouched.
    pub fn add(
        &self,
        game_id: &str,
        title: &str,
        target_price: Option<f64>,
    ) -> Result<AddOutcome, Box<dyn Error>> {
        let mut items = self.load();

        if items.iter().any(|item| item.game_id == game_id) {
            return Ok(AddOutcome {
                added: false,
                message: format!("'{}' is already on the wishlist", title),
            });
        }

        items.push(WishlistItem {
            game_id: game_id.to_string(),
            title: title.to_string(),
            target_price,
            added_date: Utc::now(),
            last_checked: None,
            lowest_price_seen: None,
        });
        self.save(&items)?;

        Ok(AddOutcome {
            added: true,
            message: format!("'{}' added to the wishlist", title),
        })
    }

    /// Remove every item with the given id. Idempotent: removing an absent
    /// id succeeds with a count of zero. The document is always rewritten.
    pub fn remove(&self, game_id: &str) -> Result<usize, Box<dyn Error>> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| item.game_id != game_id);
        let removed = before - items.len();

        self.save(&items)?;
        Ok(removed)
    }

    /// Read-only snapshot of the persisted sequence.
    pub fn items(&self) -> Vec<WishlistItem> {
        self.load()
    }
}
