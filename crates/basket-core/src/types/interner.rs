//! Item interning.
//!
//! Item tokens are stored once; everything downstream works with 4-byte
//! [`ItemId`] handles, so itemset comparison and hashing never touch
//! string data.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Interned item identifier.
///
/// Ids are assigned in first-occurrence order, so for a given input the
/// mapping is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ItemId(u32);

impl ItemId {
    pub(crate) fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Maps item tokens to [`ItemId`]s and back.
///
/// Lookups are O(1), insertions amortized O(1).
#[derive(Debug, Default)]
pub struct ItemInterner {
    map: FxHashMap<String, ItemId>,
    items: Vec<String>,
}

impl ItemInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a token, returning its id.
    ///
    /// If the token is already interned, returns the existing id.
    pub fn intern(&mut self, token: &str) -> ItemId {
        if let Some(&id) = self.map.get(token) {
            return id;
        }
        let id = ItemId(self.items.len() as u32);
        self.items.push(token.to_string());
        self.map.insert(token.to_string(), id);
        id
    }

    /// Get the id for a token if it exists.
    pub fn get(&self, token: &str) -> Option<ItemId> {
        self.map.get(token).copied()
    }

    /// Get the token for an id.
    ///
    /// Returns `None` if the id was not produced by this interner.
    pub fn resolve(&self, id: ItemId) -> Option<&str> {
        self.items.get(id.0 as usize).map(|s| s.as_str())
    }

    /// Number of distinct items seen.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
