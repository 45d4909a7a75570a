//! Frequent-itemset collection.

use rustc_hash::FxHashMap;

use crate::types::Itemset;

/// Every frequent itemset found in one mining run, across all sizes,
/// together with its support count.
///
/// Entries are never removed once added. Iteration follows insertion
/// order: ascending itemset size, singletons in item-id order, larger
/// sizes in first-seen candidate order. This order is deterministic for
/// a given input and is what rule generation iterates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    entries: Vec<(Itemset, u64)>,
    index: FxHashMap<Itemset, usize>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an itemset with its support count.
    ///
    /// Re-inserting an itemset overwrites its count in place.
    pub fn insert(&mut self, itemset: Itemset, support: u64) {
        match self.index.get(&itemset) {
            Some(&slot) => self.entries[slot].1 = support,
            None => {
                self.index.insert(itemset.clone(), self.entries.len());
                self.entries.push((itemset, support));
            }
        }
    }

    /// Support count of an itemset, if it is frequent.
    pub fn support(&self, itemset: &Itemset) -> Option<u64> {
        self.index.get(itemset).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.index.contains_key(itemset)
    }

    /// Itemsets with their support counts, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u64)> {
        self.entries.iter().map(|(itemset, support)| (itemset, *support))
    }

    /// Size of the largest frequent itemset, 0 when empty.
    pub fn max_size(&self) -> usize {
        self.entries.iter().map(|(itemset, _)| itemset.len()).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
