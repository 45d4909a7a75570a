//! Immutable itemsets used as support-map keys.

use serde::Serialize;
use smallvec::SmallVec;

use super::interner::ItemId;
use super::transactions::Transaction;

/// An immutable set of items, size >= 1 in practice.
///
/// Stored as a sorted, deduplicated small-vector, so equality and hashing
/// are order-independent and cheap, and the common small sizes stay off
/// the heap. Two itemsets are equal iff their element sets are equal,
/// regardless of construction order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Itemset {
    items: SmallVec<[ItemId; 4]>,
}

impl Itemset {
    /// Build an itemset from arbitrary items; duplicates collapse.
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: SmallVec<[ItemId; 4]> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Single-item itemset.
    pub fn singleton(item: ItemId) -> Self {
        Self {
            items: SmallVec::from_slice(&[item]),
        }
    }

    /// Build from a slice already sorted and deduplicated.
    pub(crate) fn from_sorted(items: &[ItemId]) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self {
            items: SmallVec::from_slice(items),
        }
    }

    /// Set union via sorted merge.
    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut merged: SmallVec<[ItemId; 4]> =
            SmallVec::with_capacity(self.items.len() + other.items.len());
        let (mut i, mut j) = (0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(self.items[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(other.items[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    merged.push(self.items[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&self.items[i..]);
        merged.extend_from_slice(&other.items[j..]);
        Itemset { items: merged }
    }

    /// Items of `self` not in `other`.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        let items: SmallVec<[ItemId; 4]> = self
            .items
            .iter()
            .copied()
            .filter(|id| !other.contains(*id))
            .collect();
        Itemset { items }
    }

    /// True if every item of this set occurs in the transaction.
    pub fn is_contained_in(&self, transaction: &Transaction) -> bool {
        self.items.iter().all(|id| transaction.contains(id))
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Items in ascending id order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn abc() -> (ItemId, ItemId, ItemId) {
        let mut interner = crate::types::ItemInterner::new();
        (
            interner.intern("a"),
            interner.intern("b"),
            interner.intern("c"),
        )
    }

    #[test]
    fn test_order_independent_equality() {
        let (a, b, c) = abc();
        let x = Itemset::new([c, a, b]);
        let y = Itemset::new([a, b, c]);
        assert_eq!(x, y);
        assert_eq!(x.items(), &[a, b, c]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let (a, _, _) = abc();
        let x = Itemset::new([a, a, a]);
        assert_eq!(x.len(), 1);
    }

    #[test]
    fn test_union_and_difference() {
        let (a, b, c) = abc();
        let ab = Itemset::new([a, b]);
        let bc = Itemset::new([b, c]);

        let abc = ab.union(&bc);
        assert_eq!(abc, Itemset::new([a, b, c]));

        let only_a = abc.difference(&bc);
        assert_eq!(only_a, Itemset::singleton(a));
    }

    #[test]
    fn test_subset_of_transaction() {
        let (a, b, c) = abc();
        let txn: Transaction = [a, b].into_iter().collect::<FxHashSet<_>>();

        assert!(Itemset::new([a, b]).is_contained_in(&txn));
        assert!(Itemset::singleton(a).is_contained_in(&txn));
        assert!(!Itemset::new([a, c]).is_contained_in(&txn));
    }
}
