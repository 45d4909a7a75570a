//! Support counting.

use rayon::prelude::*;

use crate::types::{Itemset, Transaction};

/// Count how many transactions contain each candidate as a subset.
///
/// Returns one count per candidate, positionally aligned with the input
/// slice; a candidate contained in no transaction gets an explicit 0.
///
/// This is an exhaustive scan with no indexing or pruning:
/// O(|transactions| x |candidates| x itemset size). Callers control the
/// candidate volume. Counting is a pure sum reduction, so the scan is
/// sharded across transactions and merged by addition.
pub fn count_candidates(transactions: &[Transaction], candidates: &[Itemset]) -> Vec<u64> {
    if candidates.is_empty() {
        return Vec::new();
    }

    transactions
        .par_iter()
        .fold(
            || vec![0u64; candidates.len()],
            |mut counts, transaction| {
                for (slot, candidate) in counts.iter_mut().zip(candidates) {
                    if candidate.is_contained_in(transaction) {
                        *slot += 1;
                    }
                }
                counts
            },
        )
        .reduce(
            || vec![0u64; candidates.len()],
            |mut left, right| {
                for (slot, partial) in left.iter_mut().zip(right) {
                    *slot += partial;
                }
                left
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionStore;

    fn store() -> TransactionStore {
        let mut store = TransactionStore::new();
        store.push_transaction(["a", "b"]);
        store.push_transaction(["a", "b", "c"]);
        store.push_transaction(["a"]);
        store.push_transaction(["b", "c"]);
        store
    }

    fn set(store: &TransactionStore, tokens: &[&str]) -> Itemset {
        Itemset::new(tokens.iter().map(|t| store.interner().get(t).unwrap()))
    }

    #[test]
    fn test_counts_align_with_candidates() {
        let store = store();
        let candidates = vec![
            set(&store, &["a", "b"]),
            set(&store, &["b", "c"]),
            set(&store, &["a", "b", "c"]),
        ];

        let counts = count_candidates(store.transactions(), &candidates);
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_zero_count_preserved() {
        let mut store = store();
        store.push_transaction(["d"]);
        let candidates = vec![set(&store, &["a", "d"])];

        let counts = count_candidates(store.transactions(), &candidates);
        assert_eq!(counts, vec![0]);
    }

    #[test]
    fn test_no_candidates() {
        let store = store();
        assert!(count_candidates(store.transactions(), &[]).is_empty());
    }

    #[test]
    fn test_empty_store() {
        let mut empty = TransactionStore::new();
        empty.push_transaction(["a"]); // mints the id; the scan below sees no transactions
        let a = set(&empty, &["a"]);

        let counts = count_candidates(&[], &[a]);
        assert_eq!(counts, vec![0]);
    }
}
