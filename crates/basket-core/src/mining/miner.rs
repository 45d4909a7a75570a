//! The level-wise mining loop.

use tracing::debug;

use super::candidates::generate_candidates;
use super::support::count_candidates;
use super::types::FrequentItemsets;
use crate::errors::MineError;
use crate::types::{ItemId, Itemset, TransactionStore};

/// Mine every itemset whose support count reaches `min_support_count`.
///
/// Pure function of its inputs: the same store and threshold always yield
/// the same collection, in the same iteration order. The threshold is
/// compared against raw occurrence counts; callers wanting a support
/// fraction pre-multiply by the transaction count themselves.
///
/// A threshold of 0 is rejected (see [`MineError::ZeroSupportThreshold`]).
pub fn mine_frequent_itemsets(
    store: &TransactionStore,
    min_support_count: u64,
) -> Result<FrequentItemsets, MineError> {
    if min_support_count == 0 {
        return Err(MineError::ZeroSupportThreshold);
    }

    let mut collection = FrequentItemsets::new();
    let mut frontier = seed_singletons(store, min_support_count);
    debug!(frequent = frontier.len(), "seeded size-1 itemsets");
    for (itemset, support) in &frontier {
        collection.insert(itemset.clone(), *support);
    }

    // Size-2 expansion runs even on an empty seed; it then proposes no
    // candidates and the loop ends at k = 2.
    let mut k = 2;
    loop {
        let candidates = generate_candidates(&frontier, k);
        let candidate_count = candidates.len();
        let counts = count_candidates(store.transactions(), &candidates);

        let next: Vec<(Itemset, u64)> = candidates
            .into_iter()
            .zip(counts)
            .filter(|(_, support)| *support >= min_support_count)
            .collect();
        debug!(k, candidates = candidate_count, frequent = next.len(), "expanded level");

        if next.is_empty() {
            break;
        }
        for (itemset, support) in &next {
            collection.insert(itemset.clone(), *support);
        }
        frontier = next;
        k += 1;
    }

    Ok(collection)
}

/// Count every singleton and keep those meeting the threshold, in item-id
/// (first-occurrence) order.
fn seed_singletons(store: &TransactionStore, min_support_count: u64) -> Vec<(Itemset, u64)> {
    let mut counts = vec![0u64; store.item_count()];
    for transaction in store.transactions() {
        for id in transaction {
            counts[id.index() as usize] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count >= min_support_count)
        .map(|(index, count)| (Itemset::singleton(ItemId::from_index(index as u32)), count))
        .collect()
}
