//! Candidate generation.

use rustc_hash::FxHashSet;

use crate::types::Itemset;

/// Propose size-`k` candidates from the frequent itemsets of size `k - 1`.
///
/// Naive pairwise join: every unordered pair of distinct input itemsets is
/// united once, unions of size other than `k` are discarded, and identical
/// unions from different pairs collapse to a single candidate (first-seen
/// order is kept). There is deliberately no "every (k-1)-subset must be
/// frequent" pre-prune; the counting pass that follows filters the same
/// itemsets either way, this join just proposes more of them.
///
/// For `k = 2` the input is the size-1 frequent collection and the output
/// is exactly the pairs of distinct frequent items.
pub fn generate_candidates(frequent: &[(Itemset, u64)], k: usize) -> Vec<Itemset> {
    let mut seen: FxHashSet<Itemset> = FxHashSet::default();
    let mut candidates = Vec::new();

    for (i, (left, _)) in frequent.iter().enumerate() {
        for (right, _) in &frequent[i + 1..] {
            let union = left.union(right);
            if union.len() == k && seen.insert(union.clone()) {
                candidates.push(union);
            }
        }
    }

    candidates
}
