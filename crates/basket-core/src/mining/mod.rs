//! Level-wise frequent-itemset mining (Apriori).
//!
//! The loop seeds size-1 itemsets from the raw transactions, then
//! alternates candidate generation and support counting level by level
//! until a level yields nothing frequent. Candidate generation for a
//! level always completes before counting for that level begins.

mod candidates;
mod miner;
mod support;
mod types;

pub use candidates::generate_candidates;
pub use miner::mine_frequent_itemsets;
pub use support::count_candidates;
pub use types::FrequentItemsets;
