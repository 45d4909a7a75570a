//! Mining and rule-generation errors.

use crate::types::Itemset;

/// Errors that can occur when mining frequent itemsets.
#[derive(Debug, thiserror::Error)]
pub enum MineError {
    /// A minimum support count of 0 is rejected at the boundary: it would
    /// admit itemsets that occur in no transaction, and any such itemset
    /// used as a rule antecedent later divides by zero.
    #[error("minimum support count must be at least 1 (0 admits zero-support itemsets)")]
    ZeroSupportThreshold,
}

/// Errors that can occur when deriving association rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Minimum confidence outside [0, 1] (NaN included).
    #[error("minimum confidence must be within [0, 1], got {0}")]
    InvalidConfidence(f64),

    /// An antecedent subset of a frequent itemset has no recorded support.
    ///
    /// Cannot happen for collections produced by the miner (support is
    /// monotone under subsets), only for hand-built collections that skip
    /// size levels.
    #[error("no support recorded for antecedent {antecedent:?} of frequent itemset {itemset:?}")]
    MissingAntecedentSupport {
        antecedent: Itemset,
        itemset: Itemset,
    },
}
