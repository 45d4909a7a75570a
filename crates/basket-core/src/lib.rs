//! basket-core: Frequent-itemset and association-rule mining engine
//!
//! This crate provides the computational core for Basket:
//! - Types: interned item identifiers, itemsets, transaction store
//! - Mining: level-wise Apriori loop (candidate generation + support counting)
//! - Rules: confidence-filtered association-rule derivation
//!
//! Both entry points are pure functions of their inputs: mining the same
//! store at the same threshold twice yields value-equal results, and rule
//! generation never touches the transactions (support counts travel inside
//! [`FrequentItemsets`]).

pub mod errors;
pub mod mining;
pub mod rules;
pub mod types;

// Re-exports for convenience
pub use errors::{MineError, RuleError};
pub use mining::{mine_frequent_itemsets, FrequentItemsets};
pub use rules::{generate_rules, AssociationRule};
pub use types::{ItemId, ItemInterner, Itemset, Transaction, TransactionStore};
