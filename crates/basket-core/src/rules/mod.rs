//! Association-rule derivation from mined frequent itemsets.

mod generator;
mod types;

pub use generator::generate_rules;
pub use types::AssociationRule;
