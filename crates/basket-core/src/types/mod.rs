//! Core data types: interned items, itemsets, transactions.

mod interner;
mod itemset;
mod transactions;

pub use interner::{ItemId, ItemInterner};
pub use itemset::Itemset;
pub use transactions::{Transaction, TransactionStore};
