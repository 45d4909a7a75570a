//! Transaction storage.

use rustc_hash::FxHashSet;

use super::interner::{ItemId, ItemInterner};

/// A single transaction: the set of items bought together.
///
/// Duplicate tokens within one input line collapse here; order never
/// mattered to begin with.
pub type Transaction = FxHashSet<ItemId>;

/// An ordered sequence of transactions plus the interner that minted
/// their item ids.
///
/// Built once by the loader, read-only during mining.
#[derive(Debug, Default)]
pub struct TransactionStore {
    interner: ItemInterner,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transaction, interning its item tokens.
    ///
    /// An empty token list still records an (empty) transaction so the
    /// store's length matches the input line count.
    pub fn push_transaction<S: AsRef<str>>(&mut self, items: impl IntoIterator<Item = S>) {
        let transaction: Transaction = items
            .into_iter()
            .map(|token| self.interner.intern(token.as_ref()))
            .collect();
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn interner(&self) -> &ItemInterner {
        &self.interner
    }

    /// Number of distinct items across all transactions.
    pub fn item_count(&self) -> usize {
        self.interner.len()
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
