//! Transaction-log loading.

use std::fs;
use std::io;
use std::path::Path;

use basket_core::TransactionStore;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
}

/// Load a transaction log: one transaction per line, item tokens separated
/// by whitespace.
///
/// Bytes are decoded as ISO-8859-1 (every byte maps to the code point of
/// the same value), so non-UTF8 item tokens load instead of erroring.
/// Blank lines are kept as empty transactions; they contribute to the
/// transaction count and nothing else.
pub fn load_transactions(path: &Path) -> Result<TransactionStore, LoadError> {
    let bytes = fs::read(path)?;
    let text: String = bytes.iter().map(|&b| b as char).collect();

    let mut store = TransactionStore::new();
    for line in text.lines() {
        store.push_transaction(line.split_whitespace());
    }

    debug!(
        transactions = store.len(),
        items = store.item_count(),
        "dataset loaded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_basic_lines() {
        let file = write_dataset(b"milk bread\nbread eggs milk\n");
        let store = load_transactions(file.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_non_utf8_tokens_load() {
        // 0xE9 is 'é' in ISO-8859-1 but invalid UTF-8 on its own
        let file = write_dataset(b"caf\xe9 milk\ncaf\xe9\n");
        let store = load_transactions(file.path()).unwrap();

        assert_eq!(store.len(), 2);
        let cafe = store.interner().get("caf\u{e9}").unwrap();
        assert!(store.transactions()[1].contains(&cafe));
    }

    #[test]
    fn test_blank_line_is_empty_transaction() {
        let file = write_dataset(b"a b\n\nc\n");
        let store = load_transactions(file.path()).unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.transactions()[1].is_empty());
    }

    #[test]
    fn test_duplicate_tokens_collapse() {
        let file = write_dataset(b"a a a b\n");
        let store = load_transactions(file.path()).unwrap();

        assert_eq!(store.transactions()[0].len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_transactions(Path::new("/nonexistent/basket.dat")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
