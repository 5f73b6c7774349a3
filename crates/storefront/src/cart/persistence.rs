//! Persistence port for cart state.
//!
//! The cart is durably stored as a single JSON slot holding the serialized
//! entry list, overwritten wholesale on every mutation. The port keeps the
//! mutation logic in [`super::CartStore`] testable without any real durable
//! medium.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::CartEntry;

/// Cart persistence errors
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Corrupt cart state: {0}")]
    Corrupt(String),
}

/// A durable key-value slot holding the serialized cart entry list.
pub trait CartRepository: Send + Sync {
    /// Read the persisted entry list.
    ///
    /// An absent slot is an empty cart, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or decoded.
    fn load(&self) -> Result<Vec<CartEntry>, PersistError>;

    /// Overwrite the slot with the given entry list.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be encoded or written.
    fn save(&self, entries: &[CartEntry]) -> Result<(), PersistError>;
}

/// File-backed repository: one JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the given file path.
    ///
    /// The file is created on first save; a missing file reads as empty.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<CartEntry>, PersistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = std::fs::read(&self.path).map_err(|e| PersistError::Io(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| PersistError::Corrupt(e.to_string()))
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), PersistError> {
        let bytes =
            serde_json::to_vec(entries).map_err(|e| PersistError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PersistError::Io(e.to_string()))?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| PersistError::Io(e.to_string()))
    }
}

/// In-memory repository for tests and ephemeral carts.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: Mutex<Vec<CartEntry>>,
}

impl InMemoryRepository {
    /// Create an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with entries.
    #[must_use]
    pub fn with_entries(entries: Vec<CartEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl CartRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<CartEntry>, PersistError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, entries: &[CartEntry]) -> Result<(), PersistError> {
        *self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use pixel_core::{Price, ProductId};
    use rust_decimal::dec;

    fn entry(id: i32, quantity: u32) -> CartEntry {
        CartEntry {
            product: Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                price: Price::new(dec!(10)),
                category: "Test".to_string(),
                image: String::new(),
            },
            quantity,
        }
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(dir.path().join("cart.json"));
        let entries = repo.load().expect("load");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(dir.path().join("cart.json"));

        let entries = vec![entry(1, 2), entry(2, 1)];
        repo.save(&entries).expect("save");

        let loaded = repo.load().expect("load");
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileRepository::new(dir.path().join("state/nested/cart.json"));
        repo.save(&[entry(1, 1)]).expect("save");
        assert_eq!(repo.load().expect("load").len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        std::fs::write(&path, b"not json at all").expect("write");

        let repo = JsonFileRepository::new(path);
        assert!(matches!(repo.load(), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn test_in_memory_roundtrip() {
        let repo = InMemoryRepository::new();
        repo.save(&[entry(5, 3)]).expect("save");
        let loaded = repo.load().expect("load");
        assert_eq!(loaded, vec![entry(5, 3)]);
    }
}
