//! Product catalog loaded from a static JSON resource.
//!
//! The catalog file is a flat JSON array of product records, read once at
//! startup. Products are immutable afterwards and every query is a linear
//! scan in stable load order; the catalog is small enough that no index is
//! warranted.

use std::path::Path;
use std::sync::Arc;

use pixel_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A purchasable product as shipped in the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    /// Path or URL of the product image, passed through to clients untouched.
    pub image: String,
}

/// Catalog store that holds the full product list in memory.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// product records. The composition root decides what to do with a
    /// failure; the store itself never retries.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?;
        let store = Self::from_json_slice(&bytes)?;
        tracing::info!("Loaded {} products from {:?}", store.all().len(), path);
        Ok(store)
    }

    /// Parse a catalog from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the bytes are not a JSON array of
    /// product records.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::from_products(products))
    }

    /// Build a catalog from an in-memory product list.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// An empty catalog, used when loading fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the full product list in load order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by id.
    ///
    /// Ids are assumed unique in the source data; if they are not, the first
    /// match wins.
    #[must_use]
    pub fn by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get all products whose name contains `fragment`, case-insensitively.
    ///
    /// An empty fragment matches everything. Results preserve catalog order.
    #[must_use]
    pub fn by_name_contains(&self, fragment: &str) -> Vec<&Product> {
        let needle = fragment.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Get all products in `category` (exact, case-sensitive match).
    ///
    /// Results preserve catalog order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
