//! Shopping cart store with derived totals and pluggable persistence.
//!
//! The cart holds at most one entry per product id, in insertion order.
//! Totals are recomputed from the entry list after every mutation rather than
//! adjusted incrementally, so they can never drift from the entries. Every
//! mutation writes the full entry list back through the injected
//! [`CartRepository`].

pub mod persistence;

pub use persistence::{CartRepository, InMemoryRepository, JsonFileRepository, PersistError};

use pixel_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One (product, quantity) pairing inside the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// A copy of the product at the time it was added.
    pub product: Product,
    /// Always at least 1; an entry that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartEntry {
    /// The total for this line at the product's unit price.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Derived cart totals, recomputed after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartTotals {
    pub total_price: Price,
    pub total_quantity: u32,
}

/// Cart mutation errors.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
    #[error("cart persistence error: {0}")]
    Persist(#[from] PersistError),
}

/// The cart store.
///
/// Assumes a single logical mutator; callers serialize access themselves
/// (the HTTP layer holds it behind one mutex).
pub struct CartStore {
    repo: Box<dyn CartRepository>,
    entries: Vec<CartEntry>,
    totals: CartTotals,
}

impl CartStore {
    /// Open the cart from its repository.
    ///
    /// Unreadable persisted state degrades to an empty cart with a warning;
    /// startup never fails on a corrupt slot.
    #[must_use]
    pub fn open(repo: Box<dyn CartRepository>) -> Self {
        let entries = match repo.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Discarding unreadable cart state: {e}");
                Vec::new()
            }
        };

        let mut store = Self {
            repo,
            entries,
            totals: CartTotals::default(),
        };
        store.recompute();
        store
    }

    /// Whether an entry exists for the given product id.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|e| e.product.id == id)
    }

    /// The entry list in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The current derived totals.
    #[must_use]
    pub const fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Add one unit of a product.
    ///
    /// Creates an entry with quantity 1, or increments an existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the new state cannot be persisted.
    pub fn add(&mut self, product: &Product) -> Result<(), CartError> {
        match self.entries.iter_mut().find(|e| e.product.id == product.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(CartEntry {
                product: product.clone(),
                quantity: 1,
            }),
        }
        self.commit()
    }

    /// Remove one unit of a product.
    ///
    /// Decrements the entry's quantity, removing the entry entirely when it
    /// would reach 0.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if no entry exists for the id, or a
    /// persistence error if the new state cannot be saved.
    pub fn remove_one(&mut self, id: ProductId) -> Result<(), CartError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.product.id == id)
            .ok_or(CartError::NotInCart(id))?;

        let decremented = match self.entries.get_mut(index) {
            Some(entry) if entry.quantity > 1 => {
                entry.quantity -= 1;
                true
            }
            _ => false,
        };
        if !decremented {
            self.entries.remove(index);
        }
        self.commit()
    }

    /// Empty the cart. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the emptied state cannot be persisted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.entries.clear();
        self.commit()
    }

    /// Recompute totals and write the entry list through the repository.
    fn commit(&mut self) -> Result<(), CartError> {
        self.recompute();
        self.repo.save(&self.entries)?;
        Ok(())
    }

    /// Recompute totals from the entry list.
    fn recompute(&mut self) {
        self.totals = CartTotals {
            total_price: self.entries.iter().map(CartEntry::line_total).sum(),
            total_quantity: self.entries.iter().map(|e| e.quantity).sum(),
        };
    }
}
