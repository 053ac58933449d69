//! Product domain model.
//!
//! A [`Product`] is one catalog entry. Ids are always assigned by the store;
//! callers build a [`NewProduct`] and hand it to
//! [`ProductStore::add`](crate::store::ProductStore::add).

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier. Always strictly positive.
pub type ProductId = u64;

/// A single catalog entry.
///
/// `price` is a whole-currency-unit amount (no minor units). Both `price` and
/// `quantity` are at least 1 for anything added through the create form, but
/// the store itself does not re-validate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl Product {
    /// Returns `true` if `needle_lower` occurs in the lower-cased name.
    ///
    /// The caller lower-cases the needle once per query so the filter loop does
    /// not repeat that work per product.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Add payload: a product without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl NewProduct {
    /// Creates a new add payload.
    pub fn new(name: impl Into<String>, price: u64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Pairs the payload with a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Returns the example catalog the plugin starts with (ids 1 through 5).
#[must_use]
pub fn seed_catalog() -> Vec<Product> {
    [
        ("Laptop Dell XPS 13", 25_000_000, 10),
        ("iPhone 15 Pro Max", 30_000_000, 15),
        ("Samsung Galaxy S24", 22_000_000, 20),
        ("iPad Air M2", 18_000_000, 12),
        ("MacBook Air M3", 28_000_000, 8),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, price, quantity), id)| NewProduct::new(name, price, quantity).with_id(id))
    .collect()
}
