//! Session-scoped in-memory store.
//!
//! The catalog is a plain `Vec` whose order doubles as display order. Nothing
//! is cached: [`filtered_products`](ProductStore::filtered_products) walks the
//! vector on every call, which is cheap at the sizes an admin pane deals with.

use crate::domain::error::{CatalogError, Result};
use crate::domain::{seed_catalog, NewProduct, Product, ProductId};
use crate::store::backend::ProductStore;

/// In-memory [`ProductStore`].
///
/// Lives exactly as long as the plugin instance and is dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    /// Catalog in insertion order. `add` never hands out an id already present.
    products: Vec<Product>,

    /// Current search filter, stored verbatim.
    search_text: String,
}

impl InMemoryStore {
    /// Creates a store over an existing catalog with an empty filter.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            search_text: String::new(),
        }
    }

    /// Creates a store holding the five example products.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    fn next_id(&self) -> Result<ProductId> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(CatalogError::IdSpaceExhausted { max_id }),
        }
    }
}

impl ProductStore for InMemoryStore {
    fn add(&mut self, candidate: NewProduct) -> Result<Product> {
        let id = self.next_id()?;
        let product = candidate.with_id(id);

        tracing::debug!(
            product_id = id,
            product_name = %product.name,
            catalog_len = self.products.len() + 1,
            "product added"
        );

        self.products.push(product.clone());
        Ok(product)
    }

    fn delete(&mut self, id: ProductId) -> Option<Product> {
        let before = self.products.len();
        let mut first_removed = None;

        self.products.retain(|p| {
            if p.id != id {
                return true;
            }
            if first_removed.is_none() {
                first_removed = Some(p.clone());
            }
            false
        });

        if first_removed.is_some() {
            tracing::debug!(
                product_id = id,
                removed = before - self.products.len(),
                catalog_len = self.products.len(),
                "product deleted"
            );
        }

        first_removed
    }

    fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_owned();
    }

    fn search_text(&self) -> &str {
        &self.search_text
    }

    fn products(&self) -> &[Product] {
        &self.products
    }

    fn filtered_products(&self) -> Vec<Product> {
        if self.search_text.trim().is_empty() {
            return self.products.clone();
        }

        let needle = self.search_text.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name_contains(&needle))
            .cloned()
            .collect()
    }
}
