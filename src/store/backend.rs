//! Store abstraction.
//!
//! [`ProductStore`] is the seam between the presentation layer and the catalog.
//! The plugin only ever runs [`InMemoryStore`](super::InMemoryStore), but the
//! handler is written against the trait so it can be driven by test doubles.

use crate::domain::error::Result;
use crate::domain::{NewProduct, Product, ProductId};

/// Owner of the catalog and the current search filter.
///
/// All operations are synchronous and run to completion. They are called from
/// the plugin's single update thread, one at a time.
///
/// # Examples
///
/// ```
/// use catalog_admin::domain::NewProduct;
/// use catalog_admin::store::{InMemoryStore, ProductStore};
///
/// let mut store = InMemoryStore::seeded();
/// store.delete(5);
/// let added = store.add(NewProduct::new("Test Product", 1000, 1))?;
/// assert_eq!(added.id, 5);
///
/// store.set_search_text("iphone");
/// assert_eq!(store.filtered_products().len(), 1);
/// # Ok::<(), catalog_admin::CatalogError>(())
/// ```
pub trait ProductStore: Send + std::fmt::Debug {
    /// Appends a new product and returns it with its assigned id.
    ///
    /// The id is one more than the largest id currently in the catalog, or 1
    /// when the catalog is empty. Ids freed by deleting the largest entry are
    /// therefore handed out again.
    ///
    /// # Errors
    ///
    /// Returns an error if no id can be assigned. The catalog is unchanged in
    /// that case.
    fn add(&mut self, candidate: NewProduct) -> Result<Product>;

    /// Removes every product with the given id.
    ///
    /// Returns the first removed product, or `None` if no entry matched. A
    /// missing id is not an error.
    fn delete(&mut self, id: ProductId) -> Option<Product>;

    /// Replaces the search filter verbatim (no trimming, no case folding).
    fn set_search_text(&mut self, text: &str);

    /// Returns the current search filter exactly as stored.
    fn search_text(&self) -> &str;

    /// Returns the whole catalog in insertion order.
    fn products(&self) -> &[Product];

    /// Returns the catalog entries matching the search filter, in catalog order.
    ///
    /// A filter that is empty after trimming matches everything. Otherwise an
    /// entry matches when its lower-cased name contains the lower-cased filter.
    /// The result is recomputed on every call.
    fn filtered_products(&self) -> Vec<Product>;
}
