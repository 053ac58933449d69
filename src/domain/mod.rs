//! Domain layer for the catalog admin plugin.
//!
//! Holds the product model and the crate-wide error type. Nothing in here
//! knows about Zellij, rendering, or the store implementation.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`product`]: Product records, add payloads, and the seed catalog
//!
//! # Examples
//!
//! ```
//! use catalog_admin::domain::{NewProduct, Product};
//!
//! let product: Product = NewProduct::new("Pixel 9", 21_000_000, 4).with_id(6);
//! assert_eq!(product.id, 6);
//! ```

pub mod error;
pub mod product;

pub use error::{CatalogError, Result};
pub use product::{seed_catalog, NewProduct, Product, ProductId};
