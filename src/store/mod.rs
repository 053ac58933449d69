//! Product store: the authoritative catalog and search filter.
//!
//! The store is the only component that mutates the catalog. Everything above
//! it talks to the [`ProductStore`] trait and re-reads
//! [`filtered_products`](ProductStore::filtered_products) after each mutation.
//!
//! # Modules
//!
//! - `backend`: The [`ProductStore`] trait
//! - `memory`: Session-scoped in-memory implementation

pub mod backend;
pub mod memory;

pub use backend::ProductStore;
pub use memory::InMemoryStore;
