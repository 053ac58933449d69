//! Error types for the catalog admin plugin.
//!
//! This module defines [`CatalogError`] and the [`Result`] alias used across the
//! crate. Form validation failures are not errors in this sense: they are
//! reported as field messages by [`crate::app::form`] and never reach the store.

use thiserror::Error;

/// The main error type for catalog admin operations.
///
/// # Examples
///
/// ```
/// use catalog_admin::domain::CatalogError;
///
/// let err = CatalogError::Config("page_size must be positive".to_string());
/// assert_eq!(err.to_string(), "Configuration error: page_size must be positive");
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product id is left to assign.
    ///
    /// Raised by `add` when the largest id in the catalog is already
    /// `u64::MAX`. The catalog is left untouched.
    #[error("Product id space exhausted (largest id is {max_id})")]
    IdSpaceExhausted {
        /// Largest id currently present in the catalog.
        max_id: u64,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. while reading a
    /// theme file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog admin operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
