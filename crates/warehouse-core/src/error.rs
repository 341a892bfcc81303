//! Warehouse error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in warehouse operations.
///
/// Every variant is a local, recoverable condition: operations that fail
/// leave the index and its collections unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WarehouseError {
    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Category already present in the index.
    #[error("Category already exists: {0}")]
    CategoryExists(String),

    /// Product added to a category that is not in the index.
    #[error("Category does not exist: {0}. Create the category first")]
    UnknownCategory(String),

    /// Name that cannot be stored as a category or product name.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product ID already used inside the category.
    #[error("Product {id} already exists in category {category}")]
    DuplicateProduct { category: String, id: ProductId },

    /// Not enough stock to satisfy a decrease.
    #[error("Not enough stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    /// Analysis requested on a category without products.
    #[error("Cannot analyze category {0}: it has no products")]
    EmptyInput(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity calculation")]
    Overflow,

    /// Malformed line in a store file.
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
}

/// Result alias for warehouse operations.
pub type Result<T> = std::result::Result<T, WarehouseError>;
