//! Product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product stocked in the warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Identifier, unique within the owning category.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Units in stock.
    pub quantity: u64,
    /// Name of the owning category, kept for reporting.
    pub category: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: u64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            category: category.into(),
        }
    }

    /// Check if the product is out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Check if a specific quantity can be taken from stock.
    pub fn can_fulfill(&self, amount: u64) -> bool {
        self.quantity >= amount
    }
}
