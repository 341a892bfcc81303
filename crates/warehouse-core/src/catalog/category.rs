//! Category type.

use crate::catalog::{Product, ProductCollection};
use crate::error::{Result, WarehouseError};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A named category owning its products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category name, the index key.
    pub name: String,
    /// Products stocked under this category.
    pub products: ProductCollection,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: ProductCollection::new(),
        }
    }

    /// Add a product, labelled with this category's name.
    pub fn add_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        quantity: u64,
    ) -> Result<&Product> {
        self.products.insert(id, name, quantity, self.name.as_str())
    }

    /// Total units across all products; `Overflow` if the sum leaves `u64`.
    pub fn total_quantity(&self) -> Result<u64> {
        self.products.iter().try_fold(0u64, |total, p| {
            total
                .checked_add(p.quantity)
                .ok_or(WarehouseError::Overflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_empty() {
        let category = Category::new("Tools");
        assert_eq!(category.name, "Tools");
        assert!(category.products.is_empty());
        assert_eq!(category.total_quantity(), Ok(0));
    }

    #[test]
    fn test_add_product_labels_category() {
        let mut category = Category::new("Tools");
        let product = category.add_product(ProductId::new(1), "Hammer", 10).unwrap();
        assert_eq!(product.category, "Tools");
        category.add_product(ProductId::new(2), "Nail", 100).unwrap();
        assert_eq!(category.total_quantity(), Ok(110));
    }

    #[test]
    fn test_total_quantity_overflow() {
        let mut category = Category::new("Tools");
        category.add_product(ProductId::new(1), "Hammer", u64::MAX).unwrap();
        assert_eq!(category.total_quantity(), Ok(u64::MAX));
        category.add_product(ProductId::new(2), "Nail", 1).unwrap();
        assert_eq!(category.total_quantity(), Err(WarehouseError::Overflow));
    }
}
