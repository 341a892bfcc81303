//! Per-category product collection and stock mutation.

use crate::catalog::Product;
use crate::error::{Result, WarehouseError};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products owned by a single category.
///
/// Collection order is most recently inserted first. Lookups scan in that
/// order; it is also the order used by the category report and by analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCollection {
    // Stored oldest first so that inserting is a push.
    products: Vec<Product>,
}

impl ProductCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the collection holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate in collection order (most recently inserted first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Product> + ExactSizeIterator {
        self.products.iter().rev()
    }

    /// Insert a new product at the front of the collection.
    ///
    /// Returns an error if a product with the same ID is already present.
    pub fn insert(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        quantity: u64,
        category: impl Into<String>,
    ) -> Result<&Product> {
        let category = category.into();
        if self.find(id).is_some() {
            return Err(WarehouseError::DuplicateProduct { category, id });
        }
        self.products.push(Product::new(id, name, quantity, category));
        Ok(&self.products[self.products.len() - 1])
    }

    /// Find a product by ID.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }

    /// Find a product by ID for mutation.
    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().rev().find(|p| p.id == id)
    }

    /// Check if a product ID is present.
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Overwrite a product's quantity (restock or correction).
    ///
    /// Returns the previous quantity.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u64) -> Result<u64> {
        let product = self
            .find_mut(id)
            .ok_or(WarehouseError::ProductNotFound(id))?;
        let previous = product.quantity;
        product.quantity = quantity;
        Ok(previous)
    }

    /// Take stock out of a product.
    ///
    /// Returns the new quantity. Fails with `InsufficientStock` and leaves
    /// the quantity unchanged if `amount` exceeds what is on hand.
    pub fn decrease(&mut self, id: ProductId, amount: u64) -> Result<u64> {
        let product = self
            .find_mut(id)
            .ok_or(WarehouseError::ProductNotFound(id))?;
        if !product.can_fulfill(amount) {
            return Err(WarehouseError::InsufficientStock {
                product_id: id,
                requested: amount,
                available: product.quantity,
            });
        }
        product.quantity -= amount;
        Ok(product.quantity)
    }

    /// Add stock to a product. Returns the new quantity.
    pub fn restock(&mut self, id: ProductId, amount: u64) -> Result<u64> {
        let product = self
            .find_mut(id)
            .ok_or(WarehouseError::ProductNotFound(id))?;
        product.quantity = product
            .quantity
            .checked_add(amount)
            .ok_or(WarehouseError::Overflow)?;
        Ok(product.quantity)
    }

    /// Products ordered ascending by ID. The collection itself is untouched.
    pub fn sorted_by_id(&self) -> Vec<&Product> {
        let mut sorted: Vec<&Product> = self.iter().collect();
        sorted.sort_by_key(|p| p.id);
        sorted
    }

    /// Iterate oldest first, the order that reproduces this collection when
    /// fed back through `insert`.
    pub(crate) fn iter_oldest_first(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, Product>>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter().rev()
    }
}
