//! Stock-level analysis of a product collection.

use crate::catalog::{Product, ProductCollection};
use crate::error::{Result, WarehouseError};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one collection.
///
/// Products are value copies; changing them never reaches the collection
/// they were taken from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Sum of all quantities.
    pub total_quantity: u64,
    /// Mean quantity.
    pub average_quantity: f64,
    /// Number of products analysed.
    pub product_count: usize,
    /// Product with the highest quantity (first seen on a tie).
    pub max_stock: Product,
    /// Product with the lowest quantity (first seen on a tie).
    pub min_stock: Product,
    /// Products strictly below the average, oldest first.
    pub low_stock: Vec<Product>,
    /// Products strictly above the average, oldest first.
    pub high_stock: Vec<Product>,
}

impl AnalysisResult {
    /// Products sitting exactly on the average.
    pub fn at_average_count(&self) -> usize {
        self.product_count - self.low_stock.len() - self.high_stock.len()
    }
}

/// Analyse a collection in two passes.
///
/// The first pass totals quantities and tracks the extremes, the second
/// classifies each product against the mean. Each classified list comes
/// out in reverse collection order, so the oldest product leads. An empty collection fails with
/// `EmptyInput` carrying `label`.
pub fn analyze_labeled(products: &ProductCollection, label: &str) -> Result<AnalysisResult> {
    let mut total: u64 = 0;
    let mut count: usize = 0;
    let mut max: Option<&Product> = None;
    let mut min: Option<&Product> = None;

    for product in products.iter() {
        total = total
            .checked_add(product.quantity)
            .ok_or(WarehouseError::Overflow)?;
        count += 1;
        if max.map_or(true, |m| product.quantity > m.quantity) {
            max = Some(product);
        }
        if min.map_or(true, |m| product.quantity < m.quantity) {
            min = Some(product);
        }
    }

    let (Some(max), Some(min)) = (max, min) else {
        return Err(WarehouseError::EmptyInput(label.to_string()));
    };
    let average = total as f64 / count as f64;

    let mut low_stock = Vec::new();
    let mut high_stock = Vec::new();
    for product in products.iter().rev() {
        let quantity = product.quantity as f64;
        if quantity < average {
            low_stock.push(product.clone());
        } else if quantity > average {
            high_stock.push(product.clone());
        }
    }

    Ok(AnalysisResult {
        total_quantity: total,
        average_quantity: average,
        product_count: count,
        max_stock: max.clone(),
        min_stock: min.clone(),
        low_stock,
        high_stock,
    })
}

/// Analyse a collection whose owner has no name to report.
pub fn analyze(products: &ProductCollection) -> Result<AnalysisResult> {
    let label = products
        .iter()
        .next()
        .map(|p| p.category.as_str())
        .unwrap_or_default();
    analyze_labeled(products, label)
}
