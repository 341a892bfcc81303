//! Plain-text reports.
//!
//! Rendering only: nothing here mutates the catalog or performs I/O.

use crate::analysis::AnalysisResult;
use crate::catalog::{CategoryIndex, Product, ProductCollection};

/// Header row of the product list report.
pub const PRODUCT_LIST_HEADER: &str = "Product ID, Product Name, Product Quantity, Product Category";

/// Every category in ascending name order, each followed by its products in
/// collection order.
pub fn format_categories(index: &CategoryIndex) -> String {
    let mut out = String::new();
    for category in index {
        out.push_str(&format!("Category: {}\n", category.name));
        for product in category.products.iter() {
            out.push_str(&format!(
                "  Product ID: {}, Name: {}, Quantity: {}\n",
                product.id, product.name, product.quantity
            ));
        }
    }
    out
}

/// One collection as a table sorted ascending by product ID.
pub fn format_products_by_id(products: &ProductCollection) -> String {
    let mut out = format!("{}\n", PRODUCT_LIST_HEADER);
    push_rows(&mut out, products.sorted_by_id());
    out
}

/// Every category's products, categories in name order, each sorted by ID,
/// under a single header.
pub fn format_all_products_by_id(index: &CategoryIndex) -> String {
    let mut out = format!("{}\n", PRODUCT_LIST_HEADER);
    for category in index {
        push_rows(&mut out, category.products.sorted_by_id());
    }
    out
}

fn push_rows(out: &mut String, rows: Vec<&Product>) {
    for product in rows {
        out.push_str(&format!(
            "{}, {}, {}, {}\n",
            product.id, product.name, product.quantity, product.category
        ));
    }
}

/// Totals, extremes, and the low and high stock lists.
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total quantity: {}\n", result.total_quantity));
    out.push_str(&format!("Average quantity: {:.2}\n", result.average_quantity));
    out.push_str(&format!(
        "Max stock product ID: {}, Quantity: {}\n",
        result.max_stock.id, result.max_stock.quantity
    ));
    out.push_str(&format!(
        "Min stock product ID: {}, Quantity: {}\n",
        result.min_stock.id, result.min_stock.quantity
    ));
    out.push_str("Low stock products:\n");
    push_stock_lines(&mut out, &result.low_stock);
    out.push_str("High stock products:\n");
    push_stock_lines(&mut out, &result.high_stock);
    out
}

fn push_stock_lines(out: &mut String, products: &[Product]) {
    for product in products {
        out.push_str(&format!(
            "Product ID: {}, Quantity: {}\n",
            product.id, product.quantity
        ));
    }
}
