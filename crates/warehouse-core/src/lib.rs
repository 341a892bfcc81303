//! Warehouse inventory engine.
//!
//! This crate provides the in-memory core of the warehouse:
//!
//! - **Catalog**: a name-ordered category index, each category owning a
//!   collection of products keyed by ID
//! - **Analysis**: totals, averages, extremes, low/high stock classification
//! - **Reports**: plain-text renderings of the catalog and of analyses
//! - **Records**: the delimited text format used by stores
//!
//! # Example
//!
//! ```rust
//! use warehouse_core::prelude::*;
//!
//! let mut warehouse = Warehouse::new();
//! warehouse.add_category("Tools").unwrap();
//! warehouse.add_product("Tools", ProductId::new(1), "Hammer", 10).unwrap();
//! warehouse.add_product("Tools", ProductId::new(2), "Nail", 100).unwrap();
//!
//! let result = warehouse.analyze_category("Tools").unwrap();
//! assert_eq!(result.total_quantity, 110);
//! println!("{}", format_analysis(&result));
//! ```

pub mod error;
pub mod ids;

pub mod analysis;
pub mod catalog;
pub mod records;
pub mod report;
pub mod warehouse;

pub use error::{Result, WarehouseError};
pub use ids::ProductId;
pub use warehouse::{LoadReport, StockChange, Warehouse};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, WarehouseError};
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Category, CategoryIndex, InsertOutcome, Product, ProductCollection};

    // Analysis and reports
    pub use crate::analysis::{analyze, AnalysisResult};
    pub use crate::report::{
        format_all_products_by_id, format_analysis, format_categories, format_products_by_id,
    };

    // Store records
    pub use crate::records::{ProductRecord, StoreRecord};

    pub use crate::warehouse::{LoadReport, StockChange, Warehouse};
}
