//! Warehouse facade: the operations a driver calls.

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_labeled, AnalysisResult};
use crate::catalog::{Category, CategoryIndex, InsertOutcome, Iter, Product, ProductCollection};
use crate::error::{Result, WarehouseError};
use crate::ids::ProductId;
use crate::records::{self, ProductRecord, StoreRecord};
use crate::report;

/// Result of a stock mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    /// Category holding the product.
    pub category: String,
    pub product_id: ProductId,
    /// Quantity before the change.
    pub previous: u64,
    /// Quantity after the change.
    pub quantity: u64,
}

/// Summary of a bulk load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Categories created by the load.
    pub categories_created: usize,
    /// Products inserted.
    pub products_loaded: usize,
    /// Records that were not applied, with the reason.
    pub skipped: Vec<WarehouseError>,
}

/// The inventory: a category index and everything it owns.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    index: CategoryIndex,
}

impl Warehouse {
    /// Create an empty warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the category index.
    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Categories in ascending name order.
    pub fn categories(&self) -> Iter<'_> {
        self.index.iter()
    }

    /// Look up a category.
    pub fn category(&self, name: &str) -> Result<&Category> {
        self.index
            .find(name)
            .ok_or_else(|| WarehouseError::CategoryNotFound(name.to_string()))
    }

    /// Total number of products across all categories.
    pub fn product_count(&self) -> usize {
        self.index.iter().map(|c| c.products.len()).sum()
    }

    /// Add a category if absent.
    pub fn add_category(&mut self, name: &str) -> Result<InsertOutcome> {
        check_name(name)?;
        Ok(self.index.insert(name))
    }

    /// Add a category, failing if it already exists.
    pub fn create_category(&mut self, name: &str) -> Result<()> {
        match self.add_category(name)? {
            InsertOutcome::Inserted => Ok(()),
            InsertOutcome::AlreadyExists => Err(WarehouseError::CategoryExists(name.to_string())),
        }
    }

    /// Delete a category together with its products.
    pub fn delete_category(&mut self, name: &str) -> Result<Category> {
        self.index
            .remove(name)
            .ok_or_else(|| WarehouseError::CategoryNotFound(name.to_string()))
    }

    /// Add a product to an existing category.
    pub fn add_product(
        &mut self,
        category: &str,
        id: ProductId,
        name: &str,
        quantity: u64,
    ) -> Result<&Product> {
        check_name(name)?;
        let owner = self
            .index
            .find_mut(category)
            .ok_or_else(|| WarehouseError::UnknownCategory(category.to_string()))?;
        owner.add_product(id, name, quantity)
    }

    /// Find a product, either in one category or in the first category (by
    /// name order) that holds the ID.
    pub fn find_product(&self, id: ProductId, category: Option<&str>) -> Result<&Product> {
        let owner = self.locate(id, category)?;
        self.category(&owner)?
            .products
            .find(id)
            .ok_or(WarehouseError::ProductNotFound(id))
    }

    /// Overwrite a product's quantity.
    pub fn set_quantity(
        &mut self,
        id: ProductId,
        quantity: u64,
        category: Option<&str>,
    ) -> Result<StockChange> {
        self.mutate_stock(id, category, |products| {
            let previous = products.set_quantity(id, quantity)?;
            Ok((previous, quantity))
        })
    }

    /// Take stock out of a product; never goes below zero.
    pub fn decrease(
        &mut self,
        id: ProductId,
        amount: u64,
        category: Option<&str>,
    ) -> Result<StockChange> {
        self.mutate_stock(id, category, |products| {
            let previous = products.find(id).map(|p| p.quantity).unwrap_or_default();
            let quantity = products.decrease(id, amount)?;
            Ok((previous, quantity))
        })
    }

    /// Add stock to a product.
    pub fn restock(
        &mut self,
        id: ProductId,
        amount: u64,
        category: Option<&str>,
    ) -> Result<StockChange> {
        self.mutate_stock(id, category, |products| {
            let previous = products.find(id).map(|p| p.quantity).unwrap_or_default();
            let quantity = products.restock(id, amount)?;
            Ok((previous, quantity))
        })
    }

    /// Analyse one category's products.
    pub fn analyze_category(&self, name: &str) -> Result<AnalysisResult> {
        let category = self.category(name)?;
        analyze_labeled(&category.products, &category.name)
    }

    /// Every category and its products.
    pub fn display_all(&self) -> String {
        report::format_categories(&self.index)
    }

    /// One category's products sorted by ID.
    pub fn list_sorted(&self, name: &str) -> Result<String> {
        Ok(report::format_products_by_id(&self.category(name)?.products))
    }

    /// Every product sorted by ID within its category.
    pub fn list_all_sorted(&self) -> String {
        report::format_all_products_by_id(&self.index)
    }

    /// Apply records from a store. Conflicting records are skipped and
    /// reported; the rest are applied in order.
    pub fn load_records(&mut self, records: impl IntoIterator<Item = StoreRecord>) -> LoadReport {
        let mut report = LoadReport::default();
        for record in records {
            let applied = match record {
                StoreRecord::Category(name) => self.load_category(&name, &mut report),
                StoreRecord::Product(product) => self.load_product(product, &mut report),
            };
            if let Err(e) = applied {
                report.skipped.push(e);
            }
        }
        report
    }

    fn load_category(&mut self, name: &str, report: &mut LoadReport) -> Result<()> {
        if self.add_category(name)?.is_inserted() {
            report.categories_created += 1;
        }
        Ok(())
    }

    fn load_product(&mut self, record: ProductRecord, report: &mut LoadReport) -> Result<()> {
        self.load_category(&record.category, report)?;
        self.add_product(&record.category, record.id, &record.name, record.quantity)?;
        report.products_loaded += 1;
        Ok(())
    }

    /// Records that reproduce this warehouse when loaded into an empty one.
    pub fn records(&self) -> Vec<StoreRecord> {
        let mut out = Vec::with_capacity(self.index.len() + self.product_count());
        for category in &self.index {
            out.push(StoreRecord::Category(category.name.clone()));
            out.extend(
                category
                    .products
                    .iter_oldest_first()
                    .map(|p| StoreRecord::Product(ProductRecord::from(p))),
            );
        }
        out
    }

    /// Name of the category a stock operation applies to.
    fn locate(&self, id: ProductId, category: Option<&str>) -> Result<String> {
        match category {
            Some(name) => {
                let owner = self.category(name)?;
                if owner.products.contains(id) {
                    Ok(owner.name.clone())
                } else {
                    Err(WarehouseError::ProductNotFound(id))
                }
            }
            None => self
                .index
                .iter()
                .find(|c| c.products.contains(id))
                .map(|c| c.name.clone())
                .ok_or(WarehouseError::ProductNotFound(id)),
        }
    }

    fn mutate_stock<F>(&mut self, id: ProductId, category: Option<&str>, apply: F) -> Result<StockChange>
    where
        F: FnOnce(&mut ProductCollection) -> Result<(u64, u64)>,
    {
        let owner = self.locate(id, category)?;
        let target = self
            .index
            .find_mut(&owner)
            .ok_or_else(|| WarehouseError::CategoryNotFound(owner.clone()))?;
        let (previous, quantity) = apply(&mut target.products)?;
        Ok(StockChange {
            category: owner,
            product_id: id,
            previous,
            quantity,
        })
    }
}

fn check_name(name: &str) -> Result<()> {
    records::validate_name(name).map_err(|reason| WarehouseError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> Warehouse {
        let mut warehouse = Warehouse::new();
        warehouse.add_category("Tools").unwrap();
        warehouse.add_category("Food").unwrap();
        warehouse
            .add_product("Tools", ProductId::new(1), "Hammer", 10)
            .unwrap();
        warehouse
            .add_product("Tools", ProductId::new(2), "Nail", 100)
            .unwrap();
        warehouse
            .add_product("Food", ProductId::new(2), "Rice", 40)
            .unwrap();
        warehouse
    }

    #[test]
    fn test_add_category_outcomes() {
        let mut warehouse = Warehouse::new();
        assert_eq!(warehouse.add_category("Tools"), Ok(InsertOutcome::Inserted));
        assert_eq!(
            warehouse.add_category("Tools"),
            Ok(InsertOutcome::AlreadyExists)
        );
        assert_eq!(
            warehouse.create_category("Tools"),
            Err(WarehouseError::CategoryExists("Tools".to_string()))
        );
        assert!(matches!(
            warehouse.add_category("Nuts, Bolts"),
            Err(WarehouseError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_delete_category() {
        let mut warehouse = stocked();
        let removed = warehouse.delete_category("Tools").unwrap();
        assert_eq!(removed.products.len(), 2);
        assert_eq!(
            warehouse.category("Tools").unwrap_err(),
            WarehouseError::CategoryNotFound("Tools".to_string())
        );
        assert_eq!(
            warehouse.delete_category("Tools").unwrap_err(),
            WarehouseError::CategoryNotFound("Tools".to_string())
        );
        assert_eq!(warehouse.product_count(), 1);
    }

    #[test]
    fn test_add_product_requires_category() {
        let mut warehouse = stocked();
        let err = warehouse
            .add_product("Garden", ProductId::new(5), "Rake", 3)
            .unwrap_err();
        assert_eq!(err, WarehouseError::UnknownCategory("Garden".to_string()));
        assert!(warehouse.category("Garden").is_err());
    }

    #[test]
    fn test_stock_ops_search_categories_in_name_order() {
        let mut warehouse = stocked();
        // "Food" sorts before "Tools", so ID 2 resolves to Rice.
        let change = warehouse.decrease(ProductId::new(2), 5, None).unwrap();
        assert_eq!(change.category, "Food");
        assert_eq!((change.previous, change.quantity), (40, 35));

        let change = warehouse
            .decrease(ProductId::new(2), 5, Some("Tools"))
            .unwrap();
        assert_eq!(change.category, "Tools");
        assert_eq!(change.quantity, 95);
    }

    #[test]
    fn test_stock_op_errors() {
        let mut warehouse = stocked();
        assert_eq!(
            warehouse.set_quantity(ProductId::new(9), 1, None),
            Err(WarehouseError::ProductNotFound(ProductId::new(9)))
        );
        assert_eq!(
            warehouse.set_quantity(ProductId::new(1), 1, Some("Food")),
            Err(WarehouseError::ProductNotFound(ProductId::new(1)))
        );
        assert_eq!(
            warehouse.restock(ProductId::new(1), 1, Some("Garden")),
            Err(WarehouseError::CategoryNotFound("Garden".to_string()))
        );
        assert!(matches!(
            warehouse.decrease(ProductId::new(1), 11, None),
            Err(WarehouseError::InsufficientStock { requested: 11, available: 10, .. })
        ));
        assert_eq!(
            warehouse.find_product(ProductId::new(1), None).unwrap().quantity,
            10
        );
    }

    #[test]
    fn test_set_then_restock() {
        let mut warehouse = stocked();
        let change = warehouse.set_quantity(ProductId::new(1), 0, None).unwrap();
        assert_eq!((change.previous, change.quantity), (10, 0));
        let change = warehouse.restock(ProductId::new(1), 12, None).unwrap();
        assert_eq!((change.previous, change.quantity), (0, 12));
    }

    #[test]
    fn test_analyze_category() {
        let mut warehouse = stocked();
        let result = warehouse.analyze_category("Tools").unwrap();
        assert_eq!(result.total_quantity, 110);

        warehouse.add_category("Garden").unwrap();
        assert_eq!(
            warehouse.analyze_category("Garden"),
            Err(WarehouseError::EmptyInput("Garden".to_string()))
        );
        assert_eq!(
            warehouse.analyze_category("Toys"),
            Err(WarehouseError::CategoryNotFound("Toys".to_string()))
        );
    }

    #[test]
    fn test_records_round_trip_preserves_order() {
        let mut warehouse = stocked();
        warehouse.add_category("Garden").unwrap();
        let records = warehouse.records();

        let mut reloaded = Warehouse::new();
        let report = reloaded.load_records(records.clone());
        assert!(report.skipped.is_empty());
        assert_eq!(report.categories_created, 3);
        assert_eq!(report.products_loaded, 3);
        assert_eq!(reloaded.records(), records);
        assert_eq!(reloaded.display_all(), warehouse.display_all());
    }

    #[test]
    fn test_load_skips_conflicts() {
        let mut warehouse = Warehouse::new();
        let parsed = records::parse("1,Hammer,10,Tools\n1,Mallet,4,Tools\nBad\u{0}Name,x\n");
        let report = warehouse.load_records(parsed.records);
        assert_eq!(report.categories_created, 1);
        assert_eq!(report.products_loaded, 1);
        assert_eq!(
            report.skipped,
            vec![WarehouseError::DuplicateProduct {
                category: "Tools".to_string(),
                id: ProductId::new(1),
            }]
        );
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(
            warehouse.find_product(ProductId::new(1), None).unwrap().name,
            "Hammer"
        );
    }

    #[test]
    fn test_list_sorted() {
        let warehouse = stocked();
        let text = warehouse.list_sorted("Tools").unwrap();
        assert!(text.ends_with("1, Hammer, 10, Tools\n2, Nail, 100, Tools\n"));
        assert!(warehouse.list_sorted("Toys").is_err());
        assert_eq!(warehouse.list_all_sorted().lines().count(), 4);
    }
}
