//! Store file persistence.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context as _, Result};
use warehouse_core::{records, Warehouse};
use warehouse_observability::StructuredLogger;

/// The delimited text file a warehouse is loaded from and saved to.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    create_if_missing: bool,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, create_if_missing: bool) -> Self {
        Self {
            path: path.into(),
            create_if_missing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the warehouse. Malformed or conflicting records are skipped
    /// and logged; only I/O failure is an error.
    pub fn load(&self, logger: &StructuredLogger) -> Result<Warehouse> {
        let start = Instant::now();

        if !self.path.exists() {
            if self.create_if_missing {
                logger
                    .info_builder("store missing, starting empty")
                    .field("path", self.path.display().to_string())
                    .emit();
                return Ok(Warehouse::new());
            }
            bail!("Store file not found: {}", self.path.display());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store: {}", self.path.display()))?;

        let parsed = records::parse(&text);
        for error in &parsed.errors {
            logger
                .warn_builder("record skipped")
                .field("reason", error.to_string())
                .emit();
        }

        let mut warehouse = Warehouse::new();
        let report = warehouse.load_records(parsed.records);
        for error in &report.skipped {
            logger
                .warn_builder("record skipped")
                .field("reason", error.to_string())
                .emit();
        }

        logger
            .debug_builder("store loaded")
            .field_u64("categories", warehouse.index().len() as u64)
            .field_u64("products", report.products_loaded as u64)
            .field_u64("skipped", (parsed.errors.len() + report.skipped.len()) as u64)
            .duration_ms("elapsed_ms", start.elapsed())
            .emit();

        Ok(warehouse)
    }

    /// Write the warehouse, replacing the file in one rename.
    pub fn save(&self, warehouse: &Warehouse, logger: &StructuredLogger) -> Result<()> {
        let start = Instant::now();
        let text = records::render(&warehouse.records());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &text)
            .with_context(|| format!("Failed to write store: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace store: {}", self.path.display()))?;

        logger
            .debug_builder("store saved")
            .field_u64("bytes", text.len() as u64)
            .duration_ms("elapsed_ms", start.elapsed())
            .emit();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_core::ProductId;
    use warehouse_observability::SessionId;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(SessionId::from_string("test"))
    }

    #[test]
    fn test_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.txt");

        let warehouse = Store::new(&path, true).load(&logger()).unwrap();
        assert!(warehouse.index().is_empty());

        let err = Store::new(&path, false).load(&logger()).unwrap_err();
        assert!(err.to_string().contains("Store file not found"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data").join("products.txt"), false);

        let mut warehouse = Warehouse::new();
        warehouse.add_category("Tools").unwrap();
        warehouse.add_category("Garden").unwrap();
        warehouse
            .add_product("Tools", ProductId::new(1), "Hammer", 10)
            .unwrap();
        warehouse
            .add_product("Tools", ProductId::new(2), "Nail", 100)
            .unwrap();
        store.save(&warehouse, &logger()).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "Garden\nTools\n1,Hammer,10,Tools\n2,Nail,100,Tools\n");

        let reloaded = store.load(&logger()).unwrap();
        assert_eq!(reloaded.display_all(), warehouse.display_all());
    }

    #[test]
    fn test_load_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.txt");
        fs::write(
            &path,
            "# stock\n1,Hammer,10,Tools\nx,Broken,1,Tools\n1,Mallet,3,Tools\n\n2,Rice,40,Food\n",
        )
        .unwrap();

        let warehouse = Store::new(&path, false).load(&logger()).unwrap();
        assert_eq!(warehouse.index().names(), vec!["Food", "Tools"]);
        assert_eq!(warehouse.product_count(), 2);
    }
}
