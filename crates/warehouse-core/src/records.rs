//! Delimited text records exchanged with the store.
//!
//! One record per line:
//!
//! ```text
//! # comment
//! Tools
//! 1,Hammer,10,Tools
//! ```
//!
//! A line without commas declares a category. A line with four
//! comma-separated fields is a product: `id,name,quantity,category`.
//! Blank lines and `#` comments are ignored. Fields are trimmed, so names
//! cannot contain commas or line breaks.

use crate::catalog::Product;
use crate::error::WarehouseError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as written to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub category: String,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            category: product.category.clone(),
        }
    }
}

/// One line of a store file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreRecord {
    /// Declares a category, possibly without products.
    Category(String),
    /// A product filed under its category.
    Product(ProductRecord),
}

impl StoreRecord {
    /// Render as a single line, without the trailing newline.
    pub fn to_line(&self) -> String {
        match self {
            StoreRecord::Category(name) => name.clone(),
            StoreRecord::Product(p) => {
                format!("{},{},{},{}", p.id, p.name, p.quantity, p.category)
            }
        }
    }
}

/// Records parsed from a store file, with the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    pub records: Vec<StoreRecord>,
    /// One `InvalidRecord` per malformed line.
    pub errors: Vec<WarehouseError>,
}

/// Parse a store file. Malformed lines are skipped and reported, never fatal.
pub fn parse(text: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => parsed.errors.push(WarehouseError::InvalidRecord {
                line: idx + 1,
                reason,
            }),
        }
    }
    parsed
}

fn parse_line(line: &str) -> Result<StoreRecord, String> {
    if !line.contains(',') {
        return Ok(StoreRecord::Category(line.to_string()));
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, name, quantity, category] = fields.as_slice() else {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    };

    let id = id
        .parse::<ProductId>()
        .map_err(|_| format!("invalid product id '{}'", id))?;
    let quantity = quantity
        .parse::<u64>()
        .map_err(|_| format!("invalid quantity '{}'", quantity))?;
    if name.is_empty() {
        return Err("empty product name".to_string());
    }
    if category.is_empty() {
        return Err("empty category".to_string());
    }

    Ok(StoreRecord::Product(ProductRecord {
        id,
        name: name.to_string(),
        quantity,
        category: category.to_string(),
    }))
}

/// Render records as store file text, one per line.
pub fn render<'a>(records: impl IntoIterator<Item = &'a StoreRecord>) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    out
}

/// Check that a name can be stored: non-empty, no commas, no line breaks.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name is empty".to_string());
    }
    if name.trim() != name {
        return Err("name has leading or trailing whitespace".to_string());
    }
    if name.contains([',', '\n', '\r']) {
        return Err("name contains a comma or line break".to_string());
    }
    if name.starts_with('#') {
        return Err("name starts with '#'".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: u64, category: &str) -> StoreRecord {
        StoreRecord::Product(ProductRecord {
            id: ProductId::new(id),
            name: name.to_string(),
            quantity,
            category: category.to_string(),
        })
    }

    #[test]
    fn test_parse_products_and_categories() {
        let parsed = parse("# inventory\nFood\n\n1,Hammer,10,Tools\n 2 , Nail , 100 , Tools \n");
        assert!(parsed.errors.is_empty());
        assert_eq!(
            parsed.records,
            vec![
                StoreRecord::Category("Food".to_string()),
                product(1, "Hammer", 10, "Tools"),
                product(2, "Nail", 100, "Tools"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let parsed = parse("1,Hammer,10\nx,Saw,1,Tools\n3,Nail,-4,Tools\n4,,1,Tools\n5,Glue,2,Tools\n");
        assert_eq!(parsed.records, vec![product(5, "Glue", 2, "Tools")]);
        let lines: Vec<usize> = parsed
            .errors
            .iter()
            .map(|e| match e {
                WarehouseError::InvalidRecord { line, .. } => *line,
                other => panic!("unexpected error {other:?}"),
            })
            .collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_render_matches_parse() {
        let records = vec![
            StoreRecord::Category("Food".to_string()),
            StoreRecord::Category("Tools".to_string()),
            product(1, "Hammer", 10, "Tools"),
        ];
        let text = render(&records);
        assert_eq!(text, "Food\nTools\n1,Hammer,10,Tools\n");
        assert_eq!(parse(&text).records, records);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Power Tools").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(" Tools").is_err());
        assert!(validate_name("Nuts, Bolts").is_err());
        assert!(validate_name("Two\nLines").is_err());
        assert!(validate_name("#hash").is_err());
    }

    #[test]
    fn test_store_record_json_shape() {
        let json = serde_json::to_value(product(1, "Hammer", 10, "Tools")).unwrap();
        assert_eq!(json["product"]["id"], 1);
        assert_eq!(json["product"]["category"], "Tools");
    }
}
