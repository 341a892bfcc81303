//! End-to-end inventory scenarios through the public API.

use warehouse_core::prelude::*;

fn tools_and_food() -> Warehouse {
    let mut warehouse = Warehouse::new();
    assert_eq!(warehouse.add_category("Tools"), Ok(InsertOutcome::Inserted));
    assert_eq!(warehouse.add_category("Food"), Ok(InsertOutcome::Inserted));
    warehouse
        .add_product("Tools", ProductId::new(1), "Hammer", 10)
        .unwrap();
    warehouse
        .add_product("Tools", ProductId::new(2), "Nail", 100)
        .unwrap();
    warehouse
        .add_product("Tools", ProductId::new(3), "Screwdriver", 5)
        .unwrap();
    warehouse
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn categories_iterate_in_name_order() {
    let warehouse = tools_and_food();
    assert_eq!(warehouse.index().names(), vec!["Food", "Tools"]);
}

#[test]
fn tools_analysis() {
    let warehouse = tools_and_food();
    let result = warehouse.analyze_category("Tools").unwrap();

    assert_eq!(result.total_quantity, 115);
    assert_eq!(format!("{:.2}", result.average_quantity), "38.33");
    assert_eq!(result.max_stock.name, "Nail");
    assert_eq!(result.max_stock.quantity, 100);
    assert_eq!(result.min_stock.name, "Screwdriver");
    assert_eq!(result.min_stock.quantity, 5);
    assert_eq!(names(&result.low_stock), vec!["Hammer", "Screwdriver"]);
    assert_eq!(names(&result.high_stock), vec!["Nail"]);
}

#[test]
fn over_decrease_reports_insufficient_stock() {
    let mut warehouse = tools_and_food();
    let err = warehouse
        .decrease(ProductId::new(1), 15, Some("Tools"))
        .unwrap_err();
    assert_eq!(
        err,
        WarehouseError::InsufficientStock {
            product_id: ProductId::new(1),
            requested: 15,
            available: 10,
        }
    );
    let hammer = warehouse.find_product(ProductId::new(1), None).unwrap();
    assert_eq!(hammer.quantity, 10);
}

#[test]
fn zeroed_product_cannot_be_decreased() {
    let mut warehouse = tools_and_food();
    warehouse
        .set_quantity(ProductId::new(1), 0, Some("Tools"))
        .unwrap();
    assert!(matches!(
        warehouse.decrease(ProductId::new(1), 1, Some("Tools")),
        Err(WarehouseError::InsufficientStock { available: 0, .. })
    ));
}

#[test]
fn deleting_a_category_drops_its_products() {
    let mut warehouse = tools_and_food();
    let removed = warehouse.delete_category("Tools").unwrap();
    assert_eq!(removed.products.len(), 3);
    assert!(matches!(
        warehouse.category("Tools"),
        Err(WarehouseError::CategoryNotFound(_))
    ));
    assert!(matches!(
        warehouse.find_product(ProductId::new(1), None),
        Err(WarehouseError::ProductNotFound(_))
    ));
    assert_eq!(warehouse.index().names(), vec!["Food"]);
}

#[test]
fn empty_category_cannot_be_analyzed() {
    let warehouse = tools_and_food();
    assert_eq!(
        warehouse.analyze_category("Food"),
        Err(WarehouseError::EmptyInput("Food".to_string()))
    );
    assert!(analyze(&ProductCollection::new()).is_err());
}

#[test]
fn deletes_keep_the_index_ordered() {
    let mut warehouse = Warehouse::new();
    let names = [
        "Paint", "Electrical", "Tools", "Adhesives", "Garden", "Safety", "Plumbing", "Hardware",
        "Lumber", "Fasteners",
    ];
    for name in names {
        warehouse.add_category(name).unwrap();
    }

    for victim in ["Paint", "Adhesives", "Safety", "Garden", "Nope"] {
        let _ = warehouse.delete_category(victim);
        let remaining = warehouse.index().names();
        assert!(remaining.windows(2).all(|w| w[0] < w[1]));
        assert!(!warehouse.index().contains(victim));
    }
    assert_eq!(
        warehouse.index().names(),
        vec!["Electrical", "Fasteners", "Hardware", "Lumber", "Plumbing", "Tools"]
    );
}

#[test]
fn store_text_round_trip() {
    let mut warehouse = tools_and_food();
    warehouse
        .add_product("Food", ProductId::new(9), "Rice", 40)
        .unwrap();

    let text = warehouse_core::records::render(&warehouse.records());
    let parsed = warehouse_core::records::parse(&text);
    assert!(parsed.errors.is_empty());

    let mut reloaded = Warehouse::new();
    let report = reloaded.load_records(parsed.records);
    assert!(report.skipped.is_empty());
    assert_eq!(reloaded.display_all(), warehouse.display_all());
    assert_eq!(reloaded.list_all_sorted(), warehouse.list_all_sorted());
}

#[test]
fn display_all_renders_every_category() {
    let warehouse = tools_and_food();
    let text = format_categories(warehouse.index());
    assert!(text.starts_with("Category: Food\nCategory: Tools\n"));
    assert!(text.contains("  Product ID: 1, Name: Hammer, Quantity: 10\n"));
}
