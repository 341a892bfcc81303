//! Product commands.

use anyhow::{Context as _, Result};
use warehouse_core::{ProductId, Warehouse};

use super::{load, with_store, ProductArgs, ProductCommand};
use crate::context::Context;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductCommand::Add {
            category,
            id,
            name,
            quantity,
        } => with_store(ctx, |warehouse| add(warehouse, &category, id, &name, quantity, ctx)),
        ProductCommand::Show { id, category } => show(&load(ctx)?, id, category.as_deref(), ctx),
    }
}

/// Add a product to an existing category.
pub fn add(
    warehouse: &mut Warehouse,
    category: &str,
    id: ProductId,
    name: &str,
    quantity: u64,
    ctx: &Context,
) -> Result<()> {
    let product = warehouse
        .add_product(category, id, name, quantity)
        .with_context(|| format!("Cannot add product {}", id))?;

    ctx.logger
        .info_builder("product added")
        .field("category", category)
        .field_i64("product_id", id.get())
        .field_u64("quantity", quantity)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(product);
    } else {
        ctx.output.success(&format!(
            "Product {} '{}' added to '{}'.",
            product.id, product.name, product.category
        ));
    }
    Ok(())
}

/// Show one product.
pub fn show(
    warehouse: &Warehouse,
    id: ProductId,
    category: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    let product = warehouse.find_product(id, category)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&format!("Product {}", product.id));
    ctx.output.kv("name", &product.name);
    ctx.output.kv("category", &product.category);
    ctx.output.kv("quantity", &product.quantity.to_string());
    if product.is_out_of_stock() {
        ctx.output.warn("Out of stock");
    }
    Ok(())
}
