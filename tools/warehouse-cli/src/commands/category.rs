//! Category commands.

use anyhow::Result;
use serde::Serialize;
use warehouse_core::prelude::*;

use super::{load, with_store, CategoryArgs, CategoryCommand};
use crate::context::Context;

/// Run the category command.
pub fn run(args: CategoryArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CategoryCommand::Add { name, strict } => {
            with_store(ctx, |warehouse| add(warehouse, &name, strict, ctx))
        }
        CategoryCommand::Delete { name } => {
            with_store(ctx, |warehouse| delete(warehouse, &name, ctx))
        }
        CategoryCommand::List => list(&load(ctx)?, ctx),
    }
}

#[derive(Serialize)]
struct CategorySummary<'a> {
    name: &'a str,
    products: usize,
    total_quantity: u64,
}

/// Add a category. Without `strict`, an existing category is left as is.
pub fn add(warehouse: &mut Warehouse, name: &str, strict: bool, ctx: &Context) -> Result<()> {
    let created = if strict {
        warehouse.create_category(name)?;
        true
    } else {
        warehouse.add_category(name)?.is_inserted()
    };

    ctx.logger
        .info_builder("category added")
        .field("category", name)
        .field_bool("created", created)
        .emit();

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "category": name, "created": created }));
    } else if created {
        ctx.output.success(&format!("Category '{}' added.", name));
    } else {
        ctx.output.info(&format!("Category '{}' already exists.", name));
    }
    Ok(())
}

/// Delete a category together with its products.
pub fn delete(warehouse: &mut Warehouse, name: &str, ctx: &Context) -> Result<()> {
    let removed = warehouse.delete_category(name)?;

    ctx.logger
        .info_builder("category deleted")
        .field("category", name)
        .field_u64("products_removed", removed.products.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "category": removed.name,
            "products_removed": removed.products.len(),
        }));
    } else {
        ctx.output.success(&format!(
            "Category '{}' deleted with {} product(s).",
            removed.name,
            removed.products.len()
        ));
    }
    Ok(())
}

/// List categories in name order.
pub fn list(warehouse: &Warehouse, ctx: &Context) -> Result<()> {
    let summaries = warehouse
        .categories()
        .map(|c| {
            Ok(CategorySummary {
                name: &c.name,
                products: c.products.len(),
                total_quantity: c.total_quantity()?,
            })
        })
        .collect::<warehouse_core::Result<Vec<CategorySummary<'_>>>>()?;

    if ctx.output.is_json() {
        ctx.output.json(&summaries);
        return Ok(());
    }

    if summaries.is_empty() {
        ctx.output.info("No categories.");
        return Ok(());
    }

    ctx.output.header("Categories");
    for summary in &summaries {
        ctx.output.list_item(&format!(
            "{} ({} product(s), {} in stock)",
            summary.name, summary.products, summary.total_quantity
        ));
    }
    Ok(())
}
