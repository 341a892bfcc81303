//! Read-only reports: display, analyze, list.

use anyhow::Result;
use serde::Serialize;
use warehouse_core::prelude::*;

use super::{load, AnalyzeArgs, ListArgs};
use crate::context::Context;
use crate::output::low_stock_badge;

pub fn run_display(ctx: &Context) -> Result<()> {
    display(&load(ctx)?, ctx)
}

pub fn run_analyze(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    analyze(&load(ctx)?, &args.category, ctx)
}

pub fn run_list(args: ListArgs, ctx: &Context) -> Result<()> {
    list(&load(ctx)?, args.category.as_deref(), ctx)
}

#[derive(Serialize)]
struct CategoryView<'a> {
    name: &'a str,
    products: Vec<&'a Product>,
}

/// Every category in name order with its products, newest first.
pub fn display(warehouse: &Warehouse, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let view: Vec<CategoryView<'_>> = warehouse
            .categories()
            .map(|c| CategoryView {
                name: &c.name,
                products: c.products.iter().collect(),
            })
            .collect();
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header("All Categories and Products");
    ctx.output.report(&warehouse.display_all());
    Ok(())
}

/// Analysis report for one category.
pub fn analyze(warehouse: &Warehouse, category: &str, ctx: &Context) -> Result<()> {
    let result = warehouse.analyze_category(category)?;

    ctx.logger
        .debug_builder("category analyzed")
        .field("category", category)
        .field_u64("total", result.total_quantity)
        .field_f64("average", result.average_quantity)
        .field_u64("low", result.low_stock.len() as u64)
        .field_u64("high", result.high_stock.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    ctx.output.header(&format!("Analysis Report: {}", category));
    ctx.output.report(&format_analysis(&result));

    if ctx.config.report.low_stock_alerts && !result.low_stock.is_empty() {
        ctx.output.warn(&format!(
            "{} product(s) below the average of {:.2}:",
            result.low_stock.len(),
            result.average_quantity
        ));
        for product in &result.low_stock {
            ctx.output.list_item(&format!(
                "{} (ID {}): {}",
                product.name,
                product.id,
                low_stock_badge(product.quantity)
            ));
        }
    }
    Ok(())
}

/// Product list sorted by ID, for one category or all of them.
pub fn list(warehouse: &Warehouse, category: Option<&str>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let products: Vec<&Product> = match category {
            Some(name) => warehouse.category(name)?.products.sorted_by_id(),
            None => warehouse
                .categories()
                .flat_map(|c| c.products.sorted_by_id())
                .collect(),
        };
        ctx.output.json(&products);
        return Ok(());
    }

    let text = match category {
        Some(name) => warehouse.list_sorted(name)?,
        None => warehouse.list_all_sorted(),
    };
    ctx.output.header("Inventory List");
    ctx.output.report(&text);
    Ok(())
}
