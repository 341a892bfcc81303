//! Stock level commands.

use anyhow::Result;
use warehouse_core::{StockChange, Warehouse};

use super::{with_store, StockArgs, StockCommand};
use crate::context::Context;

/// Run the stock command.
pub fn run(args: StockArgs, ctx: &Context) -> Result<()> {
    with_store(ctx, |warehouse| apply(warehouse, args.command, ctx))
}

/// Apply one stock command to a loaded warehouse.
pub fn apply(warehouse: &mut Warehouse, command: StockCommand, ctx: &Context) -> Result<()> {
    let (action, change) = match command {
        StockCommand::Set {
            id,
            quantity,
            category,
        } => (
            "set",
            warehouse.set_quantity(id, quantity, category.as_deref())?,
        ),
        StockCommand::Decrease {
            id,
            amount,
            category,
        } => (
            "decrease",
            warehouse.decrease(id, amount, category.as_deref())?,
        ),
        StockCommand::Restock {
            id,
            amount,
            category,
        } => (
            "restock",
            warehouse.restock(id, amount, category.as_deref())?,
        ),
    };

    report(action, &change, ctx);
    Ok(())
}

fn report(action: &str, change: &StockChange, ctx: &Context) {
    ctx.logger
        .info_builder("stock changed")
        .field("action", action)
        .field("category", change.category.as_str())
        .field_i64("product_id", change.product_id.get())
        .field_u64("previous", change.previous)
        .field_u64("quantity", change.quantity)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(change);
        return;
    }

    ctx.output.success(&format!(
        "Product {} in '{}': {} -> {}",
        change.product_id, change.category, change.previous, change.quantity
    ));
    if change.quantity == 0 {
        ctx.output
            .warn(&format!("Product {} is now out of stock.", change.product_id));
    }
}
