//! CLI command implementations.

pub mod category;
pub mod config;
pub mod init;
pub mod product;
pub mod report;
pub mod shell;
pub mod stock;

use anyhow::Result;
use clap::{Args, Subcommand};
use warehouse_core::{ProductId, Warehouse};

use crate::context::Context;

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Validate the config file.
    Validate,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Add a category.
    Add {
        /// Category name.
        name: String,
        /// Fail if the category already exists.
        #[arg(long)]
        strict: bool,
    },
    /// Delete a category and all of its products.
    Delete {
        /// Category name.
        name: String,
    },
    /// List categories in name order.
    List,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// Add a product to an existing category.
    Add {
        /// Category to file the product under.
        category: String,
        /// Product ID.
        id: ProductId,
        /// Product name.
        name: String,
        /// Initial quantity.
        quantity: u64,
    },
    /// Show one product.
    Show {
        /// Product ID.
        id: ProductId,
        /// Only look in this category.
        #[arg(long)]
        category: Option<String>,
    },
}

/// Arguments for the stock command.
#[derive(Args)]
pub struct StockArgs {
    #[command(subcommand)]
    pub command: StockCommand,
}

#[derive(Subcommand)]
pub enum StockCommand {
    /// Overwrite a product's quantity.
    Set {
        /// Product ID.
        id: ProductId,
        /// New quantity.
        quantity: u64,
        /// Only look in this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Take stock out of a product.
    Decrease {
        /// Product ID.
        id: ProductId,
        /// Amount to remove.
        amount: u64,
        /// Only look in this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Add stock to a product.
    Restock {
        /// Product ID.
        id: ProductId,
        /// Amount to add.
        amount: u64,
        /// Only look in this category.
        #[arg(long)]
        category: Option<String>,
    },
}

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Category to analyze.
    pub category: String,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only list this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Load the store, apply `apply`, and save if it succeeded.
pub fn with_store<T>(ctx: &Context, apply: impl FnOnce(&mut Warehouse) -> Result<T>) -> Result<T> {
    let store = ctx.store();
    let mut warehouse = store.load(&ctx.logger)?;
    let value = apply(&mut warehouse)?;
    store.save(&warehouse, &ctx.logger)?;
    Ok(value)
}

/// Load the store for reading.
pub fn load(ctx: &Context) -> Result<Warehouse> {
    ctx.store().load(&ctx.logger)
}
