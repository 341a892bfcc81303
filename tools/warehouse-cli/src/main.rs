//! Warehouse CLI - Command line driver for the warehouse inventory engine.
//!
//! Commands:
//! - `warehouse init` - Create a config file and an empty store
//! - `warehouse config` - Show or validate configuration
//! - `warehouse category` - Add, delete, and list categories
//! - `warehouse product` - Add and show products
//! - `warehouse stock` - Set, decrease, and restock quantities
//! - `warehouse display` - Show every category and its products
//! - `warehouse analyze` - Stock analysis for one category
//! - `warehouse list` - Product list sorted by ID
//! - `warehouse shell` - Interactive menu

mod auth;
mod commands;
mod config;
mod context;
mod output;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    AnalyzeArgs, CategoryArgs, ConfigArgs, InitArgs, ListArgs, ProductArgs, StockArgs,
};

/// Warehouse CLI - Manage categories, products, and stock levels
#[derive(Parser)]
#[command(name = "warehouse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Store file path, overriding the config
    #[arg(short, long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create warehouse.toml and an empty store
    Init(InitArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Manage categories
    Category(CategoryArgs),

    /// Manage products
    Product(ProductArgs),

    /// Change stock levels
    Stock(StockArgs),

    /// Display all categories and products
    Display,

    /// Analyze stock levels in a category
    Analyze(AnalyzeArgs),

    /// Print the product list sorted by ID
    List(ListArgs),

    /// Start the interactive menu
    Shell,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init(_) => "init",
            Commands::Config(_) => "config",
            Commands::Category(_) => "category",
            Commands::Product(_) => "product",
            Commands::Stock(_) => "stock",
            Commands::Display => "display",
            Commands::Analyze(_) => "analyze",
            Commands::List(_) => "list",
            Commands::Shell => "shell",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let loaded = context::Context::load(cli.config.as_deref(), cli.store.as_deref(), output.clone());
    let mut ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    ctx.set_command(cli.command.name());
    ctx.output.debug(&format!("Store: {}", ctx.store_path().display()));

    // Execute command
    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
        Commands::Category(args) => commands::category::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Stock(args) => commands::stock::run(args, &ctx),
        Commands::Display => commands::report::run_display(&ctx),
        Commands::Analyze(args) => commands::report::run_analyze(args, &ctx),
        Commands::List(args) => commands::report::run_list(args, &ctx),
        Commands::Shell => commands::shell::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
