//! Initialize a warehouse directory.

use std::fs;

use anyhow::{bail, Result};

use super::InitArgs;
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the init command.
pub fn run(args: InitArgs, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("warehouse.toml");

    if config_path.exists() && !args.force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    let store_path = ctx.cwd.join("products.txt");
    if store_path.exists() {
        ctx.output
            .info(&format!("Keeping existing store: {}", store_path.display()));
    } else {
        fs::write(&store_path, "")?;
        ctx.output.success(&format!("Created: {}", store_path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": config_path.display().to_string(),
            "store": store_path.display().to_string(),
        }));
    } else {
        ctx.output.info("");
        ctx.output.info("Next steps:");
        ctx.output.list_item("warehouse category add <name>");
        ctx.output.list_item("warehouse product add <category> <id> <name> <quantity>");
        ctx.output.list_item("warehouse shell");
    }

    Ok(())
}
