//! Configuration commands.

use anyhow::{bail, Result};
use warehouse_observability::LogFormat;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[store]");
    ctx.output.kv("path", &ctx.store_path().display().to_string());
    ctx.output
        .kv("create_if_missing", &ctx.config.store.create_if_missing.to_string());

    ctx.output.info("[auth]");
    ctx.output.kv("enabled", &ctx.config.auth.enabled.to_string());
    if let Some(ref file) = ctx.config.auth.users_file {
        ctx.output.kv("users_file", &file.display().to_string());
    }
    ctx.output.kv("users", &ctx.config.auth.users.len().to_string());

    ctx.output.info("[logging]");
    let format = match ctx.config.logging.format {
        LogFormat::Json => "json",
        LogFormat::Human => "human",
    };
    ctx.output.kv("format", format);
    ctx.output.kv("level", &ctx.config.logging.level);

    ctx.output.info("[report]");
    ctx.output
        .kv("low_stock_alerts", &ctx.config.report.low_stock_alerts.to_string());

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
            "warnings": warnings,
        }));
    } else {
        for warning in &warnings {
            ctx.output.warn(warning);
        }
        for error in &errors {
            ctx.output.error(error);
        }
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}
