//! Interactive menu shell.

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use warehouse_core::{ProductId, Warehouse};

use super::{category, product, report, stock, StockCommand};
use crate::auth::Authenticator;
use crate::context::Context;

const LOGIN_ATTEMPTS: usize = 3;

/// One entry of the shell menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddCategory,
    DeleteCategory,
    AddProduct,
    UpdateStock,
    DecreaseStock,
    Restock,
    DisplayAll,
    Analyze,
    ListProducts,
    Save,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 11] = [
        MenuAction::AddCategory,
        MenuAction::DeleteCategory,
        MenuAction::AddProduct,
        MenuAction::UpdateStock,
        MenuAction::DecreaseStock,
        MenuAction::Restock,
        MenuAction::DisplayAll,
        MenuAction::Analyze,
        MenuAction::ListProducts,
        MenuAction::Save,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddCategory => "Add category",
            MenuAction::DeleteCategory => "Delete category",
            MenuAction::AddProduct => "Add product to a category",
            MenuAction::UpdateStock => "Update product stock",
            MenuAction::DecreaseStock => "Decrease product stock",
            MenuAction::Restock => "Restock product",
            MenuAction::DisplayAll => "Display all categories and products",
            MenuAction::Analyze => "Analyze a category",
            MenuAction::ListProducts => "Print product list",
            MenuAction::Save => "Save",
            MenuAction::Exit => "Exit",
        }
    }

    /// Whether the action can change the warehouse.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            MenuAction::AddCategory
                | MenuAction::DeleteCategory
                | MenuAction::AddProduct
                | MenuAction::UpdateStock
                | MenuAction::DecreaseStock
                | MenuAction::Restock
        )
    }
}

/// Run the interactive shell.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive shell does not support --json");
    }

    let theme = ColorfulTheme::default();

    if ctx.config.auth.enabled {
        login(&theme, ctx)?;
    }

    let store = ctx.store();
    let mut warehouse = store.load(&ctx.logger)?;
    let mut dirty = false;

    ctx.output.info(&format!(
        "Loaded {} categories and {} products from {}",
        warehouse.index().len(),
        warehouse.product_count(),
        store.path().display()
    ));

    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Warehouse menu")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[choice];

        match action {
            MenuAction::Exit => break,
            MenuAction::Save => {
                store.save(&warehouse, &ctx.logger)?;
                dirty = false;
                ctx.output
                    .success(&format!("Saved to {}", store.path().display()));
            }
            _ => match perform(action, &mut warehouse, &theme, ctx) {
                Ok(()) => dirty |= action.is_mutating(),
                Err(e) => ctx.output.warn(&format!("{:#}", e)),
            },
        }
    }

    if dirty {
        store.save(&warehouse, &ctx.logger)?;
        ctx.output
            .success(&format!("Saved to {}", store.path().display()));
    }
    ctx.output.info("Exiting...");
    Ok(())
}

fn login(theme: &ColorfulTheme, ctx: &Context) -> Result<()> {
    let auth = Authenticator::from_config(&ctx.config.auth, &ctx.base_dir())?;
    if auth.is_empty() {
        bail!("Login is enabled but no users are configured");
    }
    ctx.logger
        .debug_builder("users loaded")
        .field_u64("users", auth.len() as u64)
        .emit();

    for attempt in 1..=LOGIN_ATTEMPTS {
        let username: String = Input::with_theme(theme)
            .with_prompt("Username")
            .interact_text()?;
        let password = Password::with_theme(theme)
            .with_prompt("Password")
            .interact()?;

        if auth.verify(&username, &password) {
            ctx.logger
                .info_builder("login succeeded")
                .field("username", username.as_str())
                .emit();
            ctx.output.success("Login successful!");
            return Ok(());
        }

        ctx.logger
            .warn_builder("login failed")
            .field("username", username.as_str())
            .field_u64("attempt", attempt as u64)
            .emit();
        ctx.output.warn("Invalid username or password.");
    }

    bail!("Login failed after {} attempts", LOGIN_ATTEMPTS)
}

fn perform(
    action: MenuAction,
    warehouse: &mut Warehouse,
    theme: &ColorfulTheme,
    ctx: &Context,
) -> Result<()> {
    match action {
        MenuAction::AddCategory => {
            let name = prompt_text(theme, "Category name")?;
            category::add(warehouse, &name, false, ctx)
        }
        MenuAction::DeleteCategory => {
            let name = prompt_text(theme, "Category name to delete")?;
            category::delete(warehouse, &name, ctx)
        }
        MenuAction::AddProduct => {
            category::list(warehouse, ctx)?;
            let category = prompt_text(theme, "Category to add the product to")?;
            let id = prompt_id(theme, "Product ID")?;
            let name = prompt_text(theme, "Product name")?;
            let quantity = prompt_amount(theme, "Quantity")?;
            product::add(warehouse, &category, id, &name, quantity, ctx)
        }
        MenuAction::UpdateStock => {
            let id = prompt_id(theme, "Product ID to update")?;
            let quantity = prompt_amount(theme, "New quantity")?;
            stock::apply(
                warehouse,
                StockCommand::Set {
                    id,
                    quantity,
                    category: None,
                },
                ctx,
            )
        }
        MenuAction::DecreaseStock => {
            let id = prompt_id(theme, "Product ID to decrease")?;
            let amount = prompt_amount(theme, "Quantity to decrease")?;
            stock::apply(
                warehouse,
                StockCommand::Decrease {
                    id,
                    amount,
                    category: None,
                },
                ctx,
            )
        }
        MenuAction::Restock => {
            let id = prompt_id(theme, "Product ID to restock")?;
            let amount = prompt_amount(theme, "Quantity to add")?;
            stock::apply(
                warehouse,
                StockCommand::Restock {
                    id,
                    amount,
                    category: None,
                },
                ctx,
            )
        }
        MenuAction::DisplayAll => report::display(warehouse, ctx),
        MenuAction::Analyze => {
            let name = prompt_text(theme, "Category to analyze")?;
            report::analyze(warehouse, &name, ctx)
        }
        MenuAction::ListProducts => {
            let name = prompt_text(theme, "Category (empty for all)")?;
            let category = Some(name.as_str()).filter(|n| !n.is_empty());
            report::list(warehouse, category, ctx)
        }
        MenuAction::Save | MenuAction::Exit => Ok(()),
    }
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_id(theme: &ColorfulTheme, prompt: &str) -> Result<ProductId> {
    Ok(Input::with_theme(theme).with_prompt(prompt).interact_text()?)
}

fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<u64> {
    Ok(Input::with_theme(theme).with_prompt(prompt).interact_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_are_distinct() {
        let mut labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuAction::ALL.len());
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Exit));
    }

    #[test]
    fn test_mutating_actions() {
        let mutating: Vec<MenuAction> = MenuAction::ALL
            .iter()
            .copied()
            .filter(|a| a.is_mutating())
            .collect();
        assert_eq!(mutating.len(), 6);
        assert!(!MenuAction::DisplayAll.is_mutating());
        assert!(!MenuAction::Save.is_mutating());
    }
}
