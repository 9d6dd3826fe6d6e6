//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow one pattern: `pub async fn execute(ctx: &CliContext, ...)
//! -> Result<()>`. They parse CLI-specific input, call a service and print
//! the result. Business rules stay in the services.

pub mod kitchen;
pub mod menu;
pub mod order;
pub mod pay;
pub mod paths;
pub mod serve;
pub mod settings;
pub mod stock;

use tillpoint_core::{CoreError, Product, RepositoryError};

use crate::bootstrap::CliContext;

/// Look up a menu item by name, failing with `NotFound` when absent.
pub(crate) async fn product_named(ctx: &CliContext, name: &str) -> Result<Product, CoreError> {
    ctx.app()
        .catalog()
        .find_by_name(name)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("Menu item '{}'", name.trim())).into())
}

/// Currency code for display.
pub(crate) async fn currency(ctx: &CliContext) -> Result<String, CoreError> {
    Ok(ctx.app().settings().get().await?.effective_currency().to_string())
}
