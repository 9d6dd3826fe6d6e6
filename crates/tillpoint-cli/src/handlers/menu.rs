//! Menu command handlers.

use anyhow::Result;
use tillpoint_core::NewProduct;

use super::{currency, product_named};
use crate::bootstrap::CliContext;
use crate::menu_commands::MenuCommand;
use crate::presentation::{price_change_row, print_separator, product_row};

pub async fn execute(ctx: &CliContext, command: MenuCommand) -> Result<()> {
    let currency = currency(ctx).await?;

    match command {
        MenuCommand::List => {
            let products = ctx.app().catalog().list().await?;
            if products.is_empty() {
                println!("The menu is empty.");
                println!("Use 'tillpoint menu add <name> <price>' to add an item.");
                return Ok(());
            }
            println!("{:<5} {:<30} {:>10}", "ID", "Item", "Price");
            print_separator(50);
            for product in &products {
                println!("{}", product_row(product, &currency));
            }
        }
        MenuCommand::Add { name, price } => {
            let product = ctx.app().catalog().add(NewProduct::new(&name, price)).await?;
            println!(
                "Added '{}' at {} {} (ID: {})",
                product.name, product.price, currency, product.id
            );
        }
        MenuCommand::Price { name, price } => {
            let before = product_named(ctx, &name).await?;
            let product = ctx.app().menu().customize_menu_item(&name, price).await?;
            if before.price == product.price {
                println!("'{}' already costs {} {}", product.name, product.price, currency);
            } else {
                println!(
                    "'{}' now costs {} {} (was {})",
                    product.name, product.price, currency, before.price
                );
            }
        }
        MenuCommand::History { name } => {
            let product = product_named(ctx, &name).await?;
            let changes = ctx.app().menu().price_history(product.id).await?;
            if changes.is_empty() {
                println!("No price changes recorded for '{}'.", product.name);
                return Ok(());
            }
            println!("Price history for '{}':", product.name);
            for change in &changes {
                println!("  {}", price_change_row(change, &currency));
            }
        }
        MenuCommand::Remove { name } => {
            let product = product_named(ctx, &name).await?;
            let removed = ctx.app().catalog().remove(product.id).await?;
            println!("Removed '{}' (ID: {})", removed.name, removed.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use tillpoint_core::{CoreError, Money, RepositoryError};

    fn money(cents: i64) -> Money {
        Money::from_minor_units(cents).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_reprice() {
        let (_db, ctx) = context().await;

        execute(
            &ctx,
            MenuCommand::Add {
                name: "Mocha".to_string(),
                price: money(420),
            },
        )
        .await
        .unwrap();
        execute(
            &ctx,
            MenuCommand::Price {
                name: "Mocha".to_string(),
                price: money(450),
            },
        )
        .await
        .unwrap();

        let product = product_named(&ctx, "Mocha").await.unwrap();
        assert_eq!(product.price, money(450));
        let history = ctx.app().menu().price_history(product.id).await.unwrap();
        assert_eq!(history.len(), 1);

        execute(&ctx, MenuCommand::History { name: "Mocha".to_string() })
            .await
            .unwrap();
        execute(&ctx, MenuCommand::List).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let (_db, ctx) = context().await;

        let err = execute(&ctx, MenuCommand::Remove { name: "Ghost".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
    }
}
