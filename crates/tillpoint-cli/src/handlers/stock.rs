//! Stock level and purchase order handlers.

use anyhow::Result;
use tillpoint_core::{NewPurchaseOrder, StockAdjustment, StockLevel};

use crate::bootstrap::CliContext;
use crate::presentation::{order_row, print_separator, stock_row, suggestion_row};
use crate::stock_commands::StockCommand;

pub async fn execute(ctx: &CliContext, command: StockCommand) -> Result<()> {
    let inventory = ctx.app().inventory();

    match command {
        StockCommand::Show => print_levels(&inventory.list_stock().await?, "No products are stocked yet."),
        StockCommand::Low => print_levels(&inventory.low_stock().await?, "Nothing is low on stock."),
        StockCommand::Adjust {
            product_id,
            delta,
            reason,
        } => {
            let level = inventory
                .adjust(StockAdjustment {
                    product_id,
                    delta,
                    reason,
                })
                .await?;
            println!("{}: {} on hand", level.product_name, level.on_hand);
            if level.is_low() {
                println!("Warning: at or below reorder threshold ({})", level.reorder_threshold);
            }
        }
        StockCommand::Threshold { product_id, value } => {
            let level = inventory.set_threshold(product_id, value).await?;
            println!(
                "{}: reorder threshold set to {}",
                level.product_name, level.reorder_threshold
            );
        }
        StockCommand::Suggest => {
            let suggestions = inventory.reorder_suggestions().await?;
            if suggestions.is_empty() {
                println!("No reorders needed.");
            }
            for suggestion in &suggestions {
                println!("{}", suggestion_row(suggestion));
            }
        }
        StockCommand::Order {
            product_id,
            quantity,
            note,
        } => {
            let order = inventory
                .create_order(NewPurchaseOrder {
                    product_id,
                    quantity,
                    note,
                })
                .await?;
            println!("Created purchase order {} ({})", order.id, order.status.as_str());
        }
        StockCommand::Orders => {
            let orders = inventory.list_orders().await?;
            if orders.is_empty() {
                println!("No purchase orders.");
            }
            for order in &orders {
                println!("{}", order_row(order));
            }
        }
        StockCommand::Submit { id } => {
            let order = inventory.submit_order(id).await?;
            println!("Purchase order {} is {}", order.id, order.status.as_str());
        }
        StockCommand::Receive { id } => {
            let order = inventory.receive_order(id).await?;
            let level = inventory.stock(order.product_id).await?;
            println!(
                "Received {} into stock; {} now has {} on hand",
                order.quantity, level.product_name, level.on_hand
            );
        }
        StockCommand::Cancel { id } => {
            let order = inventory.cancel_order(id).await?;
            println!("Purchase order {} is {}", order.id, order.status.as_str());
        }
    }

    Ok(())
}

fn print_levels(levels: &[StockLevel], empty_message: &str) {
    if levels.is_empty() {
        println!("{empty_message}");
        return;
    }
    println!("  {:<5} {:<30} {:>8} {:>10}", "ID", "Item", "On hand", "Threshold");
    print_separator(58);
    for level in levels {
        println!("{}", stock_row(level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use tillpoint_core::{CoreError, Money, NewProduct, PurchaseOrderStatus};

    async fn product(ctx: &CliContext) -> i64 {
        ctx.app()
            .catalog()
            .add(NewProduct::new("Sourdough", Money::from_minor_units(550).unwrap()))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_order_lifecycle_moves_stock() {
        let (_db, ctx) = context().await;
        let id = product(&ctx).await;

        execute(
            &ctx,
            StockCommand::Order {
                product_id: id,
                quantity: 8,
                note: None,
            },
        )
        .await
        .unwrap();
        let order_id = ctx.app().inventory().list_orders().await.unwrap()[0].id;

        execute(&ctx, StockCommand::Submit { id: order_id }).await.unwrap();
        execute(&ctx, StockCommand::Receive { id: order_id }).await.unwrap();

        let order = ctx.app().inventory().get_order(order_id).await.unwrap();
        assert_eq!(order.status, PurchaseOrderStatus::Received);
        assert_eq!(ctx.app().inventory().stock(id).await.unwrap().on_hand, 8);

        let err = execute(&ctx, StockCommand::Cancel { id: order_id })
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidTransition(_))
        ));
    }

    #[tokio::test]
    async fn test_adjust_and_threshold() {
        let (_db, ctx) = context().await;
        let id = product(&ctx).await;

        execute(
            &ctx,
            StockCommand::Adjust {
                product_id: id,
                delta: 3,
                reason: "count".to_string(),
            },
        )
        .await
        .unwrap();
        execute(&ctx, StockCommand::Threshold { product_id: id, value: 1 })
            .await
            .unwrap();

        let level = ctx.app().inventory().stock(id).await.unwrap();
        assert_eq!(level.on_hand, 3);
        assert!(!level.is_low());

        let result = execute(
            &ctx,
            StockCommand::Adjust {
                product_id: id,
                delta: -4,
                reason: "waste".to_string(),
            },
        )
        .await;
        assert!(result.is_err());

        execute(&ctx, StockCommand::Show).await.unwrap();
        execute(&ctx, StockCommand::Low).await.unwrap();
        execute(&ctx, StockCommand::Suggest).await.unwrap();
    }
}
