//! Kitchen ticket handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::KitchenCommand;
use crate::presentation::ticket_row;

pub async fn execute(ctx: &CliContext, command: KitchenCommand) -> Result<()> {
    let kitchen = ctx.app().kitchen();

    match command {
        KitchenCommand::List => {
            let tickets = kitchen.open_tickets().await?;
            if tickets.is_empty() {
                println!("No open tickets.");
            }
            for ticket in &tickets {
                println!("{}", ticket_row(ticket));
            }
        }
        KitchenCommand::Ack { id } => {
            let ticket = kitchen.acknowledge(id).await?;
            println!("Ticket {} {}", ticket.id, ticket.status.as_str());
        }
        KitchenCommand::Ready { id } => {
            let ticket = kitchen.mark_ready(id).await?;
            println!("Ticket {} {}", ticket.id, ticket.status.as_str());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;

    #[tokio::test]
    async fn test_ready_requires_acknowledgement() {
        let (_db, ctx) = context().await;
        let ticket = ctx
            .app()
            .kitchen()
            .communicate_order("Bar: 1x lemonade")
            .await
            .unwrap();

        assert!(execute(&ctx, KitchenCommand::Ready { id: ticket.id }).await.is_err());
        execute(&ctx, KitchenCommand::Ack { id: ticket.id }).await.unwrap();
        execute(&ctx, KitchenCommand::Ready { id: ticket.id }).await.unwrap();

        assert!(ctx.app().kitchen().open_tickets().await.unwrap().is_empty());
        execute(&ctx, KitchenCommand::List).await.unwrap();
    }
}
