//! Communicate an order to the kitchen.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Join the words given on the command line and place a kitchen ticket.
pub async fn execute(ctx: &CliContext, details: &[String]) -> Result<()> {
    let details = details.join(" ");
    let ticket = ctx.app().kitchen().communicate_order(&details).await?;
    println!("Sent ticket {} to the kitchen: {}", ticket.id, ticket.details);
    Ok(())
}
