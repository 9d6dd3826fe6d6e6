//! Payment handlers.

use anyhow::Result;
use tillpoint_core::{Money, PaymentMethod, PaymentRequest, PaymentStatus};

use super::currency;
use crate::bootstrap::CliContext;
use crate::presentation::payment_row;

/// Take a payment through the configured gateway.
pub async fn execute(
    ctx: &CliContext,
    amount: Money,
    method: PaymentMethod,
    idempotency_key: Option<String>,
) -> Result<()> {
    let request = PaymentRequest {
        amount,
        method,
        idempotency_key,
    };
    let payment = ctx.app().payments().process_payment(request).await?;
    let currency = currency(ctx).await?;

    match payment.status {
        PaymentStatus::Approved => println!(
            "Approved {} {} by {} (ref {})",
            payment.amount, currency, payment.method, payment.gateway_reference
        ),
        PaymentStatus::Declined => println!(
            "Declined {} {} by {} (ref {})",
            payment.amount, currency, payment.method, payment.gateway_reference
        ),
    }
    Ok(())
}

/// List recorded payments.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let payments = ctx.app().payments().list().await?;
    if payments.is_empty() {
        println!("No payments recorded.");
        return Ok(());
    }
    let currency = currency(ctx).await?;
    for payment in &payments {
        println!("{}", payment_row(payment, &currency));
    }
    Ok(())
}
