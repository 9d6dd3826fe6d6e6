//! Payment gateway port.
//!
//! The gateway decides whether a payment is approved. Only a local tender
//! adapter ships with tillpoint: the cashier takes cash or runs a standalone
//! card terminal and the till records the outcome.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PaymentRequest;

/// Result of a gateway authorization that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOutcome {
    pub approved: bool,
    /// Gateway-assigned reference, stored on the payment record.
    pub reference: String,
}

/// Gateway failures.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The gateway could not be reached; nothing was charged.
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),

    /// The gateway refused the request outright.
    #[error("Payment rejected: {reason}")]
    Rejected { reference: String, reason: String },
}

/// Port for authorizing payments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn authorize(&self, request: &PaymentRequest) -> Result<GatewayOutcome, GatewayError>;
}

/// Gateway for tender taken at the counter.
///
/// Always approves and issues a `local-<uuid>` reference.
#[derive(Debug, Clone, Default)]
pub struct LocalTenderGateway;

impl LocalTenderGateway {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGatewayPort for LocalTenderGateway {
    fn name(&self) -> &'static str {
        "local-tender"
    }

    async fn authorize(&self, request: &PaymentRequest) -> Result<GatewayOutcome, GatewayError> {
        let reference = format!("local-{}", uuid::Uuid::new_v4());
        tracing::debug!(
            target: "tillpoint.payments",
            amount = %request.amount,
            method = %request.method,
            %reference,
            "Local tender recorded"
        );
        Ok(GatewayOutcome {
            approved: true,
            reference,
        })
    }
}
