//! Payment ledger repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPayment, Payment};

/// Repository for the payment ledger. Payments are append-only.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Record a payment.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if another payment
    /// already uses the same idempotency key.
    async fn insert(&self, payment: &NewPayment) -> Result<Payment, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Payment, RepositoryError>;

    async fn find_by_idempotency_key(&self, key: &str)
    -> Result<Option<Payment>, RepositoryError>;

    /// List all payments, newest first.
    async fn list(&self) -> Result<Vec<Payment>, RepositoryError>;
}
