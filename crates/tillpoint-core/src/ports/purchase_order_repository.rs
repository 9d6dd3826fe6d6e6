//! Purchase order repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderStatus};

/// Repository for purchase orders.
///
/// Status changes are compare-and-set: the update only applies if the order
/// is still in `from`. Otherwise `RepositoryError::Conflict` is returned.
#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    /// Insert a new order in `draft` status.
    async fn insert(&self, order: &NewPurchaseOrder) -> Result<PurchaseOrder, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<PurchaseOrder, RepositoryError>;

    /// List all orders, newest first.
    async fn list(&self) -> Result<Vec<PurchaseOrder>, RepositoryError>;

    async fn update_status(
        &self,
        id: i64,
        from: PurchaseOrderStatus,
        to: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder, RepositoryError>;

    /// Mark a submitted order received and add its quantity to stock, in one
    /// transaction.
    async fn receive(&self, id: i64) -> Result<PurchaseOrder, RepositoryError>;
}
