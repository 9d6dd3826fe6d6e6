//! Kitchen ticket repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{KitchenTicket, TicketStatus};

#[async_trait]
pub trait KitchenTicketRepository: Send + Sync {
    /// Insert a new `pending` ticket.
    async fn insert(&self, details: &str) -> Result<KitchenTicket, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<KitchenTicket, RepositoryError>;

    /// Tickets not yet marked ready, oldest first.
    async fn list_open(&self) -> Result<Vec<KitchenTicket>, RepositoryError>;

    /// Compare-and-set status change; `Conflict` if the ticket is no longer in `from`.
    async fn update_status(
        &self,
        id: i64,
        from: TicketStatus,
        to: TicketStatus,
    ) -> Result<KitchenTicket, RepositoryError>;
}
