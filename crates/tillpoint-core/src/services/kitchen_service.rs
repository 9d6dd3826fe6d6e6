//! Kitchen service - sends orders to the kitchen display.

use std::sync::Arc;

use crate::domain::{KitchenTicket, TicketStatus, validate_ticket_details};
use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, CoreError, KitchenTicketRepository};

pub struct KitchenService {
    tickets: Arc<dyn KitchenTicketRepository>,
    emitter: Arc<dyn AppEventEmitter>,
}

impl KitchenService {
    pub fn new(
        tickets: Arc<dyn KitchenTicketRepository>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self { tickets, emitter }
    }

    /// Persist an order as a pending ticket and broadcast it to the kitchen.
    pub async fn communicate_order(&self, order_details: &str) -> Result<KitchenTicket, CoreError> {
        let details = validate_ticket_details(order_details).map_err(CoreError::Validation)?;
        let ticket = self.tickets.insert(&details).await?;

        tracing::info!(
            target: "tillpoint.kitchen",
            ticket_id = ticket.id,
            "Order sent to kitchen"
        );
        self.emitter.emit(AppEvent::KitchenOrderPlaced {
            ticket: ticket.clone(),
        });
        Ok(ticket)
    }

    /// Tickets the kitchen has not finished, oldest first.
    pub async fn open_tickets(&self) -> Result<Vec<KitchenTicket>, CoreError> {
        self.tickets.list_open().await.map_err(CoreError::from)
    }

    pub async fn acknowledge(&self, id: i64) -> Result<KitchenTicket, CoreError> {
        self.advance(id, TicketStatus::Acknowledged).await
    }

    pub async fn mark_ready(&self, id: i64) -> Result<KitchenTicket, CoreError> {
        self.advance(id, TicketStatus::Ready).await
    }

    async fn advance(&self, id: i64, to: TicketStatus) -> Result<KitchenTicket, CoreError> {
        let current = self.tickets.get_by_id(id).await?;
        if !current.status.can_transition_to(to) {
            return Err(CoreError::InvalidTransition(format!(
                "kitchen ticket {id} is {}, cannot become {to}",
                current.status
            )));
        }

        let ticket = self.tickets.update_status(id, current.status, to).await?;
        tracing::info!(
            target: "tillpoint.kitchen",
            ticket_id = id,
            from = %current.status,
            status = %ticket.status,
            "Ticket updated"
        );
        self.emitter.emit(AppEvent::KitchenTicketUpdated {
            ticket: ticket.clone(),
        });
        Ok(ticket)
    }
}
