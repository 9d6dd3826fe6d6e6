//! Canonical event union for all adapters.
//!
//! Events feed the kitchen display and any other live client over SSE.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag and camelCase fields:
//!
//! ```json
//! { "type": "stock_low", "productId": 3, "productName": "Oat milk", "onHand": 1, "reorderThreshold": 4 }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{KitchenTicket, Money, Payment, PaymentStatus, Product};

/// Canonical event types for all adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AppEvent {
    // ========== Kitchen Events ==========
    /// A new order was sent to the kitchen.
    KitchenOrderPlaced { ticket: KitchenTicket },

    /// A ticket was acknowledged or marked ready.
    KitchenTicketUpdated { ticket: KitchenTicket },

    // ========== Inventory Events ==========
    /// Stock for a product fell to or below its reorder threshold.
    StockLow {
        product_id: i64,
        product_name: String,
        on_hand: i64,
        reorder_threshold: i64,
    },

    // ========== Menu Events ==========
    MenuPriceChanged {
        product_id: i64,
        product_name: String,
        old_price: Money,
        new_price: Money,
    },

    // ========== Payment Events ==========
    PaymentCompleted {
        payment_id: i64,
        amount: Money,
        status: PaymentStatus,
    },
}

impl AppEvent {
    pub fn price_changed(product: &Product, old_price: Money) -> Self {
        Self::MenuPriceChanged {
            product_id: product.id,
            product_name: product.name.clone(),
            old_price,
            new_price: product.price,
        }
    }

    pub const fn payment_completed(payment: &Payment) -> Self {
        Self::PaymentCompleted {
            payment_id: payment.id,
            amount: payment.amount,
            status: payment.status,
        }
    }

    /// The `type` tag this event serializes with.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::KitchenOrderPlaced { .. } => "kitchen_order_placed",
            Self::KitchenTicketUpdated { .. } => "kitchen_ticket_updated",
            Self::StockLow { .. } => "stock_low",
            Self::MenuPriceChanged { .. } => "menu_price_changed",
            Self::PaymentCompleted { .. } => "payment_completed",
        }
    }
}
