//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `money` - Exact monetary amounts
//! - `product` - Sellable menu items
//! - `inventory` - Stock levels and purchase orders
//! - `payment` - Payment requests and ledger entries
//! - `kitchen` - Kitchen tickets
//! - `menu` - Price change audit records

pub mod inventory;
pub mod kitchen;
pub mod menu;
pub mod money;
pub mod payment;
mod product;

pub use inventory::{
    NewPurchaseOrder, PurchaseOrder, PurchaseOrderStatus, ReorderSuggestion, StockAdjustment,
    StockLevel,
};
pub use kitchen::{KitchenTicket, MAX_TICKET_DETAILS_LEN, TicketStatus, validate_ticket_details};
pub use menu::{NewPriceChange, PriceChange};
pub use money::{Money, MoneyError};
pub use payment::{NewPayment, Payment, PaymentMethod, PaymentRequest, PaymentStatus};
pub use product::{MAX_PRODUCT_NAME_LEN, NewProduct, Product, validate_product_name};
