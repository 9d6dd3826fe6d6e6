//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_inventory_repository;
mod sqlite_kitchen_ticket_repository;
mod sqlite_payment_repository;
mod sqlite_price_history_repository;
mod sqlite_product_repository;
mod sqlite_purchase_order_repository;
mod sqlite_settings_repository;

pub use sqlite_inventory_repository::SqliteInventoryRepository;
pub use sqlite_kitchen_ticket_repository::SqliteKitchenTicketRepository;
pub use sqlite_payment_repository::SqlitePaymentRepository;
pub use sqlite_price_history_repository::SqlitePriceHistoryRepository;
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_purchase_order_repository::SqlitePurchaseOrderRepository;
pub use sqlite_settings_repository::SqliteSettingsRepository;
