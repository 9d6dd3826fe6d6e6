//! Core domain types, ports and services for tillpoint.
//!
//! This crate has no knowledge of `SQLite` or HTTP. Adapters implement the
//! traits in [`ports`] and compose everything through [`AppCore`].
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | `domain`   | Products, money, stock, purchase orders, payments     |
//! | `ports`    | Repository, gateway and event emitter traits          |
//! | `services` | Catalog, menu, inventory, payment, kitchen, settings  |
//! | `events`   | `AppEvent` union broadcast to live clients            |
//! | `settings` | Persisted application settings and validation         |
//! | `paths`    | Data directory and database location                  |

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    KitchenTicket, Money, MoneyError, NewPayment, NewPriceChange, NewProduct, NewPurchaseOrder,
    Payment, PaymentMethod, PaymentRequest, PaymentStatus, PriceChange, Product, PurchaseOrder,
    PurchaseOrderStatus, ReorderSuggestion, StockAdjustment, StockLevel, TicketStatus,
};
pub use events::AppEvent;
pub use ports::{
    AppEventEmitter, CoreError, GatewayError, GatewayOutcome, InventoryRepository,
    KitchenTicketRepository, LocalTenderGateway, NoopEmitter, PaymentGatewayPort,
    PaymentRepository, PriceHistoryRepository, ProductRepository, PurchaseOrderRepository, Repos,
    RepositoryError, SettingsRepository,
};
pub use services::AppCore;
pub use settings::{
    DEFAULT_SERVER_PORT, Settings, SettingsError, SettingsUpdate, validate_settings,
};

// Silence unused dev-dependency warnings for crates only used in some test modules
#[cfg(test)]
use tempfile as _;
