//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod catalog_service;
mod inventory_service;
mod kitchen_service;
mod menu_service;
mod payment_service;
mod settings_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_core::AppCore;
pub use catalog_service::CatalogService;
pub use inventory_service::InventoryService;
pub use kitchen_service::KitchenService;
pub use menu_service::MenuService;
pub use payment_service::PaymentService;
pub use settings_service::SettingsService;
