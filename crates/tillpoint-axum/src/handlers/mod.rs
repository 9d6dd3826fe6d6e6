//! HTTP request handlers for the Axum web server.
//!
//! Each submodule covers one API area. Handlers are thin wrappers that
//! delegate to the `AppCore` services.

pub mod events;
pub mod index;
pub mod inventory;
pub mod kitchen;
pub mod menu;
pub mod payments;
pub mod products;
pub mod purchase_orders;
pub mod settings;
