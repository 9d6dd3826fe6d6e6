//! `SQLite` persistence for tillpoint.
//!
//! Implements every repository port from `tillpoint-core` on top of a
//! `sqlx::SqlitePool`, and wires them into an `AppCore` via [`CoreFactory`].
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::{
    SqliteInventoryRepository, SqliteKitchenTicketRepository, SqlitePaymentRepository,
    SqlitePriceHistoryRepository, SqliteProductRepository, SqlitePurchaseOrderRepository,
    SqliteSettingsRepository,
};

// Lets adapters classify driver failures without depending on sqlx
pub use sqlx::Error as DbError;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
