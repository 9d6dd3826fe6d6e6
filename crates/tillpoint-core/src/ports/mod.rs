//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repository traits are small and storage-focused
//! - Multi-row invariants (receiving stock, idempotent payments) are enforced
//!   by the implementation in a single transaction or unique index

pub mod event_emitter;
pub mod inventory_repository;
pub mod kitchen_repository;
pub mod payment_gateway;
pub mod payment_repository;
pub mod price_history_repository;
pub mod product_repository;
pub mod purchase_order_repository;
pub mod settings_repository;

use std::sync::Arc;
use thiserror::Error;

pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use inventory_repository::InventoryRepository;
pub use kitchen_repository::KitchenTicketRepository;
pub use payment_gateway::{GatewayError, GatewayOutcome, LocalTenderGateway, PaymentGatewayPort};
pub use payment_repository::PaymentRepository;
pub use price_history_repository::PriceHistoryRepository;
pub use product_repository::ProductRepository;
pub use purchase_order_repository::PurchaseOrderRepository;
pub use settings_repository::SettingsRepository;

/// Container for all repository trait objects.
///
/// Lives in `tillpoint-core` so that `AppCore` can accept it without
/// depending on `tillpoint-db`.
#[derive(Clone)]
pub struct Repos {
    pub products: Arc<dyn ProductRepository>,
    pub inventory: Arc<dyn InventoryRepository>,
    pub purchase_orders: Arc<dyn PurchaseOrderRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub kitchen: Arc<dyn KitchenTicketRepository>,
    pub price_history: Arc<dyn PriceHistoryRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The entity changed underneath the caller (e.g. status already moved on).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., stock would go negative).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A state machine rejected the requested transition.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// External service error (payment gateway down, etc.).
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::domain::MoneyError> for CoreError {
    fn from(err: crate::domain::MoneyError) -> Self {
        Self::Validation(err.to_string())
    }
}
