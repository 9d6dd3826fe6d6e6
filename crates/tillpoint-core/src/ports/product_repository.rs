//! Product repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product};

/// Repository for product persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - No update: price changes go through `PriceHistoryRepository::record`
///   so the new price and its audit row land together
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products ordered by name.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;

    /// Returns `Err(RepositoryError::NotFound)` if no product has that name.
    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError>;

    /// Insert a new product together with its zero stock row, in one
    /// transaction, and return it with its assigned ID.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn insert(
        &self,
        product: &NewProduct,
        reorder_threshold: i64,
    ) -> Result<Product, RepositoryError>;

    /// Delete a product and its stock row.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
