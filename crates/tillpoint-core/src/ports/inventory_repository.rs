//! Inventory repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{StockAdjustment, StockLevel};

/// Repository for per-product stock levels.
///
/// Stock rows are opened by `ProductRepository::insert` and removed with
/// their product.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Returns `Err(RepositoryError::NotFound)` if the product has no stock row.
    async fn get_stock(&self, product_id: i64) -> Result<StockLevel, RepositoryError>;

    /// List stock for every product, ordered by product name.
    async fn list_stock(&self) -> Result<Vec<StockLevel>, RepositoryError>;

    async fn set_threshold(
        &self,
        product_id: i64,
        reorder_threshold: i64,
    ) -> Result<StockLevel, RepositoryError>;

    /// Apply a signed delta atomically.
    ///
    /// Returns `Err(RepositoryError::Constraint)` and leaves stock untouched
    /// if the result would be negative or would not fit in an `i64`.
    async fn apply_adjustment(
        &self,
        adjustment: &StockAdjustment,
    ) -> Result<StockLevel, RepositoryError>;
}
