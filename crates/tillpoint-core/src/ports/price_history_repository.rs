//! Price history repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPriceChange, PriceChange};

#[async_trait]
pub trait PriceHistoryRepository: Send + Sync {
    /// Set the product's price to `new_price` and append the audit row,
    /// both or neither.
    ///
    /// The price is only swapped while it still equals `old_price`; a
    /// concurrent change yields `Conflict`, a missing product `NotFound`.
    async fn record(&self, change: &NewPriceChange) -> Result<PriceChange, RepositoryError>;

    /// Changes for one product, newest first.
    async fn list_for_product(&self, product_id: i64)
    -> Result<Vec<PriceChange>, RepositoryError>;
}
