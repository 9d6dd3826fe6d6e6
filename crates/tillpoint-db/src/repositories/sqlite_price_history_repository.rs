//! `SQLite` implementation of the `PriceHistoryRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tillpoint_core::{NewPriceChange, PriceChange, PriceHistoryRepository, RepositoryError};

use super::row_mappers::{PriceChangeRow, collect, map_write_error, now_string, storage};

const PRICE_CHANGE_SELECT: &str =
    "SELECT id, product_id, old_price_cents, new_price_cents, changed_at FROM price_changes";

/// Append-only audit of menu price changes.
///
/// Recording a change also applies it to `products`, in the same transaction.
pub struct SqlitePriceHistoryRepository {
    pool: SqlitePool,
}

impl SqlitePriceHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceHistoryRepository for SqlitePriceHistoryRepository {
    async fn record(&self, change: &NewPriceChange) -> Result<PriceChange, RepositoryError> {
        let now = now_string();
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let updated = sqlx::query(
            "UPDATE products SET price_cents = ?, updated_at = ? WHERE id = ? AND price_cents = ?",
        )
        .bind(change.new_price.minor_units())
        .bind(&now)
        .bind(change.product_id)
        .bind(change.old_price.minor_units())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &format!("Product with ID {}", change.product_id)))?;

        if updated.rows_affected() == 0 {
            let current: Option<(i64,)> =
                sqlx::query_as("SELECT price_cents FROM products WHERE id = ?")
                    .bind(change.product_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(storage)?;
            return Err(match current {
                Some(_) => RepositoryError::Conflict(format!(
                    "price of product {} changed, expected {}",
                    change.product_id, change.old_price
                )),
                None => RepositoryError::NotFound(format!("Product with ID {}", change.product_id)),
            });
        }

        let result = sqlx::query(
            r#"
            INSERT INTO price_changes (product_id, old_price_cents, new_price_cents, changed_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(change.product_id)
        .bind(change.old_price.minor_units())
        .bind(change.new_price.minor_units())
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &format!("Price change for product {}", change.product_id)))?;

        let id = result.last_insert_rowid();
        let recorded =
            sqlx::query_as::<_, PriceChangeRow>(&format!("{PRICE_CHANGE_SELECT} WHERE id = ?"))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(storage)?
                .ok_or_else(|| RepositoryError::NotFound(format!("Price change {id}")))?
                .into_change()?;

        tx.commit().await.map_err(storage)?;
        Ok(recorded)
    }

    async fn list_for_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<PriceChange>, RepositoryError> {
        let rows = sqlx::query_as::<_, PriceChangeRow>(&format!(
            "{PRICE_CHANGE_SELECT} WHERE product_id = ? ORDER BY changed_at DESC, id DESC"
        ))
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        collect(rows, PriceChangeRow::into_change)
    }
}
