//! `SQLite` implementation of the `InventoryRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tillpoint_core::{InventoryRepository, RepositoryError, StockAdjustment, StockLevel};

use super::row_mappers::{STOCK_SELECT, StockRow, collect, now_string, storage};

/// `SQLite` implementation of the `InventoryRepository` trait.
///
/// One `stock_levels` row per product. Adjustments are applied with a single
/// guarded `UPDATE` so concurrent sales cannot drive stock below zero, and
/// no delta can push `on_hand` past `i64::MAX` (`SQLite` would silently turn
/// the sum into a REAL).
pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn on_hand(&self, product_id: i64) -> Result<Option<i64>, RepositoryError> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT on_hand FROM stock_levels WHERE product_id = ?")
                .bind(product_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage)?;
        Ok(row.map(|(on_hand,)| on_hand))
    }
}

#[async_trait]
impl InventoryRepository for SqliteInventoryRepository {
    async fn get_stock(&self, product_id: i64) -> Result<StockLevel, RepositoryError> {
        sqlx::query_as::<_, StockRow>(&format!("{STOCK_SELECT} WHERE s.product_id = ?"))
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Stock for product {product_id}")))?
            .into_stock()
    }

    async fn list_stock(&self) -> Result<Vec<StockLevel>, RepositoryError> {
        let rows = sqlx::query_as::<_, StockRow>(&format!(
            "{STOCK_SELECT} ORDER BY product_name, s.product_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        collect(rows, StockRow::into_stock)
    }

    async fn set_threshold(
        &self,
        product_id: i64,
        reorder_threshold: i64,
    ) -> Result<StockLevel, RepositoryError> {
        let result = sqlx::query(
            "UPDATE stock_levels SET reorder_threshold = ?, updated_at = ? WHERE product_id = ?",
        )
        .bind(reorder_threshold)
        .bind(now_string())
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Stock for product {product_id}"
            )));
        }

        self.get_stock(product_id).await
    }

    async fn apply_adjustment(
        &self,
        adjustment: &StockAdjustment,
    ) -> Result<StockLevel, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE stock_levels
            SET on_hand = on_hand + ?1, updated_at = ?2
            WHERE product_id = ?3
              AND on_hand + ?1 >= 0
              AND ?1 <= 9223372036854775807 - on_hand
            "#,
        )
        .bind(adjustment.delta)
        .bind(now_string())
        .bind(adjustment.product_id)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        if result.rows_affected() == 0 {
            let Some(on_hand) = self.on_hand(adjustment.product_id).await? else {
                return Err(RepositoryError::NotFound(format!(
                    "Stock for product {}",
                    adjustment.product_id
                )));
            };
            let problem = if on_hand.checked_add(adjustment.delta).is_none() {
                "would overflow"
            } else {
                "cannot go below zero"
            };
            return Err(RepositoryError::Constraint(format!(
                "stock for product {} {problem}",
                adjustment.product_id
            )));
        }

        tracing::debug!(
            product_id = adjustment.product_id,
            delta = adjustment.delta,
            reason = %adjustment.reason,
            "Stock adjusted"
        );
        self.get_stock(adjustment.product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteProductRepository;
    use crate::setup::setup_test_database;
    use tillpoint_core::{NewProduct, ProductRepository};

    async fn setup() -> (SqliteInventoryRepository, i64) {
        let pool = setup_test_database().await.unwrap();
        let product = SqliteProductRepository::new(pool.clone())
            .insert(&NewProduct::new("Croissant", "2.40".parse().unwrap()), 3)
            .await
            .unwrap();
        (SqliteInventoryRepository::new(pool), product.id)
    }

    fn adjust(product_id: i64, delta: i64) -> StockAdjustment {
        StockAdjustment {
            product_id,
            delta,
            reason: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_stock_opened_with_product() {
        let (repo, id) = setup().await;
        repo.apply_adjustment(&adjust(id, 7)).await.unwrap();

        let level = repo.get_stock(id).await.unwrap();
        assert_eq!(level.on_hand, 7);
        assert_eq!(level.reorder_threshold, 3);
        assert_eq!(level.product_name, "Croissant");
    }

    #[tokio::test]
    async fn test_adjustment_cannot_go_negative() {
        let (repo, id) = setup().await;
        repo.apply_adjustment(&adjust(id, 2)).await.unwrap();

        let result = repo.apply_adjustment(&adjust(id, -3)).await;
        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
        assert_eq!(repo.get_stock(id).await.unwrap().on_hand, 2);

        let level = repo.apply_adjustment(&adjust(id, -2)).await.unwrap();
        assert_eq!(level.on_hand, 0);
    }

    #[tokio::test]
    async fn test_adjustment_cannot_overflow() {
        let (repo, id) = setup().await;
        repo.apply_adjustment(&adjust(id, 1)).await.unwrap();

        let result = repo.apply_adjustment(&adjust(id, i64::MAX)).await;
        match result {
            Err(RepositoryError::Constraint(msg)) => assert!(msg.contains("overflow")),
            other => panic!("expected constraint error, got {other:?}"),
        }

        // The row must still decode as an integer
        assert_eq!(repo.get_stock(id).await.unwrap().on_hand, 1);
        assert_eq!(repo.list_stock().await.unwrap().len(), 1);

        let level = repo.apply_adjustment(&adjust(id, i64::MAX - 1)).await.unwrap();
        assert_eq!(level.on_hand, i64::MAX);
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let (repo, _) = setup().await;
        assert!(matches!(
            repo.apply_adjustment(&adjust(999, 1)).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.set_threshold(999, 1).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_set_threshold_and_list() {
        let (repo, id) = setup().await;
        let level = repo.set_threshold(id, 12).await.unwrap();
        assert_eq!(level.reorder_threshold, 12);
        assert!(level.is_low());

        let all = repo.list_stock().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].product_id, id);
    }
}
