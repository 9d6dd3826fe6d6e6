//! `SQLite` implementation of the `PurchaseOrderRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use tillpoint_core::{
    NewPurchaseOrder, PurchaseOrder, PurchaseOrderRepository, PurchaseOrderStatus,
    RepositoryError,
};

use super::row_mappers::{
    ORDER_SELECT_COLUMNS, PurchaseOrderRow, collect, map_write_error, now_string, storage,
};

/// `SQLite` implementation of the `PurchaseOrderRepository` trait.
pub struct SqlitePurchaseOrderRepository {
    pool: SqlitePool,
}

impl SqlitePurchaseOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn fetch_order(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<PurchaseOrder, RepositoryError> {
    sqlx::query_as::<_, PurchaseOrderRow>(&format!(
        "SELECT {ORDER_SELECT_COLUMNS} FROM purchase_orders WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(storage)?
    .ok_or_else(|| RepositoryError::NotFound(format!("Purchase order {id}")))?
    .into_order()
}

/// Compare-and-set a status on an open connection.
///
/// Distinguishes a missing order (`NotFound`) from one that has already
/// moved on (`Conflict`).
async fn set_status(
    conn: &mut SqliteConnection,
    id: i64,
    from: PurchaseOrderStatus,
    to: PurchaseOrderStatus,
) -> Result<PurchaseOrder, RepositoryError> {
    let result = sqlx::query(
        "UPDATE purchase_orders SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
    )
    .bind(to.as_str())
    .bind(now_string())
    .bind(id)
    .bind(from.as_str())
    .execute(&mut *conn)
    .await
    .map_err(storage)?;

    if result.rows_affected() == 0 {
        let current = fetch_order(&mut *conn, id).await?;
        return Err(RepositoryError::Conflict(format!(
            "Purchase order {id} is {}, expected {from}",
            current.status
        )));
    }

    fetch_order(conn, id).await
}

#[async_trait]
impl PurchaseOrderRepository for SqlitePurchaseOrderRepository {
    async fn insert(&self, order: &NewPurchaseOrder) -> Result<PurchaseOrder, RepositoryError> {
        let now = now_string();
        let result = sqlx::query(
            r#"
            INSERT INTO purchase_orders (product_id, quantity, status, note, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(PurchaseOrderStatus::Draft.as_str())
        .bind(&order.note)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Purchase order"))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<PurchaseOrder, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(storage)?;
        fetch_order(&mut conn, id).await
    }

    async fn list(&self) -> Result<Vec<PurchaseOrder>, RepositoryError> {
        let rows = sqlx::query_as::<_, PurchaseOrderRow>(&format!(
            "SELECT {ORDER_SELECT_COLUMNS} FROM purchase_orders ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        collect(rows, PurchaseOrderRow::into_order)
    }

    async fn update_status(
        &self,
        id: i64,
        from: PurchaseOrderStatus,
        to: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(storage)?;
        set_status(&mut conn, id, from, to).await
    }

    async fn receive(&self, id: i64) -> Result<PurchaseOrder, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let order = set_status(
            &mut tx,
            id,
            PurchaseOrderStatus::Submitted,
            PurchaseOrderStatus::Received,
        )
        .await?;

        let stocked = sqlx::query(
            r#"
            UPDATE stock_levels
            SET on_hand = on_hand + ?1, updated_at = ?2
            WHERE product_id = ?3 AND ?1 <= 9223372036854775807 - on_hand
            "#,
        )
        .bind(order.quantity)
        .bind(now_string())
        .bind(order.product_id)
        .execute(&mut *tx)
        .await
        .map_err(storage)?;

        if stocked.rows_affected() == 0 {
            // Dropping the transaction rolls the status change back
            let row: Option<(i64,)> =
                sqlx::query_as("SELECT on_hand FROM stock_levels WHERE product_id = ?")
                    .bind(order.product_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(storage)?;
            return Err(match row {
                Some(_) => RepositoryError::Constraint(format!(
                    "receiving {} units would overflow stock for product {}",
                    order.quantity, order.product_id
                )),
                None => {
                    RepositoryError::NotFound(format!("Stock for product {}", order.product_id))
                }
            });
        }

        tx.commit().await.map_err(storage)?;
        tracing::debug!(
            order_id = id,
            product_id = order.product_id,
            quantity = order.quantity,
            "Purchase order received into stock"
        );
        Ok(order)
    }
}
