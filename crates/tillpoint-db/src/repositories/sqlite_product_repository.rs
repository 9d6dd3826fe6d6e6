//! `SQLite` implementation of the `ProductRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tillpoint_core::{NewProduct, Product, ProductRepository, RepositoryError};

use super::row_mappers::{
    PRODUCT_SELECT_COLUMNS, ProductRow, collect, map_write_error, now_string, storage,
};

/// `SQLite` implementation of the `ProductRepository` trait.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new `SQLite` product repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_SELECT_COLUMNS} FROM products ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        collect(rows, ProductRow::into_product)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_SELECT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| RepositoryError::NotFound(format!("Product with ID {id}")))?
        .into_product()
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_SELECT_COLUMNS} FROM products WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| RepositoryError::NotFound(format!("Product with name '{name}'")))?
        .into_product()
    }

    async fn insert(
        &self,
        product: &NewProduct,
        reorder_threshold: i64,
    ) -> Result<Product, RepositoryError> {
        let now = now_string();
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let result = sqlx::query(
            "INSERT INTO products (name, price_cents, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(product.price.minor_units())
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &format!("Product '{}'", product.name)))?;
        let id = result.last_insert_rowid();

        sqlx::query(
            r#"
            INSERT INTO stock_levels (product_id, on_hand, reorder_threshold, updated_at)
            VALUES (?, 0, ?, ?)
            "#,
        )
        .bind(id)
        .bind(reorder_threshold)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &format!("Stock for product {id}")))?;

        tx.commit().await.map_err(storage)?;
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // Stock, orders and price history cascade through foreign keys
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Product with ID {id}")));
        }

        Ok(())
    }
}
