//! `SQLite` implementation of the `PaymentRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tillpoint_core::{NewPayment, Payment, PaymentRepository, RepositoryError};

use super::row_mappers::{
    PAYMENT_SELECT_COLUMNS, PaymentRow, collect, map_write_error, now_string, storage,
};

/// `SQLite` implementation of the `PaymentRepository` trait.
///
/// The unique index on `idempotency_key` is what makes retried payments safe
/// when two requests race past the service's lookup.
pub struct SqlitePaymentRepository {
    pool: SqlitePool,
}

impl SqlitePaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for SqlitePaymentRepository {
    async fn insert(&self, payment: &NewPayment) -> Result<Payment, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO payments (amount_cents, method, status, gateway_reference, idempotency_key, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payment.amount.minor_units())
        .bind(payment.method.as_str())
        .bind(payment.status.as_str())
        .bind(&payment.gateway_reference)
        .bind(&payment.idempotency_key)
        .bind(now_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let what = payment.idempotency_key.as_deref().map_or_else(
                || "Payment".to_string(),
                |key| format!("Payment with idempotency key '{key}'"),
            );
            map_write_error(e, &what)
        })?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Payment, RepositoryError> {
        sqlx::query_as::<_, PaymentRow>(&format!(
            "SELECT {PAYMENT_SELECT_COLUMNS} FROM payments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| RepositoryError::NotFound(format!("Payment {id}")))?
        .into_payment()
    }

    async fn find_by_idempotency_key(
        &self,
        key: &str,
    ) -> Result<Option<Payment>, RepositoryError> {
        sqlx::query_as::<_, PaymentRow>(&format!(
            "SELECT {PAYMENT_SELECT_COLUMNS} FROM payments WHERE idempotency_key = ?"
        ))
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .map(PaymentRow::into_payment)
        .transpose()
    }

    async fn list(&self) -> Result<Vec<Payment>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentRow>(&format!(
            "SELECT {PAYMENT_SELECT_COLUMNS} FROM payments ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        collect(rows, PaymentRow::into_payment)
    }
}
