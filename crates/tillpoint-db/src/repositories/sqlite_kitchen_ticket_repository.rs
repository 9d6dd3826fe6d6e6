//! `SQLite` implementation of the `KitchenTicketRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tillpoint_core::{KitchenTicket, KitchenTicketRepository, RepositoryError, TicketStatus};

use super::row_mappers::{TICKET_SELECT_COLUMNS, TicketRow, collect, now_string, storage};

pub struct SqliteKitchenTicketRepository {
    pool: SqlitePool,
}

impl SqliteKitchenTicketRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KitchenTicketRepository for SqliteKitchenTicketRepository {
    async fn insert(&self, details: &str) -> Result<KitchenTicket, RepositoryError> {
        let now = now_string();
        let result = sqlx::query(
            "INSERT INTO kitchen_tickets (details, status, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(details)
        .bind(TicketStatus::Pending.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<KitchenTicket, RepositoryError> {
        sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {TICKET_SELECT_COLUMNS} FROM kitchen_tickets WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or_else(|| RepositoryError::NotFound(format!("Kitchen ticket {id}")))?
        .into_ticket()
    }

    async fn list_open(&self) -> Result<Vec<KitchenTicket>, RepositoryError> {
        let rows = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {TICKET_SELECT_COLUMNS} FROM kitchen_tickets WHERE status != ? ORDER BY id"
        ))
        .bind(TicketStatus::Ready.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        collect(rows, TicketRow::into_ticket)
    }

    async fn update_status(
        &self,
        id: i64,
        from: TicketStatus,
        to: TicketStatus,
    ) -> Result<KitchenTicket, RepositoryError> {
        let result = sqlx::query(
            "UPDATE kitchen_tickets SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
        )
        .bind(to.as_str())
        .bind(now_string())
        .bind(id)
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        if result.rows_affected() == 0 {
            let current = self.get_by_id(id).await?;
            return Err(RepositoryError::Conflict(format!(
                "Kitchen ticket {id} is {}, expected {from}",
                current.status
            )));
        }

        self.get_by_id(id).await
    }
}
