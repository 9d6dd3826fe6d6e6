//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use tillpoint_core::Repos;
use tillpoint_core::ports::{AppEventEmitter, PaymentGatewayPort};
use tillpoint_core::services::AppCore;

use crate::repositories::{
    SqliteInventoryRepository, SqliteKitchenTicketRepository, SqlitePaymentRepository,
    SqlitePriceHistoryRepository, SqliteProductRepository, SqlitePurchaseOrderRepository,
    SqliteSettingsRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos {
            products: Arc::new(SqliteProductRepository::new(pool.clone())),
            inventory: Arc::new(SqliteInventoryRepository::new(pool.clone())),
            purchase_orders: Arc::new(SqlitePurchaseOrderRepository::new(pool.clone())),
            payments: Arc::new(SqlitePaymentRepository::new(pool.clone())),
            kitchen: Arc::new(SqliteKitchenTicketRepository::new(pool.clone())),
            price_history: Arc::new(SqlitePriceHistoryRepository::new(pool.clone())),
            settings: Arc::new(SqliteSettingsRepository::new(pool)),
        }
    }

    /// Build a complete `AppCore` from a pool, a payment gateway and an
    /// event emitter.
    ///
    /// ```ignore
    /// use tillpoint_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(
    ///     pool,
    ///     Arc::new(LocalTenderGateway::new()),
    ///     Arc::new(NoopEmitter::new()),
    /// );
    /// ```
    pub fn build_app_core(
        pool: SqlitePool,
        gateway: Arc<dyn PaymentGatewayPort>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> AppCore {
        AppCore::new(Self::build_repos(pool), gateway, emitter)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// An `AppCore` backed by this database with the local tender gateway
    /// and no event fan-out.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(
            self.pool.clone(),
            Arc::new(tillpoint_core::LocalTenderGateway::new()),
            Arc::new(tillpoint_core::NoopEmitter::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_core::{
        NewProduct, NewPurchaseOrder, PaymentRequest, PurchaseOrderStatus, StockAdjustment,
    };

    #[tokio::test]
    async fn test_app_core_end_to_end() {
        let db = TestDb::new().await.unwrap();
        let core = db.app_core();

        let product = core
            .catalog()
            .add(NewProduct::new("Cortado", "3.10".parse().unwrap()))
            .await
            .unwrap();
        let stock = core.inventory().stock(product.id).await.unwrap();
        assert_eq!(stock.on_hand, 0);
        assert!(stock.is_low());

        core.inventory()
            .adjust(StockAdjustment {
                product_id: product.id,
                delta: 4,
                reason: "opening count".to_string(),
            })
            .await
            .unwrap();

        let order = core
            .inventory()
            .create_order(NewPurchaseOrder {
                product_id: product.id,
                quantity: 10,
                note: None,
            })
            .await
            .unwrap();
        core.inventory().submit_order(order.id).await.unwrap();
        let received = core.inventory().receive_order(order.id).await.unwrap();
        assert_eq!(received.status, PurchaseOrderStatus::Received);
        assert_eq!(core.inventory().stock(product.id).await.unwrap().on_hand, 14);

        let updated = core
            .menu()
            .customize_menu_item("Cortado", "3.30".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(updated.price.to_string(), "3.30");
        assert_eq!(core.menu().price_history(product.id).await.unwrap().len(), 1);

        let payment = core
            .payments()
            .process_payment(PaymentRequest::cash("3.30".parse().unwrap()).with_idempotency_key("t-1"))
            .await
            .unwrap();
        let replay = core
            .payments()
            .process_payment(PaymentRequest::cash("3.30".parse().unwrap()).with_idempotency_key("t-1"))
            .await
            .unwrap();
        assert_eq!(payment.id, replay.id);
        assert_eq!(core.payments().list().await.unwrap().len(), 1);

        let ticket = core.kitchen().communicate_order("1x Cortado").await.unwrap();
        core.kitchen().acknowledge(ticket.id).await.unwrap();
        assert_eq!(core.kitchen().open_tickets().await.unwrap().len(), 1);
    }
}
