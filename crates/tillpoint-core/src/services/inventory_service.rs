//! Inventory service - stock levels and purchase orders.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    NewPurchaseOrder, PurchaseOrder, PurchaseOrderStatus, ReorderSuggestion, StockAdjustment,
    StockLevel,
};
use crate::events::AppEvent;
use crate::ports::{
    AppEventEmitter, CoreError, InventoryRepository, ProductRepository, PurchaseOrderRepository,
};

/// Service for stock tracking and purchase-order management.
pub struct InventoryService {
    inventory: Arc<dyn InventoryRepository>,
    purchase_orders: Arc<dyn PurchaseOrderRepository>,
    products: Arc<dyn ProductRepository>,
    emitter: Arc<dyn AppEventEmitter>,
}

impl InventoryService {
    pub fn new(
        inventory: Arc<dyn InventoryRepository>,
        purchase_orders: Arc<dyn PurchaseOrderRepository>,
        products: Arc<dyn ProductRepository>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            inventory,
            purchase_orders,
            products,
            emitter,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stock Levels
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn stock(&self, product_id: i64) -> Result<StockLevel, CoreError> {
        self.inventory
            .get_stock(product_id)
            .await
            .map_err(CoreError::from)
    }

    pub async fn list_stock(&self) -> Result<Vec<StockLevel>, CoreError> {
        self.inventory.list_stock().await.map_err(CoreError::from)
    }

    /// Products at or below their reorder threshold.
    pub async fn low_stock(&self) -> Result<Vec<StockLevel>, CoreError> {
        let levels = self.inventory.list_stock().await?;
        Ok(levels.into_iter().filter(StockLevel::is_low).collect())
    }

    /// Apply a stock adjustment. Stock can never go negative.
    pub async fn adjust(&self, adjustment: StockAdjustment) -> Result<StockLevel, CoreError> {
        if adjustment.delta == 0 {
            return Err(CoreError::Validation(
                "Stock adjustment cannot be zero".to_string(),
            ));
        }
        self.products.get_by_id(adjustment.product_id).await?;

        let level = self.inventory.apply_adjustment(&adjustment).await?;
        tracing::info!(
            target: "tillpoint.inventory",
            product_id = level.product_id,
            delta = adjustment.delta,
            reason = %adjustment.reason,
            on_hand = level.on_hand,
            "Stock adjusted"
        );

        if adjustment.delta < 0 && level.is_low() {
            tracing::warn!(
                target: "tillpoint.inventory",
                product_id = level.product_id,
                on_hand = level.on_hand,
                threshold = level.reorder_threshold,
                "Stock is low"
            );
            self.emitter.emit(AppEvent::StockLow {
                product_id: level.product_id,
                product_name: level.product_name.clone(),
                on_hand: level.on_hand,
                reorder_threshold: level.reorder_threshold,
            });
        }
        Ok(level)
    }

    pub async fn set_threshold(
        &self,
        product_id: i64,
        reorder_threshold: i64,
    ) -> Result<StockLevel, CoreError> {
        if reorder_threshold < 0 {
            return Err(CoreError::Validation(format!(
                "Reorder threshold cannot be negative, got {reorder_threshold}"
            )));
        }
        self.products.get_by_id(product_id).await?;
        self.inventory
            .set_threshold(product_id, reorder_threshold)
            .await
            .map_err(CoreError::from)
    }

    /// Suggest restocks for low products that have no open purchase order.
    pub async fn reorder_suggestions(&self) -> Result<Vec<ReorderSuggestion>, CoreError> {
        let covered: HashSet<i64> = self
            .purchase_orders
            .list()
            .await?
            .into_iter()
            .filter(|o| o.status.is_open())
            .map(|o| o.product_id)
            .collect();

        Ok(self
            .low_stock()
            .await?
            .iter()
            .filter(|level| !covered.contains(&level.product_id))
            .map(ReorderSuggestion::for_level)
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Purchase Orders
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn create_order(&self, order: NewPurchaseOrder) -> Result<PurchaseOrder, CoreError> {
        if order.quantity <= 0 {
            return Err(CoreError::Validation(format!(
                "Purchase order quantity must be positive, got {}",
                order.quantity
            )));
        }
        self.products.get_by_id(order.product_id).await?;

        let note = order
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let created = self
            .purchase_orders
            .insert(&NewPurchaseOrder { note, ..order })
            .await?;

        tracing::info!(
            target: "tillpoint.inventory",
            order_id = created.id,
            product_id = created.product_id,
            quantity = created.quantity,
            "Purchase order created"
        );
        Ok(created)
    }

    pub async fn get_order(&self, id: i64) -> Result<PurchaseOrder, CoreError> {
        self.purchase_orders
            .get_by_id(id)
            .await
            .map_err(CoreError::from)
    }

    pub async fn list_orders(&self) -> Result<Vec<PurchaseOrder>, CoreError> {
        self.purchase_orders.list().await.map_err(CoreError::from)
    }

    pub async fn submit_order(&self, id: i64) -> Result<PurchaseOrder, CoreError> {
        self.transition(id, PurchaseOrderStatus::Submitted).await
    }

    /// Mark a submitted order received; its quantity is added to stock.
    pub async fn receive_order(&self, id: i64) -> Result<PurchaseOrder, CoreError> {
        self.transition(id, PurchaseOrderStatus::Received).await
    }

    pub async fn cancel_order(&self, id: i64) -> Result<PurchaseOrder, CoreError> {
        self.transition(id, PurchaseOrderStatus::Cancelled).await
    }

    async fn transition(
        &self,
        id: i64,
        to: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder, CoreError> {
        let current = self.purchase_orders.get_by_id(id).await?;
        if !current.status.can_transition_to(to) {
            return Err(CoreError::InvalidTransition(format!(
                "purchase order {id} is {}, cannot become {to}",
                current.status
            )));
        }

        let updated = if to == PurchaseOrderStatus::Received {
            self.purchase_orders.receive(id).await?
        } else {
            self.purchase_orders
                .update_status(id, current.status, to)
                .await?
        };

        tracing::info!(
            target: "tillpoint.inventory",
            order_id = id,
            from = %current.status,
            to = %updated.status,
            "Purchase order status changed"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, NewProduct};
    use crate::ports::RepositoryError;
    use crate::services::test_support::{MemoryStore, RecordingEmitter};

    async fn setup() -> (Arc<RecordingEmitter>, InventoryService, i64) {
        let store = MemoryStore::new();
        let emitter = RecordingEmitter::new();
        let product = ProductRepository::insert(
            store.as_ref(),
            &NewProduct::new("Oat milk", Money::ZERO),
            4,
        )
        .await
        .unwrap();
        let service =
            InventoryService::new(store.clone(), store.clone(), store.clone(), emitter.clone());
        (emitter, service, product.id)
    }

    fn adjustment(product_id: i64, delta: i64) -> StockAdjustment {
        StockAdjustment {
            product_id,
            delta,
            reason: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn adjust_tracks_stock_and_rejects_negative() {
        let (_, inventory, id) = setup().await;

        let level = inventory.adjust(adjustment(id, 10)).await.unwrap();
        assert_eq!(level.on_hand, 10);

        let result = inventory.adjust(adjustment(id, -11)).await;
        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::Constraint(_)))
        ));
        assert_eq!(inventory.stock(id).await.unwrap().on_hand, 10);
    }

    #[tokio::test]
    async fn adjust_rejects_overflow() {
        let (_, inventory, id) = setup().await;
        inventory.adjust(adjustment(id, 1)).await.unwrap();

        let result = inventory.adjust(adjustment(id, i64::MAX)).await;
        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::Constraint(_)))
        ));
        assert_eq!(inventory.stock(id).await.unwrap().on_hand, 1);
    }

    #[tokio::test]
    async fn zero_adjustment_is_invalid() {
        let (_, inventory, id) = setup().await;
        assert!(matches!(
            inventory.adjust(adjustment(id, 0)).await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn going_low_emits_event() {
        let (emitter, inventory, id) = setup().await;
        inventory.adjust(adjustment(id, 6)).await.unwrap();
        assert!(emitter.events().is_empty());

        inventory.adjust(adjustment(id, -3)).await.unwrap();
        assert!(matches!(
            emitter.events().as_slice(),
            [AppEvent::StockLow { on_hand: 3, .. }]
        ));
        assert_eq!(inventory.low_stock().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn negative_threshold_rejected() {
        let (_, inventory, id) = setup().await;
        assert!(inventory.set_threshold(id, -1).await.is_err());
        assert_eq!(
            inventory.set_threshold(id, 8).await.unwrap().reorder_threshold,
            8
        );
    }

    #[tokio::test]
    async fn purchase_order_lifecycle_restocks_on_receive() {
        let (_, inventory, id) = setup().await;

        let order = inventory
            .create_order(NewPurchaseOrder {
                product_id: id,
                quantity: 12,
                note: Some("  ".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(order.status, PurchaseOrderStatus::Draft);
        assert_eq!(order.note, None);

        let early = inventory.receive_order(order.id).await;
        assert!(matches!(early, Err(CoreError::InvalidTransition(_))));

        inventory.submit_order(order.id).await.unwrap();
        let received = inventory.receive_order(order.id).await.unwrap();
        assert_eq!(received.status, PurchaseOrderStatus::Received);
        assert_eq!(inventory.stock(id).await.unwrap().on_hand, 12);

        assert!(matches!(
            inventory.cancel_order(order.id).await,
            Err(CoreError::InvalidTransition(_))
        ));
    }

    #[tokio::test]
    async fn create_order_validates_quantity_and_product() {
        let (_, inventory, id) = setup().await;
        let bad_qty = inventory
            .create_order(NewPurchaseOrder {
                product_id: id,
                quantity: 0,
                note: None,
            })
            .await;
        assert!(matches!(bad_qty, Err(CoreError::Validation(_))));

        let missing = inventory
            .create_order(NewPurchaseOrder {
                product_id: 999,
                quantity: 1,
                note: None,
            })
            .await;
        assert!(matches!(
            missing,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn suggestions_skip_products_with_open_orders() {
        let (_, inventory, id) = setup().await;
        let suggestions = inventory.reorder_suggestions().await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_quantity, 8);

        let order = inventory
            .create_order(NewPurchaseOrder {
                product_id: id,
                quantity: 8,
                note: None,
            })
            .await
            .unwrap();
        assert!(inventory.reorder_suggestions().await.unwrap().is_empty());

        inventory.cancel_order(order.id).await.unwrap();
        assert_eq!(inventory.reorder_suggestions().await.unwrap().len(), 1);
    }
}
