//! In-memory port implementations shared by service unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    KitchenTicket, NewPayment, NewPriceChange, NewProduct, NewPurchaseOrder, Payment, PriceChange,
    Product, PurchaseOrder, PurchaseOrderStatus, StockAdjustment, StockLevel, TicketStatus,
};
use crate::events::AppEvent;
use crate::ports::{
    AppEventEmitter, InventoryRepository, KitchenTicketRepository, PaymentRepository,
    PriceHistoryRepository, ProductRepository, PurchaseOrderRepository, Repos, RepositoryError,
    SettingsRepository,
};
use crate::settings::Settings;

#[derive(Default)]
struct State {
    next_id: i64,
    products: Vec<Product>,
    stock: HashMap<i64, (i64, i64)>,
    orders: Vec<PurchaseOrder>,
    payments: Vec<Payment>,
    tickets: Vec<KitchenTicket>,
    price_changes: Vec<PriceChange>,
    settings: Option<Settings>,
    fail_price_history: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn level(&self, product_id: i64) -> Result<StockLevel, RepositoryError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Product with ID {product_id}")))?;
        let (on_hand, reorder_threshold) = self.stock.get(&product_id).copied().unwrap_or((0, 0));
        Ok(StockLevel {
            product_id,
            product_name: product.name.clone(),
            on_hand,
            reorder_threshold,
            updated_at: Utc::now(),
        })
    }
}

/// One store backing every repository port.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repos(self: &Arc<Self>) -> Repos {
        Repos {
            products: self.clone(),
            inventory: self.clone(),
            purchase_orders: self.clone(),
            payments: self.clone(),
            kitchen: self.clone(),
            price_history: self.clone(),
            settings: self.clone(),
        }
    }

    pub fn payment_count(&self) -> usize {
        self.state.lock().unwrap().payments.len()
    }

    pub fn price_change_count(&self) -> usize {
        self.state.lock().unwrap().price_changes.len()
    }

    /// Make every later price history write fail before anything is stored.
    pub fn fail_price_history(&self) {
        self.state.lock().unwrap().fail_price_history = true;
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.state.lock().unwrap().products.clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Product with ID {id}")))
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Product with name '{name}'")))
    }

    async fn insert(
        &self,
        product: &NewProduct,
        reorder_threshold: i64,
    ) -> Result<Product, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.products.iter().any(|p| p.name == product.name) {
            return Err(RepositoryError::AlreadyExists(product.name.clone()));
        }
        let now = Utc::now();
        let created = Product {
            id: state.next_id(),
            name: product.name.clone(),
            price: product.price,
            created_at: now,
            updated_at: now,
        };
        state.products.push(created.clone());
        state.stock.insert(created.id, (0, reorder_threshold));
        Ok(created)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(RepositoryError::NotFound(format!("Product with ID {id}")));
        }
        state.stock.remove(&id);
        state.orders.retain(|o| o.product_id != id);
        state.price_changes.retain(|c| c.product_id != id);
        Ok(())
    }
}

#[async_trait]
impl InventoryRepository for MemoryStore {
    async fn get_stock(&self, product_id: i64) -> Result<StockLevel, RepositoryError> {
        self.state.lock().unwrap().level(product_id)
    }

    async fn list_stock(&self) -> Result<Vec<StockLevel>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut levels = state
            .products
            .iter()
            .map(|p| state.level(p.id))
            .collect::<Result<Vec<_>, _>>()?;
        levels.sort_by(|a, b| a.product_name.cmp(&b.product_name));
        Ok(levels)
    }

    async fn set_threshold(
        &self,
        product_id: i64,
        reorder_threshold: i64,
    ) -> Result<StockLevel, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.level(product_id)?;
        state.stock.entry(product_id).or_insert((0, 0)).1 = reorder_threshold;
        state.level(product_id)
    }

    async fn apply_adjustment(
        &self,
        adjustment: &StockAdjustment,
    ) -> Result<StockLevel, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let current = state.level(adjustment.product_id)?;
        let next = match current.on_hand.checked_add(adjustment.delta) {
            Some(next) if next >= 0 => next,
            Some(_) => {
                return Err(RepositoryError::Constraint(format!(
                    "stock for product {} cannot go below zero",
                    adjustment.product_id
                )));
            }
            None => {
                return Err(RepositoryError::Constraint(format!(
                    "stock for product {} would overflow",
                    adjustment.product_id
                )));
            }
        };
        state.stock.entry(adjustment.product_id).or_insert((0, 0)).0 = next;
        state.level(adjustment.product_id)
    }
}

#[async_trait]
impl PurchaseOrderRepository for MemoryStore {
    async fn insert(&self, order: &NewPurchaseOrder) -> Result<PurchaseOrder, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let created = PurchaseOrder {
            id: state.next_id(),
            product_id: order.product_id,
            quantity: order.quantity,
            status: PurchaseOrderStatus::Draft,
            note: order.note.clone(),
            created_at: now,
            updated_at: now,
        };
        state.orders.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<PurchaseOrder, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Purchase order {id}")))
    }

    async fn list(&self) -> Result<Vec<PurchaseOrder>, RepositoryError> {
        let mut orders = self.state.lock().unwrap().orders.clone();
        orders.reverse();
        Ok(orders)
    }

    async fn update_status(
        &self,
        id: i64,
        from: PurchaseOrderStatus,
        to: PurchaseOrderStatus,
    ) -> Result<PurchaseOrder, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Purchase order {id}")))?;
        if order.status != from {
            return Err(RepositoryError::Conflict(format!(
                "purchase order {id} is {}",
                order.status
            )));
        }
        order.status = to;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn receive(&self, id: i64) -> Result<PurchaseOrder, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let (product_id, quantity, status) = state
            .orders
            .iter()
            .find(|o| o.id == id)
            .map(|o| (o.product_id, o.quantity, o.status))
            .ok_or_else(|| RepositoryError::NotFound(format!("Purchase order {id}")))?;
        if status != PurchaseOrderStatus::Submitted {
            return Err(RepositoryError::Conflict(format!(
                "purchase order {id} is {status}"
            )));
        }
        let on_hand = state
            .stock
            .get(&product_id)
            .map(|(on_hand, _)| *on_hand)
            .ok_or_else(|| RepositoryError::NotFound(format!("Stock for product {product_id}")))?;
        let next = on_hand.checked_add(quantity).ok_or_else(|| {
            RepositoryError::Constraint(format!("stock for product {product_id} would overflow"))
        })?;

        state.stock.entry(product_id).or_insert((0, 0)).0 = next;
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Purchase order {id}")))?;
        order.status = PurchaseOrderStatus::Received;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }
}

impl MemoryStore {
    /// Store a payment without going through the async port, for gateways
    /// that stand in for a competing request.
    pub fn insert_payment(&self, payment: &NewPayment) -> Result<Payment, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(ref key) = payment.idempotency_key {
            if state
                .payments
                .iter()
                .any(|p| p.idempotency_key.as_ref() == Some(key))
            {
                return Err(RepositoryError::AlreadyExists(key.clone()));
            }
        }
        let created = Payment {
            id: state.next_id(),
            amount: payment.amount,
            method: payment.method,
            status: payment.status,
            gateway_reference: payment.gateway_reference.clone(),
            idempotency_key: payment.idempotency_key.clone(),
            created_at: Utc::now(),
        };
        state.payments.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl PaymentRepository for MemoryStore {
    async fn insert(&self, payment: &NewPayment) -> Result<Payment, RepositoryError> {
        self.insert_payment(payment)
    }

    async fn get_by_id(&self, id: i64) -> Result<Payment, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .payments
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Payment {id}")))
    }

    async fn find_by_idempotency_key(
        &self,
        key: &str,
    ) -> Result<Option<Payment>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .payments
            .iter()
            .find(|p| p.idempotency_key.as_deref() == Some(key))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Payment>, RepositoryError> {
        let mut payments = self.state.lock().unwrap().payments.clone();
        payments.reverse();
        Ok(payments)
    }
}

#[async_trait]
impl KitchenTicketRepository for MemoryStore {
    async fn insert(&self, details: &str) -> Result<KitchenTicket, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let ticket = KitchenTicket {
            id: state.next_id(),
            details: details.to_string(),
            status: TicketStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        state.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn get_by_id(&self, id: i64) -> Result<KitchenTicket, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Kitchen ticket {id}")))
    }

    async fn list_open(&self) -> Result<Vec<KitchenTicket>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tickets
            .iter()
            .filter(|t| t.status != TicketStatus::Ready)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: i64,
        from: TicketStatus,
        to: TicketStatus,
    ) -> Result<KitchenTicket, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let ticket = state
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Kitchen ticket {id}")))?;
        if ticket.status != from {
            return Err(RepositoryError::Conflict(format!(
                "kitchen ticket {id} is {}",
                ticket.status
            )));
        }
        ticket.status = to;
        ticket.updated_at = Utc::now();
        Ok(ticket.clone())
    }
}

#[async_trait]
impl PriceHistoryRepository for MemoryStore {
    async fn record(&self, change: &NewPriceChange) -> Result<PriceChange, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_price_history {
            return Err(RepositoryError::Storage("price history unavailable".to_string()));
        }
        let id = state.next_id();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == change.product_id)
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Product with ID {}", change.product_id))
            })?;
        if product.price != change.old_price {
            return Err(RepositoryError::Conflict(format!(
                "price of product {} is {}, expected {}",
                product.id, product.price, change.old_price
            )));
        }
        product.price = change.new_price;
        product.updated_at = Utc::now();

        let recorded = PriceChange {
            id,
            product_id: change.product_id,
            old_price: change.old_price,
            new_price: change.new_price,
            changed_at: Utc::now(),
        };
        state.price_changes.push(recorded.clone());
        Ok(recorded)
    }

    async fn list_for_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<PriceChange>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .price_changes
            .iter()
            .rev()
            .filter(|c| c.product_id == product_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SettingsRepository for MemoryStore {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .settings
            .clone()
            .unwrap_or_else(Settings::with_defaults))
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        self.state.lock().unwrap().settings = Some(settings.clone());
        Ok(())
    }
}

/// Emitter that keeps every event for later assertions.
#[derive(Clone, Default)]
pub struct RecordingEmitter {
    events: Arc<Mutex<Vec<AppEvent>>>,
}

impl RecordingEmitter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AppEventEmitter for RecordingEmitter {
    fn emit(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn clone_box(&self) -> Box<dyn AppEventEmitter> {
        Box::new(self.clone())
    }
}
