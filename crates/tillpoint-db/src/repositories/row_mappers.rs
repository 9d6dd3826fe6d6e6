//! Row mapping helpers for `SQLite` queries.
//!
//! Timestamps are stored as UTC text (`%Y-%m-%d %H:%M:%S%.f`) and money as
//! integer minor units.

use chrono::{DateTime, NaiveDateTime, Utc};
use tillpoint_core::{
    KitchenTicket, Money, Payment, PriceChange, Product, PurchaseOrder, RepositoryError,
    StockLevel,
};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Format a timestamp for storage.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Current time, formatted for storage.
pub fn now_string() -> String {
    format_datetime(Utc::now())
}

/// Parse a stored timestamp. Accepts an optional " UTC" suffix.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let trimmed = s.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp '{s}': {e}")))
}

fn money(cents: i64) -> Result<Money, RepositoryError> {
    Money::from_minor_units(cents).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Map a generic sqlx failure.
pub fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Map an insert/update failure, turning unique violations into `AlreadyExists`
/// and check/foreign-key violations into `Constraint`.
pub fn map_write_error(e: sqlx::Error, what: &str) -> RepositoryError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return RepositoryError::AlreadyExists(what.to_string());
        }
        if db.is_check_violation() || db.is_foreign_key_violation() {
            return RepositoryError::Constraint(format!("{what}: {}", db.message()));
        }
    }
    storage(e)
}

// ─────────────────────────────────────────────────────────────────────────────
// Row types
// ─────────────────────────────────────────────────────────────────────────────

pub const PRODUCT_SELECT_COLUMNS: &str = "id, name, price_cents, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub struct ProductRow {
    id: i64,
    name: String,
    price_cents: i64,
    created_at: String,
    updated_at: String,
}

impl ProductRow {
    pub fn into_product(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: self.id,
            name: self.name,
            price: money(self.price_cents)?,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

/// Stock joined with the product name. Orphaned rows report an empty name.
pub const STOCK_SELECT: &str = r#"
    SELECT s.product_id, COALESCE(p.name, '') AS product_name, s.on_hand,
           s.reorder_threshold, s.updated_at
    FROM stock_levels s
    LEFT JOIN products p ON p.id = s.product_id
"#;

#[derive(sqlx::FromRow)]
pub struct StockRow {
    product_id: i64,
    product_name: String,
    on_hand: i64,
    reorder_threshold: i64,
    updated_at: String,
}

impl StockRow {
    pub fn into_stock(self) -> Result<StockLevel, RepositoryError> {
        Ok(StockLevel {
            product_id: self.product_id,
            product_name: self.product_name,
            on_hand: self.on_hand,
            reorder_threshold: self.reorder_threshold,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

pub const ORDER_SELECT_COLUMNS: &str =
    "id, product_id, quantity, status, note, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub struct PurchaseOrderRow {
    id: i64,
    product_id: i64,
    quantity: i64,
    status: String,
    note: Option<String>,
    created_at: String,
    updated_at: String,
}

impl PurchaseOrderRow {
    pub fn into_order(self) -> Result<PurchaseOrder, RepositoryError> {
        Ok(PurchaseOrder {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            status: self.status.parse().map_err(RepositoryError::Serialization)?,
            note: self.note,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

pub const PAYMENT_SELECT_COLUMNS: &str =
    "id, amount_cents, method, status, gateway_reference, idempotency_key, created_at";

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    id: i64,
    amount_cents: i64,
    method: String,
    status: String,
    gateway_reference: String,
    idempotency_key: Option<String>,
    created_at: String,
}

impl PaymentRow {
    pub fn into_payment(self) -> Result<Payment, RepositoryError> {
        Ok(Payment {
            id: self.id,
            amount: money(self.amount_cents)?,
            method: self.method.parse().map_err(RepositoryError::Serialization)?,
            status: self.status.parse().map_err(RepositoryError::Serialization)?,
            gateway_reference: self.gateway_reference,
            idempotency_key: self.idempotency_key,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

pub const TICKET_SELECT_COLUMNS: &str = "id, details, status, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub struct TicketRow {
    id: i64,
    details: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl TicketRow {
    pub fn into_ticket(self) -> Result<KitchenTicket, RepositoryError> {
        Ok(KitchenTicket {
            id: self.id,
            details: self.details,
            status: self.status.parse().map_err(RepositoryError::Serialization)?,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct PriceChangeRow {
    id: i64,
    product_id: i64,
    old_price_cents: i64,
    new_price_cents: i64,
    changed_at: String,
}

impl PriceChangeRow {
    pub fn into_change(self) -> Result<PriceChange, RepositoryError> {
        Ok(PriceChange {
            id: self.id,
            product_id: self.product_id,
            old_price: money(self.old_price_cents)?,
            new_price: money(self.new_price_cents)?,
            changed_at: parse_datetime(&self.changed_at)?,
        })
    }
}

/// Convert a batch of rows, failing on the first bad one.
pub fn collect<R, T>(
    rows: Vec<R>,
    convert: impl Fn(R) -> Result<T, RepositoryError>,
) -> Result<Vec<T>, RepositoryError> {
    rows.into_iter().map(convert).collect()
}
