//! Inventory domain types: stock levels and purchase orders.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current stock for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: i64,
    pub product_name: String,
    /// Units currently on hand. Never negative.
    pub on_hand: i64,
    /// Stock at or below this value is considered low.
    pub reorder_threshold: i64,
    pub updated_at: DateTime<Utc>,
}

impl StockLevel {
    /// Whether this product should be reordered.
    pub const fn is_low(&self) -> bool {
        self.on_hand <= self.reorder_threshold
    }
}

/// A signed change to a product's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub product_id: i64,
    /// Positive for deliveries and corrections up, negative for sales and waste.
    pub delta: i64,
    /// Free-form reason, e.g. "sale", "waste", "stocktake".
    #[serde(default)]
    pub reason: String,
}

/// Lifecycle of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    Draft,
    Submitted,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    /// Whether moving from `self` to `next` is allowed.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Submitted)
                | (Self::Submitted, Self::Received)
                | (Self::Draft | Self::Submitted, Self::Cancelled)
        )
    }

    /// Open orders are still expected to change stock.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Draft | Self::Submitted)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Received => "received",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurchaseOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "received" => Ok(Self::Received),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Unknown purchase order status: {other}")),
        }
    }
}

/// A persisted purchase order for restocking one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub status: PurchaseOrderStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchase order to be inserted. Always starts as a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPurchaseOrder {
    pub product_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
}

/// A suggested restock for a product running low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderSuggestion {
    pub product_id: i64,
    pub product_name: String,
    pub on_hand: i64,
    pub reorder_threshold: i64,
    pub suggested_quantity: i64,
}

impl ReorderSuggestion {
    /// Build a suggestion that brings stock back to twice the threshold.
    pub fn for_level(level: &StockLevel) -> Self {
        let target = level.reorder_threshold.saturating_mul(2);
        Self {
            product_id: level.product_id,
            product_name: level.product_name.clone(),
            on_hand: level.on_hand,
            reorder_threshold: level.reorder_threshold,
            suggested_quantity: (target - level.on_hand).max(1),
        }
    }
}
