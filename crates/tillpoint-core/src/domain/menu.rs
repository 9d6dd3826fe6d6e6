//! Menu customization audit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// One recorded price change for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    pub id: i64,
    pub product_id: i64,
    pub old_price: Money,
    pub new_price: Money,
    pub changed_at: DateTime<Utc>,
}

/// A price change to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPriceChange {
    pub product_id: i64,
    pub old_price: Money,
    pub new_price: Money,
}
