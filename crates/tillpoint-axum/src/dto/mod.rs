//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Request bodies that don't map one-to-one onto a domain type. Money is
//! always sent as a decimal string such as `"12.50"`.

use serde::Deserialize;
use tillpoint_core::{Money, NewProduct};

/// Body for `POST /api/products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Money,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self::new(req.name, req.price)
    }
}

/// Body for `PUT /api/menu/{name}/price`.
#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub price: Money,
}

/// Body for `POST /api/inventory/{product_id}/adjust`.
#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i64,
    #[serde(default)]
    pub reason: String,
}

/// Body for `PUT /api/inventory/{product_id}/threshold`.
#[derive(Debug, Deserialize)]
pub struct ThresholdRequest {
    pub reorder_threshold: i64,
}

/// Body for `POST /api/kitchen/tickets`.
#[derive(Debug, Deserialize)]
pub struct CommunicateOrderRequest {
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_parsed_from_decimal_string() {
        let req: UpdatePriceRequest = serde_json::from_str(r#"{ "price": "4.05" }"#).unwrap();
        assert_eq!(req.price.minor_units(), 405);
    }

    #[test]
    fn adjustment_reason_is_optional() {
        let req: AdjustStockRequest = serde_json::from_str(r#"{ "delta": -2 }"#).unwrap();
        assert_eq!(req.delta, -2);
        assert!(req.reason.is_empty());
    }

    #[test]
    fn create_product_trims_name() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{ "name": "  Bun  ", "price": "1.20" }"#).unwrap();
        let product = NewProduct::from(req);
        assert_eq!(product.name, "Bun");
    }
}
