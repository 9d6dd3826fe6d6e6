//! Product domain types.
//!
//! A product is the sellable item shown on the menu: an identifier, a
//! display name and a price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 120;

/// A product that exists in the system with a database ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Database ID of the product.
    pub id: i64,
    /// Menu name, unique across the catalog.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// UTC timestamp of when the product was added.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last change to the product.
    pub updated_at: DateTime<Utc>,
}

/// A product to be inserted (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
}

impl NewProduct {
    /// Create a new product with a normalized (trimmed) name.
    pub fn new(name: impl AsRef<str>, price: Money) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            price,
        }
    }
}

/// Check that a product name is usable on the menu.
///
/// Returns the trimmed name or a human-readable reason.
pub fn validate_product_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Product name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(format!(
            "Product name must be at most {MAX_PRODUCT_NAME_LEN} characters"
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_trims_name() {
        let product = NewProduct::new("  Flat White ", Money::ZERO);
        assert_eq!(product.name, "Flat White");
    }

    #[test]
    fn validate_rejects_blank_and_long_names() {
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"x".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
        assert_eq!(validate_product_name(" Latte ").unwrap(), "Latte");
    }
}
