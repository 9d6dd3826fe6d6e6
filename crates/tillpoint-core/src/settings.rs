//! Settings domain types and validation.
//!
//! This module contains the core settings types used across the application.
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Default port for the web server.
pub const DEFAULT_SERVER_PORT: u16 = 8640;

/// Default reorder threshold applied to newly added products.
pub const DEFAULT_REORDER_THRESHOLD: i64 = 5;

/// Default store name shown on the index page.
pub const DEFAULT_STORE_NAME: &str = "tillpoint";

/// Default ISO 4217 currency code used for display.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name shown on the point-of-sale index page.
    pub store_name: Option<String>,

    /// Three-letter currency code (display only; amounts carry no currency).
    pub currency: Option<String>,

    /// Reorder threshold given to products when they are added.
    pub default_reorder_threshold: Option<i64>,

    /// Port for the web server.
    pub server_port: Option<u16>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            store_name: Some(DEFAULT_STORE_NAME.to_string()),
            currency: Some(DEFAULT_CURRENCY.to_string()),
            default_reorder_threshold: Some(DEFAULT_REORDER_THRESHOLD),
            server_port: Some(DEFAULT_SERVER_PORT),
        }
    }

    pub fn effective_store_name(&self) -> &str {
        self.store_name.as_deref().unwrap_or(DEFAULT_STORE_NAME)
    }

    pub fn effective_currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    #[must_use]
    pub const fn effective_reorder_threshold(&self) -> i64 {
        match self.default_reorder_threshold {
            Some(threshold) => threshold,
            None => DEFAULT_REORDER_THRESHOLD,
        }
    }

    #[must_use]
    pub const fn effective_server_port(&self) -> u16 {
        match self.server_port {
            Some(port) => port,
            None => DEFAULT_SERVER_PORT,
        }
    }

    /// Merge a partial update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref name) = other.store_name {
            self.store_name.clone_from(name);
        }
        if let Some(ref currency) = other.currency {
            self.currency = currency.as_ref().map(|c| c.to_ascii_uppercase());
        }
        if let Some(threshold) = other.default_reorder_threshold {
            self.default_reorder_threshold = threshold;
        }
        if let Some(port) = other.server_port {
            self.server_port = port;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub store_name: Option<Option<String>>,
    pub currency: Option<Option<String>>,
    pub default_reorder_threshold: Option<Option<i64>>,
    pub server_port: Option<Option<u16>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Store name cannot be empty")]
    EmptyStoreName,

    #[error("Currency must be a three-letter code, got {0:?}")]
    InvalidCurrency(String),

    #[error("Reorder threshold cannot be negative, got {0}")]
    NegativeThreshold(i64),

    #[error("Port should be >= 1024 (privileged ports require root), got {0}")]
    InvalidPort(u16),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings
        .store_name
        .as_ref()
        .is_some_and(|n| n.trim().is_empty())
    {
        return Err(SettingsError::EmptyStoreName);
    }

    if let Some(ref currency) = settings.currency {
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(SettingsError::InvalidCurrency(currency.clone()));
        }
    }

    if let Some(threshold) = settings.default_reorder_threshold {
        if threshold < 0 {
            return Err(SettingsError::NegativeThreshold(threshold));
        }
    }

    if let Some(port) = settings.server_port {
        if port < 1024 {
            return Err(SettingsError::InvalidPort(port));
        }
    }

    Ok(())
}
