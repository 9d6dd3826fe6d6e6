//! Catalog service - product CRUD.

use std::sync::Arc;

use crate::domain::{NewProduct, Product, validate_product_name};
use crate::ports::{CoreError, ProductRepository, RepositoryError, SettingsRepository};

/// Service for the product catalog.
///
/// Adding a product also opens its stock row, using the configured default
/// reorder threshold.
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl CatalogService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self { products, settings }
    }

    /// List all products, ordered by name.
    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        self.products.list().await.map_err(CoreError::from)
    }

    /// Get a product by ID.
    pub async fn get(&self, id: i64) -> Result<Product, CoreError> {
        self.products.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Find a product by exact name, returning `None` if absent.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CoreError> {
        match self.products.get_by_name(name.trim()).await {
            Ok(product) => Ok(Some(product)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Add a product to the menu.
    pub async fn add(&self, product: NewProduct) -> Result<Product, CoreError> {
        let name = validate_product_name(&product.name).map_err(CoreError::Validation)?;
        let product = NewProduct { name, ..product };

        let threshold = self.settings.load().await?.effective_reorder_threshold();
        let created = self.products.insert(&product, threshold).await?;

        tracing::info!(
            target: "tillpoint.catalog",
            product_id = created.id,
            name = %created.name,
            price = %created.price,
            "Product added"
        );
        Ok(created)
    }

    /// Remove a product by ID. Returns the removed product.
    pub async fn remove(&self, id: i64) -> Result<Product, CoreError> {
        let product = self.products.get_by_id(id).await?;
        self.products.delete(id).await?;
        tracing::info!(target: "tillpoint.catalog", product_id = id, "Product removed");
        Ok(product)
    }
}
