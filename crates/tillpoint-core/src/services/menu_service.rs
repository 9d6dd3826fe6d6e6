//! Menu customization: price changes with an audit trail.

use std::sync::Arc;

use crate::domain::{Money, NewPriceChange, PriceChange, Product};
use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, CoreError, PriceHistoryRepository, ProductRepository};

pub struct MenuService {
    products: Arc<dyn ProductRepository>,
    price_history: Arc<dyn PriceHistoryRepository>,
    emitter: Arc<dyn AppEventEmitter>,
}

impl MenuService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        price_history: Arc<dyn PriceHistoryRepository>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            products,
            price_history,
            emitter,
        }
    }

    /// Change the price of the menu item called `item_name`.
    ///
    /// Setting the current price again returns the product unchanged and
    /// records nothing.
    pub async fn customize_menu_item(
        &self,
        item_name: &str,
        new_price: Money,
    ) -> Result<Product, CoreError> {
        let product = self.products.get_by_name(item_name.trim()).await?;
        if product.price == new_price {
            return Ok(product);
        }

        let old_price = product.price;
        self.price_history
            .record(&NewPriceChange {
                product_id: product.id,
                old_price,
                new_price,
            })
            .await?;
        let updated = self.products.get_by_id(product.id).await?;

        tracing::info!(
            target: "tillpoint.menu",
            product_id = updated.id,
            name = %updated.name,
            %old_price,
            %new_price,
            "Menu price changed"
        );
        self.emitter.emit(AppEvent::price_changed(&updated, old_price));
        Ok(updated)
    }

    /// Price changes for a product, newest first.
    pub async fn price_history(&self, product_id: i64) -> Result<Vec<PriceChange>, CoreError> {
        self.products.get_by_id(product_id).await?;
        self.price_history
            .list_for_product(product_id)
            .await
            .map_err(CoreError::from)
    }
}
