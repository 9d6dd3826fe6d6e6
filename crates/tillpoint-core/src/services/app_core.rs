//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, Web) receive an `AppCore` instance and use it to access
//! all functionality.

use std::sync::Arc;

use crate::ports::{AppEventEmitter, PaymentGatewayPort, Repos};

use super::{
    CatalogService, InventoryService, KitchenService, MenuService, PaymentService,
    SettingsService,
};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete
/// repositories, a payment gateway and an event emitter.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, Arc::new(LocalTenderGateway::new()), Arc::new(NoopEmitter::new()));
///
/// let menu = core.catalog().list().await?;
/// ```
pub struct AppCore {
    catalog: CatalogService,
    menu: MenuService,
    inventory: InventoryService,
    payments: PaymentService,
    kitchen: KitchenService,
    settings: SettingsService,
}

impl AppCore {
    pub fn new(
        repos: Repos,
        gateway: Arc<dyn PaymentGatewayPort>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(repos.products.clone(), repos.settings.clone()),
            menu: MenuService::new(
                repos.products.clone(),
                repos.price_history,
                emitter.clone(),
            ),
            inventory: InventoryService::new(
                repos.inventory,
                repos.purchase_orders,
                repos.products,
                emitter.clone(),
            ),
            payments: PaymentService::new(repos.payments, gateway, emitter.clone()),
            kitchen: KitchenService::new(repos.kitchen, emitter),
            settings: SettingsService::new(repos.settings),
        }
    }

    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub const fn menu(&self) -> &MenuService {
        &self.menu
    }

    pub const fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    pub const fn payments(&self) -> &PaymentService {
        &self.payments
    }

    pub const fn kitchen(&self) -> &KitchenService {
        &self.kitchen
    }

    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}
