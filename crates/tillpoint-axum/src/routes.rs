//! Route definitions and router construction.
//!
//! Axum 0.8 uses brace syntax for path parameters: `{id}`, `{name}`.

use axum::Router;
use axum::routing::{get, post, put};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::add),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get).delete(handlers::products::remove),
        )
        .route(
            "/products/{id}/price-history",
            get(handlers::menu::price_history),
        )
        // Menu customization
        .route("/menu/{name}/price", put(handlers::menu::customize))
        // Stock levels
        .route("/inventory", get(handlers::inventory::list))
        .route("/inventory/low", get(handlers::inventory::low))
        .route(
            "/inventory/reorder-suggestions",
            get(handlers::inventory::reorder_suggestions),
        )
        .route("/inventory/{product_id}", get(handlers::inventory::get))
        .route(
            "/inventory/{product_id}/adjust",
            post(handlers::inventory::adjust),
        )
        .route(
            "/inventory/{product_id}/threshold",
            put(handlers::inventory::set_threshold),
        )
        // Purchase orders
        .route(
            "/purchase-orders",
            get(handlers::purchase_orders::list).post(handlers::purchase_orders::create),
        )
        .route("/purchase-orders/{id}", get(handlers::purchase_orders::get))
        .route(
            "/purchase-orders/{id}/submit",
            post(handlers::purchase_orders::submit),
        )
        .route(
            "/purchase-orders/{id}/receive",
            post(handlers::purchase_orders::receive),
        )
        .route(
            "/purchase-orders/{id}/cancel",
            post(handlers::purchase_orders::cancel),
        )
        // Payments
        .route(
            "/payments",
            get(handlers::payments::list).post(handlers::payments::process),
        )
        .route("/payments/{id}", get(handlers::payments::get))
        // Kitchen
        .route(
            "/kitchen/tickets",
            get(handlers::kitchen::open).post(handlers::kitchen::communicate),
        )
        .route(
            "/kitchen/tickets/{id}/acknowledge",
            post(handlers::kitchen::acknowledge),
        )
        .route("/kitchen/tickets/{id}/ready", post(handlers::kitchen::ready))
        // Events (SSE)
        .route("/events", get(handlers::events::stream))
        // Settings
        .route(
            "/settings",
            get(handlers::settings::get)
                .put(handlers::settings::update)
                .patch(handlers::settings::update),
        )
}

/// Create the main Axum router: the index view, `/health` and the `/api` tree.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(health_check))
        .with_state(state.clone())
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
