//! Menu handlers - price customization and audit.

use axum::Json;
use axum::extract::{Path, State};
use tillpoint_core::{PriceChange, Product};

use crate::dto::UpdatePriceRequest;
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Change the price of a menu item, addressed by name.
pub async fn customize(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(req): ApiJson<UpdatePriceRequest>,
) -> Result<Json<Product>, HttpError> {
    Ok(Json(
        state
            .core
            .menu()
            .customize_menu_item(&name, req.price)
            .await?,
    ))
}

pub async fn price_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<PriceChange>>, HttpError> {
    Ok(Json(state.core.menu().price_history(id).await?))
}
