//! Purchase order handlers.

use axum::Json;
use axum::extract::{Path, State};
use tillpoint_core::{NewPurchaseOrder, PurchaseOrder};

use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// List all purchase orders, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PurchaseOrder>>, HttpError> {
    Ok(Json(state.core.inventory().list_orders().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PurchaseOrder>, HttpError> {
    Ok(Json(state.core.inventory().get_order(id).await?))
}

/// Create a draft purchase order.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewPurchaseOrder>,
) -> Result<Json<PurchaseOrder>, HttpError> {
    Ok(Json(state.core.inventory().create_order(req).await?))
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PurchaseOrder>, HttpError> {
    Ok(Json(state.core.inventory().submit_order(id).await?))
}

/// Receive a submitted order into stock.
pub async fn receive(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PurchaseOrder>, HttpError> {
    Ok(Json(state.core.inventory().receive_order(id).await?))
}

pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PurchaseOrder>, HttpError> {
    Ok(Json(state.core.inventory().cancel_order(id).await?))
}
