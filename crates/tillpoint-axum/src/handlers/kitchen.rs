//! Kitchen handlers - order communication and ticket progress.

use axum::Json;
use axum::extract::{Path, State};
use tillpoint_core::KitchenTicket;

use crate::dto::CommunicateOrderRequest;
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Send an order to the kitchen.
pub async fn communicate(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CommunicateOrderRequest>,
) -> Result<Json<KitchenTicket>, HttpError> {
    Ok(Json(
        state.core.kitchen().communicate_order(&req.details).await?,
    ))
}

/// Tickets not yet marked ready, oldest first.
pub async fn open(State(state): State<AppState>) -> Result<Json<Vec<KitchenTicket>>, HttpError> {
    Ok(Json(state.core.kitchen().open_tickets().await?))
}

pub async fn acknowledge(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<KitchenTicket>, HttpError> {
    Ok(Json(state.core.kitchen().acknowledge(id).await?))
}

pub async fn ready(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<KitchenTicket>, HttpError> {
    Ok(Json(state.core.kitchen().mark_ready(id).await?))
}
