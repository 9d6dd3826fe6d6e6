//! Inventory handlers - stock levels and reorder suggestions.

use axum::Json;
use axum::extract::{Path, State};
use tillpoint_core::{ReorderSuggestion, StockAdjustment, StockLevel};

use crate::dto::{AdjustStockRequest, ThresholdRequest};
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StockLevel>>, HttpError> {
    Ok(Json(state.core.inventory().list_stock().await?))
}

/// Products at or below their reorder threshold.
pub async fn low(State(state): State<AppState>) -> Result<Json<Vec<StockLevel>>, HttpError> {
    Ok(Json(state.core.inventory().low_stock().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<StockLevel>, HttpError> {
    Ok(Json(state.core.inventory().stock(product_id).await?))
}

/// Apply a signed stock change (sale, waste, delivery, stocktake).
pub async fn adjust(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    ApiJson(req): ApiJson<AdjustStockRequest>,
) -> Result<Json<StockLevel>, HttpError> {
    let adjustment = StockAdjustment {
        product_id,
        delta: req.delta,
        reason: req.reason,
    };
    Ok(Json(state.core.inventory().adjust(adjustment).await?))
}

pub async fn set_threshold(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    ApiJson(req): ApiJson<ThresholdRequest>,
) -> Result<Json<StockLevel>, HttpError> {
    Ok(Json(
        state
            .core
            .inventory()
            .set_threshold(product_id, req.reorder_threshold)
            .await?,
    ))
}

pub async fn reorder_suggestions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReorderSuggestion>>, HttpError> {
    Ok(Json(state.core.inventory().reorder_suggestions().await?))
}
