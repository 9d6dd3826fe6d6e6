//! Product handlers - catalog CRUD.

use axum::Json;
use axum::extract::{Path, State};
use tillpoint_core::Product;

use crate::dto::CreateProductRequest;
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, HttpError> {
    Ok(Json(state.core.catalog().list().await?))
}

/// Get a single product by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, HttpError> {
    Ok(Json(state.core.catalog().get(id).await?))
}

/// Add a product to the menu.
pub async fn add(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> Result<Json<Product>, HttpError> {
    Ok(Json(state.core.catalog().add(req.into()).await?))
}

/// Remove a product. Returns the removed product.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, HttpError> {
    Ok(Json(state.core.catalog().remove(id).await?))
}
