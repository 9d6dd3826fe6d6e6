//! Settings handlers - application configuration.

use axum::Json;
use axum::extract::State;
use tillpoint_core::{Settings, SettingsUpdate};

use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Get application settings.
pub async fn get(State(state): State<AppState>) -> Result<Json<Settings>, HttpError> {
    Ok(Json(state.core.settings().get().await?))
}

/// Update application settings.
pub async fn update(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SettingsUpdate>,
) -> Result<Json<Settings>, HttpError> {
    Ok(Json(state.core.settings().update(req).await?))
}
