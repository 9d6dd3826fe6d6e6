//! Payment handlers.

use axum::Json;
use axum::extract::{Path, State};
use tillpoint_core::{Payment, PaymentRequest};

use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Take a payment.
///
/// Declined payments are recorded and returned with `200`; only an
/// unreachable gateway produces an error (`503`).
pub async fn process(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PaymentRequest>,
) -> Result<Json<Payment>, HttpError> {
    Ok(Json(state.core.payments().process_payment(req).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Payment>, HttpError> {
    Ok(Json(state.core.payments().get(id).await?))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Payment>>, HttpError> {
    Ok(Json(state.core.payments().list().await?))
}
