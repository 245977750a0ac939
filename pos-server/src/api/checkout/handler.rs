//! Checkout API Handler

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::checkout::{CheckoutReceipt, CheckoutRequest};

/// POST /api/checkout - 提交结账
///
/// Success returns the receipt for the confirmation route; failures come
/// back as `{ code, message }` and are surfaced to the customer verbatim.
/// The server never retries — the customer resubmits against fresh state.
pub async fn checkout(
    State(state): State<ServerState>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutReceipt>> {
    if request.customer_id.is_empty() {
        return Err(AppError::validation("customer_id must not be empty"));
    }

    let receipt = state
        .coordinator
        .checkout(&request)
        .map_err(|e| AppError::Checkout(e.into()))?;
    Ok(Json(receipt))
}
