//! Orders API Handlers
//!
//! Read-only: orders are created by checkout and advanced by the external
//! fulfillment workflow, never edited through this surface.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::Order;

/// GET /api/orders/{order_number} - 按订单号查询
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(order_number): Path<u64>,
) -> AppResult<Json<Order>> {
    let order = state
        .storage
        .order(order_number)
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_number)))?;
    Ok(Json(order))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub customer_id: String,
}

/// GET /api/orders?customer_id= - 订单历史 (最新在前)
pub async fn history(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state
        .storage
        .orders_for_customer(&query.customer_id)
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(orders))
}
