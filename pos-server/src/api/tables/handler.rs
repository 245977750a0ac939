//! Dining Table API Handlers
//!
//! Occupancy reads for the UI and the release hook the fulfillment
//! workflow calls when an order completes. Acquisition is not exposed
//! here — tables are only ever acquired inside a checkout commit.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::checkout::{CheckoutError, CheckoutEvent};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::DiningTable;

/// GET /api/tables - 获取全部桌台占用状态
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = state
        .tables
        .all()
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(tables))
}

#[derive(Serialize)]
pub struct ReleaseResponse {
    pub table_number: u8,
    pub released: bool,
}

/// POST /api/tables/{number}/release - 释放桌台
pub async fn release(
    State(state): State<ServerState>,
    Path(number): Path<u8>,
) -> AppResult<Json<ReleaseResponse>> {
    let released = state.tables.release(number).map_err(|e| match e {
        CheckoutError::InvalidTable(n) => {
            AppError::validation(format!("Invalid table number: {}", n))
        }
        other => AppError::database(other.to_string()),
    })?;

    if released {
        state
            .events
            .publish(CheckoutEvent::TableReleased { table_number: number });
    }

    Ok(Json(ReleaseResponse {
        table_number: number,
        released,
    }))
}
