//! Menu API Handlers
//!
//! Reads and catalog writes. Stock only ever changes through the inventory
//! ledger's conditional operations, never a plain read-then-write.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::checkout::{CheckoutError, CheckoutEvent};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::MenuItem;
use shared::models::menu_item::MenuItemCreate;

/// GET /api/menu - 获取全部菜单项
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state
        .storage
        .list_menu_items()
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(items))
}

/// GET /api/menu/{id} - 获取单个菜单项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .storage
        .menu_item(&id)
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/menu - 创建菜单项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    if payload.id.is_empty() {
        return Err(AppError::validation("Menu item id must not be empty"));
    }
    if state
        .storage
        .menu_item(&payload.id)
        .map_err(|e| AppError::database(e.to_string()))?
        .is_some()
    {
        return Err(AppError::conflict(format!(
            "Menu item {} already exists",
            payload.id
        )));
    }

    let item: MenuItem = payload.into();
    state
        .storage
        .upsert_menu_item(&item)
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(item))
}

#[derive(Deserialize)]
pub struct RestockRequest {
    pub quantity: u32,
}

#[derive(Serialize)]
pub struct RestockResponse {
    pub menu_item_id: String,
    pub stock: u32,
}

/// POST /api/menu/{id}/restock - 补货
pub async fn restock(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RestockRequest>,
) -> AppResult<Json<RestockResponse>> {
    if payload.quantity == 0 {
        return Err(AppError::validation("Restock quantity must be positive"));
    }

    let stock = state
        .inventory
        .restock(&id, payload.quantity)
        .map_err(|e| match e {
            CheckoutError::ItemNotFound(id) => {
                AppError::not_found(format!("Menu item {} not found", id))
            }
            other => AppError::database(other.to_string()),
        })?;

    state.events.publish(CheckoutEvent::StockChanged {
        menu_item_id: id.clone(),
        stock,
    });

    Ok(Json(RestockResponse {
        menu_item_id: id,
        stock,
    }))
}
