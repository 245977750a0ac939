//! Cart API Handlers
//!
//! Lines are snapshotted server-side at add time: the client sends only
//! `(menu_item_id, quantity)` and the handler denormalizes name/price/image
//! from the catalog, so later catalog edits never reprice an open cart.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{CartLine, cart_total};

#[derive(Serialize)]
pub struct CartView {
    pub customer_id: String,
    pub items: Vec<CartLine>,
    pub total: Decimal,
}

impl CartView {
    fn new(customer_id: String, items: Vec<CartLine>) -> Self {
        let total = cart_total(&items);
        Self {
            customer_id,
            items,
            total,
        }
    }
}

/// GET /api/cart/{customer_id} - 获取购物车
pub async fn get(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
) -> AppResult<Json<CartView>> {
    let items = state
        .carts
        .lines(&customer_id)
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(CartView::new(customer_id, items)))
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub menu_item_id: String,
    pub quantity: u32,
}

/// POST /api/cart/{customer_id}/items - 加入菜单项 (同项合并数量)
pub async fn add_item(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<CartView>> {
    if payload.quantity == 0 {
        return Err(AppError::validation("Quantity must be positive"));
    }

    let item = state
        .storage
        .menu_item(&payload.menu_item_id)
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::not_found(format!("Menu item {} not found", payload.menu_item_id))
        })?;

    let line = CartLine {
        menu_item_id: item.id,
        name: item.name,
        price: item.price,
        quantity: payload.quantity,
        image_url: item.image_url,
    };
    let items = state
        .carts
        .add_line(&customer_id, line)
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(CartView::new(customer_id, items)))
}

#[derive(Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: u32,
}

/// PUT /api/cart/{customer_id}/items/{menu_item_id} - 修改数量 (0 删除)
pub async fn set_quantity(
    State(state): State<ServerState>,
    Path((customer_id, menu_item_id)): Path<(String, String)>,
    Json(payload): Json<SetQuantityRequest>,
) -> AppResult<Json<CartView>> {
    let items = state
        .carts
        .set_quantity(&customer_id, &menu_item_id, payload.quantity)
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::not_found(format!("{} is not in the cart", menu_item_id))
        })?;
    Ok(Json(CartView::new(customer_id, items)))
}

/// DELETE /api/cart/{customer_id}/items/{menu_item_id} - 删除一行
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((customer_id, menu_item_id)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let removed = state
        .carts
        .remove_line(&customer_id, &menu_item_id)
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(removed))
}

/// DELETE /api/cart/{customer_id} - 清空购物车 (放弃，不结账)
pub async fn clear(
    State(state): State<ServerState>,
    Path(customer_id): Path<String>,
) -> AppResult<Json<bool>> {
    state
        .carts
        .clear(&customer_id)
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(true))
}
