//! Cart API 模块

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/{customer_id}",
            get(handler::get).delete(handler::clear),
        )
        .route("/{customer_id}/items", post(handler::add_item))
        .route(
            "/{customer_id}/items/{menu_item_id}",
            put(handler::set_quantity).delete(handler::remove_item),
        )
}
