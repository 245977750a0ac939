//! Order Model
//!
//! The durable checkout record. Created exactly once per successful
//! checkout; immutable afterwards except for `status`, which the external
//! fulfillment workflow advances.

use crate::models::cart::{CartLine, cart_total};
use crate::types::{OrderStatus, ServiceType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Customer-facing sequential number from the order counter
    pub order_number: u64,
    /// Receipt identifier, derived from `order_number` (see [`crate::checkout`])
    pub transaction_number: String,
    pub customer_id: String,
    /// Line snapshot taken from the cart at commit time
    pub items: Vec<CartLine>,
    pub service_type: ServiceType,
    /// `NOT_SEATED` (0) for takeout or unseated dine-in
    pub table_number: u8,
    pub status: OrderStatus,
    /// Unix millis
    pub created_at: i64,
}

impl Order {
    /// Order total across all line snapshots
    pub fn total(&self) -> Decimal {
        cart_total(&self.items)
    }
}
