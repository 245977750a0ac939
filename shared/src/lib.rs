//! Shared types for Coral POS
//!
//! Domain models and wire types used by the server and its clients:
//! menu/cart/table/order models, checkout request/response structures,
//! and the transaction number codec.

pub mod checkout;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use checkout::{
    CheckoutErrorCode, CheckoutFailure, CheckoutReceipt, CheckoutRequest,
    generate_transaction_number, parse_transaction_number,
};
pub use models::{CartLine, DiningTable, MenuItem, Order};
pub use types::{NOT_SEATED, OrderStatus, ServiceType, TableStatus};
