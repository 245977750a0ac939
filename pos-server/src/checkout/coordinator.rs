//! CheckoutCoordinator - the checkout commit protocol
//!
//! Converts a cart into a durable order under concurrent checkouts that
//! compete for the same tables, the same stock and the same counter.
//!
//! # Commit Flow
//!
//! ```text
//! checkout(request)
//!     ├─ 1. Begin write transaction (single writer, serialized)
//!     ├─ 2. Load the customer's open cart        → EmptyCart
//!     ├─ 3. Reserve the table (dine-in)          → TableOccupied / InvalidTable
//!     ├─ 4. Decrement stock per line             → InsufficientStock / ItemNotFound
//!     ├─ 5. Allocate the order number            → AllocationFailed
//!     ├─ 6. Persist the order (status pending)
//!     ├─ 7. Clear the cart
//!     ├─ 8. Commit                               → PersistenceFailed
//!     └─ 9. Broadcast events, return receipt
//! ```
//!
//! Every step from 2 to 7 runs inside the one transaction opened in step 1.
//! Any failure aborts it: no partial stock decrements, no table reservation
//! outliving a failed attempt, no order number burned, no cart cleared
//! without its order on disk. The cart is cleared iff the order committed.

use super::storage::{CheckoutStorage, StorageError};
use super::{events::CheckoutEvent, events::CheckoutEvents, inventory, sequencer, tables};
use shared::checkout::{
    CheckoutErrorCode, CheckoutFailure, CheckoutReceipt, CheckoutRequest,
    generate_transaction_number,
};
use shared::models::Order;
use shared::types::{NOT_SEATED, OrderStatus};
use thiserror::Error;

/// Checkout failures, classified per the error taxonomy the UI surfaces
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("No items in cart")]
    EmptyCart,

    #[error("Invalid table number: {0}")]
    InvalidTable(u8),

    #[error("Table {0} is already occupied")]
    TableOccupied(u8),

    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("Available stock for {item} is {available}")]
    InsufficientStock { item: String, available: u32 },

    #[error("Failed to allocate order number: {0}")]
    AllocationFailed(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<CheckoutError> for CheckoutFailure {
    fn from(err: CheckoutError) -> Self {
        let code = match &err {
            CheckoutError::EmptyCart => CheckoutErrorCode::EmptyCart,
            CheckoutError::InvalidTable(_) => CheckoutErrorCode::InvalidTable,
            CheckoutError::TableOccupied(_) => CheckoutErrorCode::TableOccupied,
            CheckoutError::ItemNotFound(_) => CheckoutErrorCode::ItemNotFound,
            CheckoutError::InsufficientStock { .. } => CheckoutErrorCode::InsufficientStock,
            CheckoutError::AllocationFailed(_) => CheckoutErrorCode::AllocationFailed,
            CheckoutError::Storage(_) => CheckoutErrorCode::PersistenceFailed,
        };
        CheckoutFailure {
            code,
            message: err.to_string(),
        }
    }
}

/// Orchestrates cart, table registry, inventory ledger and sequencer into
/// one logically atomic commit
#[derive(Clone)]
pub struct CheckoutCoordinator {
    storage: CheckoutStorage,
    table_count: u8,
    events: CheckoutEvents,
}

impl CheckoutCoordinator {
    pub fn new(storage: CheckoutStorage, table_count: u8, events: CheckoutEvents) -> Self {
        Self {
            storage,
            table_count,
            events,
        }
    }

    /// Run one checkout attempt to a terminal state.
    ///
    /// The coordinator never retries; the caller surfaces the error and the
    /// customer may re-submit against refreshed cart/stock state.
    pub fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutReceipt, CheckoutError> {
        let txn = self.storage.begin_write()?;

        // Dropping `txn` on any early return below aborts the transaction,
        // rolling back every mutation made so far.
        let lines = CheckoutStorage::cart_lines_in(&txn, &request.customer_id)?;
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let reserved_table = if request.wants_table() {
            tables::acquire_in(&txn, request.table_number, self.table_count)?;
            Some(request.table_number)
        } else {
            None
        };

        // All-or-nothing inventory reservation across the whole line set
        let mut stock_changes = Vec::with_capacity(lines.len());
        for line in &lines {
            let new_stock = inventory::decrement_in(&txn, &line.menu_item_id, line.quantity)?;
            stock_changes.push((line.menu_item_id.clone(), new_stock));
        }

        let order_number = sequencer::allocate_in(&txn)
            .map_err(|e| CheckoutError::AllocationFailed(e.to_string()))?;
        let transaction_number = generate_transaction_number(order_number);

        let order = Order {
            order_number,
            transaction_number: transaction_number.clone(),
            customer_id: request.customer_id.clone(),
            items: lines,
            service_type: request.service_type,
            table_number: reserved_table.unwrap_or(NOT_SEATED),
            status: OrderStatus::Pending,
            created_at: crate::utils::time::now_millis(),
        };
        let total = order.total();
        CheckoutStorage::put_order_in(&txn, &order)?;
        CheckoutStorage::put_cart_lines_in(&txn, &request.customer_id, &[])?;

        txn.commit().map_err(StorageError::from)?;

        tracing::info!(
            order_number,
            customer_id = %request.customer_id,
            table = reserved_table.unwrap_or(NOT_SEATED),
            %total,
            "checkout committed"
        );

        // Post-commit, best-effort notifications for other sessions
        if let Some(table_number) = reserved_table {
            self.events.publish(CheckoutEvent::TableOccupied { table_number });
        }
        for (menu_item_id, stock) in stock_changes {
            self.events
                .publish(CheckoutEvent::StockChanged { menu_item_id, stock });
        }
        self.events.publish(CheckoutEvent::OrderCreated {
            order_number,
            customer_id: request.customer_id.clone(),
        });

        Ok(CheckoutReceipt {
            order_number,
            transaction_number,
            total,
        })
    }
}
