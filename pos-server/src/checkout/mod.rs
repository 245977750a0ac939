//! Checkout commit protocol
//!
//! The correctness core of the server: conditional stock decrements, table
//! acquisition, order number allocation and durable order persistence, all
//! committed as one atomic step per checkout.
//!
//! # Components
//!
//! - [`CheckoutStorage`] - the one redb database everything commits through
//! - [`InventoryLedger`] - per-item conditional stock decrement
//! - [`TableRegistry`] - per-table conditional acquire/release
//! - [`OrderSequencer`] - atomic order number allocation (starts at 1000)
//! - [`CartStore`] - the pending line items per customer
//! - [`CheckoutCoordinator`] - the combined commit
//! - [`CheckoutEvents`] - post-commit pub/sub for other sessions

pub mod cart_store;
pub mod coordinator;
pub mod events;
pub mod inventory;
pub mod sequencer;
pub mod storage;
pub mod tables;

#[cfg(test)]
mod tests;

pub use cart_store::CartStore;
pub use coordinator::{CheckoutCoordinator, CheckoutError};
pub use events::{CheckoutEvent, CheckoutEvents, EventEnvelope};
pub use inventory::InventoryLedger;
pub use sequencer::{INITIAL_ORDER_NUMBER, OrderSequencer};
pub use storage::{CheckoutStorage, StorageError, StorageResult};
pub use tables::TableRegistry;
