//! OrderSequencer - globally unique, strictly increasing order numbers
//!
//! The ticket dispenser for the whole system. Allocation is a single
//! read-increment-write against the counter row inside one write
//! transaction; redb's single-writer model guarantees no two callers ever
//! observe the same value, no matter how many checkouts race.

use super::storage::{CheckoutStorage, COUNTERS_TABLE, StorageResult};
use redb::{ReadableTable, WriteTransaction};

/// Counter row key for checkout order numbers
const ORDER_COUNTER_KEY: &str = "checkout";

/// First order number ever issued (counter absent → initialized here)
pub const INITIAL_ORDER_NUMBER: u64 = 1000;

/// Handle over the counter row in [`CheckoutStorage`]
#[derive(Clone)]
pub struct OrderSequencer {
    storage: CheckoutStorage,
}

impl OrderSequencer {
    pub fn new(storage: CheckoutStorage) -> Self {
        Self { storage }
    }

    /// Allocate the next order number.
    ///
    /// The first allocation returns 1000; every later one returns exactly
    /// the previous value + 1.
    pub fn allocate(&self) -> StorageResult<u64> {
        let txn = self.storage.begin_write()?;
        let number = allocate_in(&txn)?;
        txn.commit()?;
        Ok(number)
    }

    /// Last issued number without allocating, `None` before the first one
    pub fn current(&self) -> StorageResult<Option<u64>> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(COUNTERS_TABLE)?;
        Ok(table.get(ORDER_COUNTER_KEY)?.map(|guard| guard.value()))
    }
}

/// Allocate inside an open transaction (shared with the coordinator's
/// combined commit). The number is only consumed if the caller commits.
pub(crate) fn allocate_in(txn: &WriteTransaction) -> StorageResult<u64> {
    let mut table = txn.open_table(COUNTERS_TABLE)?;
    let next = match table.get(ORDER_COUNTER_KEY)? {
        Some(guard) => guard.value() + 1,
        None => INITIAL_ORDER_NUMBER,
    };
    table.insert(ORDER_COUNTER_KEY, next)?;
    Ok(next)
}
