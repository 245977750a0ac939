//! TableRegistry - conditional acquire/release of dine-in tables
//!
//! Acquire is read-status-then-write inside one write transaction; at most
//! one of any number of racing acquires on the same table can succeed.

use super::coordinator::CheckoutError;
use super::storage::{CheckoutStorage, StorageError, TABLES_TABLE};
use redb::{ReadableTable, WriteTransaction};
use shared::models::DiningTable;
use shared::types::{NOT_SEATED, TableStatus};

/// Handle over the occupancy table in [`CheckoutStorage`]
#[derive(Clone)]
pub struct TableRegistry {
    storage: CheckoutStorage,
    table_count: u8,
}

impl TableRegistry {
    pub fn new(storage: CheckoutStorage, table_count: u8) -> Self {
        Self {
            storage,
            table_count,
        }
    }

    /// Claim a table exclusively. Fails with `TableOccupied` if it is
    /// already taken, `InvalidTable` outside `1..=table_count`.
    pub fn try_acquire(&self, table_number: u8) -> Result<(), CheckoutError> {
        let txn = self.storage.begin_write()?;
        acquire_in(&txn, table_number, self.table_count)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(())
    }

    /// Free a table when its order completes (fulfillment collaborator).
    ///
    /// Returns whether the table was actually occupied; releasing a free
    /// table is a no-op, not an error.
    pub fn release(&self, table_number: u8) -> Result<bool, CheckoutError> {
        if table_number == NOT_SEATED || table_number > self.table_count {
            return Err(CheckoutError::InvalidTable(table_number));
        }
        let txn = self.storage.begin_write()?;
        let was_occupied = {
            let mut table = txn.open_table(TABLES_TABLE).map_err(StorageError::from)?;
            let current = read_table(&table, table_number)?;
            let was_occupied =
                current.is_some_and(|t| t.status == TableStatus::Occupied);
            let bytes = serde_json::to_vec(&DiningTable::free(table_number))
                .map_err(StorageError::from)?;
            table
                .insert(table_number, bytes.as_slice())
                .map_err(StorageError::from)?;
            was_occupied
        };
        txn.commit().map_err(StorageError::from)?;
        Ok(was_occupied)
    }

    /// Full occupancy view `1..=table_count`; tables never written are free
    pub fn all(&self) -> Result<Vec<DiningTable>, StorageError> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(TABLES_TABLE)?;
        let mut tables = Vec::with_capacity(self.table_count as usize);
        for number in 1..=self.table_count {
            let entry = match table.get(number)? {
                Some(guard) => serde_json::from_slice(guard.value())?,
                None => DiningTable::free(number),
            };
            tables.push(entry);
        }
        Ok(tables)
    }

    /// Numbers of currently occupied tables
    pub fn occupied(&self) -> Result<Vec<u8>, StorageError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|t| t.status == TableStatus::Occupied)
            .map(|t| t.table_number)
            .collect())
    }
}

fn read_table<T>(table: &T, table_number: u8) -> Result<Option<DiningTable>, CheckoutError>
where
    T: ReadableTable<u8, &'static [u8]>,
{
    let bytes = table
        .get(table_number)
        .map_err(StorageError::from)?
        .map(|guard| guard.value().to_vec());
    match bytes {
        Some(bytes) => Ok(Some(
            serde_json::from_slice(&bytes).map_err(StorageError::from)?,
        )),
        None => Ok(None),
    }
}

/// Conditionally flip a table free → occupied inside an open transaction
/// (shared with the coordinator's combined commit).
pub(crate) fn acquire_in(
    txn: &WriteTransaction,
    table_number: u8,
    table_count: u8,
) -> Result<(), CheckoutError> {
    if table_number == NOT_SEATED || table_number > table_count {
        return Err(CheckoutError::InvalidTable(table_number));
    }

    let mut table = txn.open_table(TABLES_TABLE).map_err(StorageError::from)?;
    if let Some(current) = read_table(&table, table_number)?
        && current.status == TableStatus::Occupied
    {
        return Err(CheckoutError::TableOccupied(table_number));
    }

    let bytes =
        serde_json::to_vec(&DiningTable::occupied(table_number)).map_err(StorageError::from)?;
    table
        .insert(table_number, bytes.as_slice())
        .map_err(StorageError::from)?;
    Ok(())
}
