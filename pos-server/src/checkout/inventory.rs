//! InventoryLedger - per-item stock counters with conditional decrement
//!
//! A decrement is read-verify-write inside one write transaction, and redb
//! serializes writers, so decrements against the same item are linearizable:
//! two racing checkouts can never both take the last unit.

use super::coordinator::CheckoutError;
use super::storage::{CheckoutStorage, MENU_TABLE, StorageError};
use redb::WriteTransaction;
use shared::models::MenuItem;

/// Handle over the stock counters in [`CheckoutStorage`]
#[derive(Clone)]
pub struct InventoryLedger {
    storage: CheckoutStorage,
}

impl InventoryLedger {
    pub fn new(storage: CheckoutStorage) -> Self {
        Self { storage }
    }

    /// Conditionally decrement one item's stock.
    ///
    /// Succeeds with the new stock level iff `stock >= quantity`; fails with
    /// `InsufficientStock` (carrying the available amount) otherwise. Stock
    /// never goes negative.
    pub fn try_decrement(&self, menu_item_id: &str, quantity: u32) -> Result<u32, CheckoutError> {
        let txn = self.storage.begin_write()?;
        let new_stock = decrement_in(&txn, menu_item_id, quantity)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(new_stock)
    }

    /// Add stock back (catalog collaborator surface). Returns the new level.
    pub fn restock(&self, menu_item_id: &str, quantity: u32) -> Result<u32, CheckoutError> {
        let txn = self.storage.begin_write()?;
        let new_stock = {
            let mut table = txn.open_table(MENU_TABLE).map_err(StorageError::from)?;
            let mut item = read_item(&table, menu_item_id)?
                .ok_or_else(|| CheckoutError::ItemNotFound(menu_item_id.to_string()))?;
            item.stock = item.stock.saturating_add(quantity);
            let bytes = serde_json::to_vec(&item).map_err(StorageError::from)?;
            table
                .insert(menu_item_id, bytes.as_slice())
                .map_err(StorageError::from)?;
            item.stock
        };
        txn.commit().map_err(StorageError::from)?;
        Ok(new_stock)
    }

    /// Current stock level, `None` if the item does not exist
    pub fn stock_of(&self, menu_item_id: &str) -> Result<Option<u32>, StorageError> {
        Ok(self.storage.menu_item(menu_item_id)?.map(|item| item.stock))
    }
}

fn read_item<T>(table: &T, menu_item_id: &str) -> Result<Option<MenuItem>, CheckoutError>
where
    T: redb::ReadableTable<&'static str, &'static [u8]>,
{
    let bytes = table
        .get(menu_item_id)
        .map_err(StorageError::from)?
        .map(|guard| guard.value().to_vec());
    match bytes {
        Some(bytes) => Ok(Some(
            serde_json::from_slice(&bytes).map_err(StorageError::from)?,
        )),
        None => Ok(None),
    }
}

/// Decrement one item inside an open transaction (shared with the
/// coordinator's combined commit). Returns the new stock level.
pub(crate) fn decrement_in(
    txn: &WriteTransaction,
    menu_item_id: &str,
    quantity: u32,
) -> Result<u32, CheckoutError> {
    let mut table = txn.open_table(MENU_TABLE).map_err(StorageError::from)?;
    let mut item = read_item(&table, menu_item_id)?
        .ok_or_else(|| CheckoutError::ItemNotFound(menu_item_id.to_string()))?;

    if item.stock < quantity {
        return Err(CheckoutError::InsufficientStock {
            item: item.name,
            available: item.stock,
        });
    }

    item.stock -= quantity;
    let bytes = serde_json::to_vec(&item).map_err(StorageError::from)?;
    table
        .insert(menu_item_id, bytes.as_slice())
        .map_err(StorageError::from)?;
    Ok(item.stock)
}
