//! CartStore - one open cart per customer
//!
//! Carts are keyed by customer id, so "exactly one open cart per customer"
//! holds by construction. Lines carry a name/price/image snapshot taken at
//! add time; the coordinator re-reads and clears the cart inside its commit
//! transaction.

use super::storage::{CARTS_TABLE, CheckoutStorage, StorageResult};
use redb::ReadableTable;
use shared::models::CartLine;

/// Handle over the carts table in [`CheckoutStorage`]
#[derive(Clone)]
pub struct CartStore {
    storage: CheckoutStorage,
}

impl CartStore {
    pub fn new(storage: CheckoutStorage) -> Self {
        Self { storage }
    }

    /// Current cart lines, empty if the customer has no cart yet
    pub fn lines(&self, customer_id: &str) -> StorageResult<Vec<CartLine>> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(CARTS_TABLE)?;
        match table.get(customer_id)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Add a line; if the same menu item is already in the cart its
    /// quantity is increased instead of adding a duplicate line.
    pub fn add_line(&self, customer_id: &str, line: CartLine) -> StorageResult<Vec<CartLine>> {
        let txn = self.storage.begin_write()?;
        let mut lines = CheckoutStorage::cart_lines_in(&txn, customer_id)?;
        match lines
            .iter_mut()
            .find(|l| l.menu_item_id == line.menu_item_id)
        {
            Some(existing) => existing.quantity += line.quantity,
            None => lines.push(line),
        }
        CheckoutStorage::put_cart_lines_in(&txn, customer_id, &lines)?;
        txn.commit()?;
        Ok(lines)
    }

    /// Set a line's quantity; quantity 0 removes the line.
    ///
    /// Returns the updated cart, or `None` if the line was not present.
    pub fn set_quantity(
        &self,
        customer_id: &str,
        menu_item_id: &str,
        quantity: u32,
    ) -> StorageResult<Option<Vec<CartLine>>> {
        let txn = self.storage.begin_write()?;
        let mut lines = CheckoutStorage::cart_lines_in(&txn, customer_id)?;
        let Some(index) = lines.iter().position(|l| l.menu_item_id == menu_item_id) else {
            return Ok(None);
        };
        if quantity == 0 {
            lines.remove(index);
        } else {
            lines[index].quantity = quantity;
        }
        CheckoutStorage::put_cart_lines_in(&txn, customer_id, &lines)?;
        txn.commit()?;
        Ok(Some(lines))
    }

    /// Remove a line. Returns whether it was present.
    pub fn remove_line(&self, customer_id: &str, menu_item_id: &str) -> StorageResult<bool> {
        Ok(self.set_quantity(customer_id, menu_item_id, 0)?.is_some())
    }

    /// Drop every line (abandoning the cart, not checking out)
    pub fn clear(&self, customer_id: &str) -> StorageResult<()> {
        let txn = self.storage.begin_write()?;
        CheckoutStorage::put_cart_lines_in(&txn, customer_id, &[])?;
        txn.commit()?;
        Ok(())
    }
}
