//! redb-based storage layer for the checkout commit protocol
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `menu` | `menu_item_id` | `MenuItem` | Catalog + stock counters |
//! | `tables` | `table_number` | `DiningTable` | Occupancy state |
//! | `counters` | `()` | `u64` | Checkout order counter |
//! | `orders` | `order_number` | `Order` | Durable checkout records |
//! | `carts` | `customer_id` | `Vec<CartLine>` | Open carts |
//!
//! Everything the checkout commit touches lives in this one database on
//! purpose: redb's single-writer, copy-on-write transactions are what let
//! the coordinator reserve a table, decrement every line, allocate the
//! order number, persist the order and clear the cart as one atomic step.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default — a commit that
//! returns is on disk, and the file is always in a consistent state even
//! across power loss. This matters for counter devices that get unplugged.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::models::{CartLine, DiningTable, MenuItem, Order};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Catalog + stock: key = menu item id, value = JSON-serialized MenuItem
pub(crate) const MENU_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("menu");

/// Table occupancy: key = table number, value = JSON-serialized DiningTable
pub(crate) const TABLES_TABLE: TableDefinition<u8, &[u8]> = TableDefinition::new("tables");

/// Counters: key = counter name, value = last issued number
pub(crate) const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

/// Orders: key = order number, value = JSON-serialized Order
pub(crate) const ORDERS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("orders");

/// Carts: key = customer id, value = JSON-serialized Vec<CartLine>
pub(crate) const CARTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("carts");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Checkout storage backed by redb
#[derive(Clone)]
pub struct CheckoutStorage {
    db: Arc<Database>,
}

impl CheckoutStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Open an in-memory database (tests)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Create all tables so later read transactions never see a missing one
    fn init_tables(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(MENU_TABLE)?;
            let _ = write_txn.open_table(TABLES_TABLE)?;
            let _ = write_txn.open_table(COUNTERS_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(CARTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction
    ///
    /// redb serializes writers: concurrent callers block here until the
    /// current write transaction commits or aborts. Dropping the returned
    /// transaction without committing aborts it with no applied effects.
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Begin a read transaction (consistent snapshot)
    pub(crate) fn begin_read(&self) -> StorageResult<redb::ReadTransaction> {
        Ok(self.db.begin_read()?)
    }

    // ========== Menu (catalog collaborator) ==========

    /// Insert or replace a menu item
    pub fn upsert_menu_item(&self, item: &MenuItem) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(MENU_TABLE)?;
            let bytes = serde_json::to_vec(item)?;
            table.insert(item.id.as_str(), bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Find a menu item by id
    pub fn menu_item(&self, id: &str) -> StorageResult<Option<MenuItem>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MENU_TABLE)?;
        match table.get(id)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// All menu items, ordered by id
    pub fn list_menu_items(&self) -> StorageResult<Vec<MenuItem>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MENU_TABLE)?;
        let mut items = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            items.push(serde_json::from_slice(value.value())?);
        }
        Ok(items)
    }

    // ========== Tables ==========

    /// Occupancy state of one table; absent means never touched → free
    pub fn dining_table(&self, table_number: u8) -> StorageResult<Option<DiningTable>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLES_TABLE)?;
        match table.get(table_number)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    // ========== Orders (persistence collaborator) ==========

    /// Find an order by its number
    pub fn order(&self, order_number: u64) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        match table.get(order_number)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Order history for one customer, newest first
    pub fn orders_for_customer(&self, customer_id: &str) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        let mut orders = Vec::new();
        for entry in table.iter()?.rev() {
            let (_, value) = entry?;
            let order: Order = serde_json::from_slice(value.value())?;
            if order.customer_id == customer_id {
                orders.push(order);
            }
        }
        Ok(orders)
    }

    /// Append an order inside an open transaction.
    ///
    /// Order numbers come from the sequencer and are never reissued, so
    /// this is append-only in practice.
    pub(crate) fn put_order_in(txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let bytes = serde_json::to_vec(order)?;
        table.insert(order.order_number, bytes.as_slice())?;
        Ok(())
    }

    // ========== Cart access (shared with CartStore) ==========

    /// Read a customer's cart lines inside an open transaction
    pub(crate) fn cart_lines_in(
        txn: &WriteTransaction,
        customer_id: &str,
    ) -> StorageResult<Vec<CartLine>> {
        let table = txn.open_table(CARTS_TABLE)?;
        match table.get(customer_id)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace a customer's cart lines inside an open transaction
    pub(crate) fn put_cart_lines_in(
        txn: &WriteTransaction,
        customer_id: &str,
        lines: &[CartLine],
    ) -> StorageResult<()> {
        let mut table = txn.open_table(CARTS_TABLE)?;
        let bytes = serde_json::to_vec(lines)?;
        table.insert(customer_id, bytes.as_slice())?;
        Ok(())
    }
}
