//! 服务器状态 - 持有所有组件的共享引用
//!
//! `ServerState` 是服务器的核心数据结构。所有组件都是 `CheckoutStorage`
//! 上的轻量句柄 (内部 `Arc<Database>`)，Clone 成本极低。

use std::sync::Arc;

use crate::checkout::{
    CartStore, CheckoutCoordinator, CheckoutEvents, CheckoutStorage, InventoryLedger,
    OrderSequencer, TableRegistry,
};
use crate::core::Config;

/// Shared application state handed to every axum handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub storage: CheckoutStorage,
    pub coordinator: Arc<CheckoutCoordinator>,
    pub inventory: InventoryLedger,
    pub tables: TableRegistry,
    pub carts: CartStore,
    pub sequencer: OrderSequencer,
    pub events: CheckoutEvents,
}

impl ServerState {
    /// Open storage under the configured work dir and wire up components
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let storage = CheckoutStorage::open(config.db_path())?;
        tracing::info!(path = %config.db_path().display(), "checkout storage opened");
        Ok(Self::with_storage(config, storage))
    }

    /// Build state over existing storage (tests use in-memory storage)
    pub fn with_storage(config: &Config, storage: CheckoutStorage) -> Self {
        let events = CheckoutEvents::new();
        let coordinator = Arc::new(CheckoutCoordinator::new(
            storage.clone(),
            config.table_count,
            events.clone(),
        ));
        Self {
            config: Arc::new(config.clone()),
            coordinator,
            inventory: InventoryLedger::new(storage.clone()),
            tables: TableRegistry::new(storage.clone(), config.table_count),
            carts: CartStore::new(storage.clone()),
            sequencer: OrderSequencer::new(storage.clone()),
            events,
            storage,
        }
    }

    /// Start background tasks (currently the event log listener)
    pub fn start_background_tasks(&self) {
        let mut rx = self.events.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(envelope) => {
                        tracing::info!(
                            version = envelope.version,
                            event = ?envelope.event,
                            "event"
                        );
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "event listener lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }
}
