//! Checkout event broadcast
//!
//! State changes other sessions care about (a table filling up, stock
//! dropping, an order landing) are published on a broadcast channel after
//! the owning transaction commits. Watchers poll or subscribe; delivery is
//! best-effort and outside the commit's correctness surface.

use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 256;

/// A state change produced by the checkout flow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckoutEvent {
    OrderCreated {
        order_number: u64,
        customer_id: String,
    },
    StockChanged {
        menu_item_id: String,
        stock: u32,
    },
    TableOccupied {
        table_number: u8,
    },
    TableReleased {
        table_number: u8,
    },
}

impl CheckoutEvent {
    /// Resource family the event belongs to (versioned independently)
    pub fn resource(&self) -> &'static str {
        match self {
            CheckoutEvent::OrderCreated { .. } => "orders",
            CheckoutEvent::StockChanged { .. } => "menu",
            CheckoutEvent::TableOccupied { .. } | CheckoutEvent::TableReleased { .. } => "tables",
        }
    }
}

/// Event with its per-resource version, so subscribers can tell stale from
/// fresh after a reconnect
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    pub version: u64,
    #[serde(flatten)]
    pub event: CheckoutEvent,
}

/// Per-resource version counters (lock-free, atomically incremented)
#[derive(Debug, Default)]
struct ResourceVersions {
    versions: DashMap<&'static str, u64>,
}

impl ResourceVersions {
    fn increment(&self, resource: &'static str) -> u64 {
        let mut entry = self.versions.entry(resource).or_insert(0);
        *entry += 1;
        *entry
    }
}

/// Publish/subscribe handle for checkout events
#[derive(Clone)]
pub struct CheckoutEvents {
    sender: broadcast::Sender<EventEnvelope>,
    versions: Arc<ResourceVersions>,
}

impl CheckoutEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            versions: Arc::new(ResourceVersions::default()),
        }
    }

    /// Publish one event. No subscribers is fine; slow subscribers lag and
    /// observe `RecvError::Lagged` rather than blocking the publisher.
    pub fn publish(&self, event: CheckoutEvent) {
        let version = self.versions.increment(event.resource());
        tracing::debug!(?event, version, "checkout event");
        let _ = self.sender.send(EventEnvelope { version, event });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }
}

impl Default for CheckoutEvents {
    fn default() -> Self {
        Self::new()
    }
}
