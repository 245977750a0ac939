//! Dining Table Model

use crate::types::TableStatus;
use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// Tables are numbered `1..=N` (N from server config, default 25).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub table_number: u8,
    #[serde(default)]
    pub status: TableStatus,
}

impl DiningTable {
    pub fn free(table_number: u8) -> Self {
        Self {
            table_number,
            status: TableStatus::Free,
        }
    }

    pub fn occupied(table_number: u8) -> Self {
        Self {
            table_number,
            status: TableStatus::Occupied,
        }
    }
}
