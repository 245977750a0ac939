//! Core enums shared across the ordering flow

use serde::{Deserialize, Serialize};

/// Sentinel table number for orders that are not seated (takeout, or
/// dine-in before a table was chosen). Real tables are numbered from 1.
pub const NOT_SEATED: u8 = 0;

/// 服务类型 - 堂食/外带
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// 堂食
    #[default]
    DineIn,
    /// 外带
    Takeout,
}

/// Order lifecycle status
///
/// `Pending` is set at checkout; the fulfillment workflow moves orders to
/// `Fulfilled` or `Cancelled` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Fulfilled,
    Cancelled,
}

/// Dining table occupancy state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Free,
    Occupied,
}
