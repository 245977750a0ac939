//! Checkout wire types
//!
//! Request/response structures for the checkout operation and the
//! transaction number codec used on receipts.
//!
//! # Error codes
//!
//! | Code | Meaning | Recoverable by user |
//! |------|---------|---------------------|
//! | `empty_cart` | no open cart / no lines | yes (add items) |
//! | `invalid_table` | table number outside `1..=N` | yes |
//! | `table_occupied` | lost the race for a table | yes (pick another) |
//! | `item_not_found` | cart references a removed item | yes (edit cart) |
//! | `insufficient_stock` | not enough stock for a line | yes (reduce qty) |
//! | `allocation_failed` | order counter unreachable | no |
//! | `persistence_failed` | commit failed | no |

use crate::types::{NOT_SEATED, ServiceType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Checkout submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub customer_id: String,
    #[serde(default)]
    pub service_type: ServiceType,
    /// Table to reserve for dine-in; `NOT_SEATED` skips reservation
    #[serde(default)]
    pub table_number: u8,
}

impl CheckoutRequest {
    /// Takeout requests never touch the table registry
    pub fn wants_table(&self) -> bool {
        self.service_type == ServiceType::DineIn && self.table_number != NOT_SEATED
    }
}

/// Successful checkout outcome, shown on the confirmation route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub order_number: u64,
    pub transaction_number: String,
    pub total: Decimal,
}

/// Machine-readable checkout failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutErrorCode {
    EmptyCart,
    InvalidTable,
    TableOccupied,
    ItemNotFound,
    InsufficientStock,
    AllocationFailed,
    PersistenceFailed,
}

/// Checkout failure as it crosses the wire: a code for the client to
/// branch on plus a human-readable message to surface as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutFailure {
    pub code: CheckoutErrorCode,
    pub message: String,
}

impl std::fmt::Display for CheckoutFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ============================================================================
// Transaction number codec
// ============================================================================

const TXN_PREFIX: &str = "TXN-";
const TXN_DIGITS: usize = 8;

/// Format an order number as the customer-facing transaction number.
///
/// Fixed width and reversible: `1000` → `TXN-00001000`.
pub fn generate_transaction_number(order_number: u64) -> String {
    format!("{}{:08}", TXN_PREFIX, order_number)
}

/// Recover the order number from a transaction number.
///
/// Returns `None` for anything that `generate_transaction_number` could
/// not have produced.
pub fn parse_transaction_number(transaction_number: &str) -> Option<u64> {
    let digits = transaction_number.strip_prefix(TXN_PREFIX)?;
    if digits.len() < TXN_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_number_format() {
        assert_eq!(generate_transaction_number(1000), "TXN-00001000");
        assert_eq!(generate_transaction_number(99_999_999), "TXN-99999999");
        // Wider than 8 digits still round-trips, just without padding
        assert_eq!(generate_transaction_number(1_234_567_890), "TXN-1234567890");
    }

    #[test]
    fn test_transaction_number_reversible() {
        for n in [1000u64, 1001, 4242, 99_999_999, 1_234_567_890] {
            let txn = generate_transaction_number(n);
            assert_eq!(parse_transaction_number(&txn), Some(n));
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_transaction_number("TXN-1000"), None); // not fixed width
        assert_eq!(parse_transaction_number("RCPT-00001000"), None);
        assert_eq!(parse_transaction_number("TXN-0000100a"), None);
        assert_eq!(parse_transaction_number(""), None);
    }

    #[test]
    fn test_wants_table() {
        let mut req = CheckoutRequest {
            customer_id: "c1".into(),
            service_type: ServiceType::DineIn,
            table_number: 3,
        };
        assert!(req.wants_table());

        req.table_number = NOT_SEATED;
        assert!(!req.wants_table());

        req.service_type = ServiceType::Takeout;
        req.table_number = 3;
        assert!(!req.wants_table());
    }
}
