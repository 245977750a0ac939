//! Cart Model
//!
//! A cart is the mutable pre-order line collection for one customer,
//! keyed by customer id — at most one open cart per customer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line: a menu item reference plus a denormalized snapshot of
/// name/price/image taken at add time, so the order record is immune to
/// later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub price: Decimal,
    /// Always > 0; a line at quantity zero is removed instead
    pub quantity: u32,
    #[serde(default)]
    pub image_url: String,
}

impl CartLine {
    /// Line subtotal (price × quantity)
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Total across a set of cart lines
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: u32, quantity: u32) -> CartLine {
        CartLine {
            menu_item_id: id.to_string(),
            name: id.to_string(),
            price: Decimal::from(price),
            quantity,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_cart_total() {
        let lines = vec![line("burger", 150, 2), line("fries", 60, 1)];
        assert_eq!(cart_total(&lines), Decimal::from(360));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }
}
