//! Domain models

pub mod cart;
pub mod dining_table;
pub mod menu_item;
pub mod order;

pub use cart::{CartLine, cart_total};
pub use dining_table::DiningTable;
pub use menu_item::MenuItem;
pub use order::Order;
