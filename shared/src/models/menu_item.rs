//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity (菜单项)
///
/// Owned by the catalog; the checkout pipeline only ever mutates `stock`,
/// and only through the inventory ledger's conditional decrement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub price: Decimal,
    /// Remaining stock, never negative
    pub stock: u32,
    #[serde(default)]
    pub image_url: String,
}

/// Create/update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: String,
}

impl From<MenuItemCreate> for MenuItem {
    fn from(data: MenuItemCreate) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            price: data.price,
            stock: data.stock,
            image_url: data.image_url,
        }
    }
}
