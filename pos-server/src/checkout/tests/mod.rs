use super::*;
use rust_decimal::Decimal;
use shared::checkout::CheckoutRequest;
use shared::models::{CartLine, MenuItem};
use shared::types::{NOT_SEATED, ServiceType};

mod test_core;
mod test_failures;

const TABLE_COUNT: u8 = 25;

fn test_coordinator() -> (CheckoutStorage, CheckoutCoordinator) {
    let storage = CheckoutStorage::open_in_memory().unwrap();
    let coordinator =
        CheckoutCoordinator::new(storage.clone(), TABLE_COUNT, CheckoutEvents::new());
    (storage, coordinator)
}

fn seed_item(storage: &CheckoutStorage, id: &str, price: u32, stock: u32) {
    storage
        .upsert_menu_item(&MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: Decimal::from(price),
            stock,
            image_url: String::new(),
        })
        .unwrap();
}

/// Fill a cart with `(menu_item_id, quantity)` lines, snapshotting
/// name/price from the seeded catalog the way the cart API does
fn fill_cart(storage: &CheckoutStorage, customer_id: &str, lines: &[(&str, u32)]) {
    let carts = CartStore::new(storage.clone());
    for (id, quantity) in lines {
        let item = storage.menu_item(id).unwrap().unwrap();
        carts
            .add_line(
                customer_id,
                CartLine {
                    menu_item_id: item.id,
                    name: item.name,
                    price: item.price,
                    quantity: *quantity,
                    image_url: item.image_url,
                },
            )
            .unwrap();
    }
}

fn dine_in(customer_id: &str, table_number: u8) -> CheckoutRequest {
    CheckoutRequest {
        customer_id: customer_id.to_string(),
        service_type: ServiceType::DineIn,
        table_number,
    }
}

fn takeout(customer_id: &str) -> CheckoutRequest {
    CheckoutRequest {
        customer_id: customer_id.to_string(),
        service_type: ServiceType::Takeout,
        table_number: NOT_SEATED,
    }
}
