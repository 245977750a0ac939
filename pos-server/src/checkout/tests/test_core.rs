use super::*;
use shared::checkout::parse_transaction_number;
use shared::models::cart_total;
use shared::types::{OrderStatus, TableStatus};


// ========================================================================
// Happy path
// ========================================================================

#[test]
fn test_checkout_happy_path() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 2)]);

    let receipt = coordinator.checkout(&dine_in("c1", 3)).unwrap();

    assert_eq!(receipt.order_number, 1000);
    assert_eq!(receipt.transaction_number, "TXN-00001000");
    assert_eq!(receipt.total, Decimal::from(300));

    // Stock decremented
    let item = storage.menu_item("burger").unwrap().unwrap();
    assert_eq!(item.stock, 3);

    // Table occupied
    let table = storage.dining_table(3).unwrap().unwrap();
    assert_eq!(table.status, TableStatus::Occupied);

    // Order persisted
    let order = storage.order(1000).unwrap().unwrap();
    assert_eq!(order.customer_id, "c1");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.table_number, 3);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.total(), Decimal::from(300));

    // Cart cleared
    let carts = CartStore::new(storage.clone());
    assert!(carts.lines("c1").unwrap().is_empty());
}

#[test]
fn test_order_numbers_increment_by_one() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 10);

    fill_cart(&storage, "c1", &[("burger", 1)]);
    fill_cart(&storage, "c2", &[("burger", 1)]);

    let first = coordinator.checkout(&takeout("c1")).unwrap();
    let second = coordinator.checkout(&takeout("c2")).unwrap();

    assert_eq!(first.order_number, 1000);
    assert_eq!(second.order_number, 1001);
}

#[test]
fn test_receipt_transaction_number_reverses_to_order_number() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 1)]);

    let receipt = coordinator.checkout(&takeout("c1")).unwrap();
    assert_eq!(
        parse_transaction_number(&receipt.transaction_number),
        Some(receipt.order_number)
    );
}


// ========================================================================
// Table selection
// ========================================================================

#[test]
fn test_takeout_never_touches_tables() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 1)]);

    coordinator.checkout(&takeout("c1")).unwrap();

    let order = storage.order(1000).unwrap().unwrap();
    assert_eq!(order.table_number, NOT_SEATED);
    assert_eq!(order.service_type, ServiceType::Takeout);

    let registry = TableRegistry::new(storage.clone(), TABLE_COUNT);
    assert!(registry.occupied().unwrap().is_empty());
}

#[test]
fn test_dine_in_without_table_skips_reservation() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 1)]);

    let receipt = coordinator.checkout(&dine_in("c1", NOT_SEATED)).unwrap();

    let order = storage.order(receipt.order_number).unwrap().unwrap();
    assert_eq!(order.table_number, NOT_SEATED);

    let registry = TableRegistry::new(storage.clone(), TABLE_COUNT);
    assert!(registry.occupied().unwrap().is_empty());
}


// ========================================================================
// Empty cart / idempotence
// ========================================================================

#[test]
fn test_empty_cart_rejected_both_times() {
    let (_storage, coordinator) = test_coordinator();

    assert!(matches!(
        coordinator.checkout(&takeout("c1")),
        Err(CheckoutError::EmptyCart)
    ));
    assert!(matches!(
        coordinator.checkout(&takeout("c1")),
        Err(CheckoutError::EmptyCart)
    ));
}

#[test]
fn test_second_checkout_after_success_is_empty_cart() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 1)]);

    coordinator.checkout(&takeout("c1")).unwrap();

    // Cart was cleared by the commit; resubmitting must not create a
    // second order or burn a number
    assert!(matches!(
        coordinator.checkout(&takeout("c1")),
        Err(CheckoutError::EmptyCart)
    ));
    assert_eq!(storage.orders_for_customer("c1").unwrap().len(), 1);
    assert!(storage.order(1001).unwrap().is_none());
}


// ========================================================================
// Cart store behavior
// ========================================================================

#[test]
fn test_add_line_merges_same_item() {
    let storage = CheckoutStorage::open_in_memory().unwrap();
    seed_item(&storage, "burger", 150, 5);
    let carts = CartStore::new(storage.clone());

    fill_cart(&storage, "c1", &[("burger", 1), ("burger", 2)]);

    let lines = carts.lines("c1").unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(cart_total(&lines), Decimal::from(450));
}

#[test]
fn test_set_quantity_zero_removes_line() {
    let storage = CheckoutStorage::open_in_memory().unwrap();
    seed_item(&storage, "burger", 150, 5);
    let carts = CartStore::new(storage.clone());
    fill_cart(&storage, "c1", &[("burger", 2)]);

    let lines = carts.set_quantity("c1", "burger", 0).unwrap().unwrap();
    assert!(lines.is_empty());

    // Unknown line reports absence instead of failing
    assert!(carts.set_quantity("c1", "fries", 1).unwrap().is_none());
}


// ========================================================================
// Order history
// ========================================================================

#[test]
fn test_order_history_newest_first() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 10);

    for _ in 0..3 {
        fill_cart(&storage, "c1", &[("burger", 1)]);
        coordinator.checkout(&takeout("c1")).unwrap();
    }
    fill_cart(&storage, "c2", &[("burger", 1)]);
    coordinator.checkout(&takeout("c2")).unwrap();

    let history = storage.orders_for_customer("c1").unwrap();
    let numbers: Vec<u64> = history.iter().map(|o| o.order_number).collect();
    assert_eq!(numbers, vec![1002, 1001, 1000]);
}


// ========================================================================
// Events
// ========================================================================

#[test]
fn test_checkout_publishes_events() {
    let storage = CheckoutStorage::open_in_memory().unwrap();
    let events = CheckoutEvents::new();
    let coordinator = CheckoutCoordinator::new(storage.clone(), TABLE_COUNT, events.clone());
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 2)]);

    let mut rx = events.subscribe();
    coordinator.checkout(&dine_in("c1", 3)).unwrap();

    let published = [
        rx.try_recv().unwrap().event,
        rx.try_recv().unwrap().event,
        rx.try_recv().unwrap().event,
    ];
    assert!(published.contains(&CheckoutEvent::TableOccupied { table_number: 3 }));
    assert!(published.contains(&CheckoutEvent::StockChanged {
        menu_item_id: "burger".to_string(),
        stock: 3,
    }));
    assert!(published.contains(&CheckoutEvent::OrderCreated {
        order_number: 1000,
        customer_id: "c1".to_string(),
    }));
    assert!(rx.try_recv().is_err());
}
