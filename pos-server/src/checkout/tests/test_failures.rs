use super::*;
use shared::checkout::{CheckoutErrorCode, CheckoutFailure};
use shared::types::TableStatus;


// ========================================================================
// Insufficient stock — the whole commit rolls back
// ========================================================================

#[test]
fn test_insufficient_stock_reports_available() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 1);
    fill_cart(&storage, "c1", &[("burger", 2)]);

    let err = coordinator.checkout(&dine_in("c1", 3)).unwrap_err();
    match err {
        CheckoutError::InsufficientStock { item, available } => {
            assert_eq!(item, "burger");
            assert_eq!(available, 1);
        }
        other => panic!("expected InsufficientStock, got {other:?}"),
    }

    // Stock untouched, no order, cart intact
    assert_eq!(storage.menu_item("burger").unwrap().unwrap().stock, 1);
    assert!(storage.orders_for_customer("c1").unwrap().is_empty());
    let carts = CartStore::new(storage.clone());
    assert_eq!(carts.lines("c1").unwrap().len(), 1);

    // The table reserved earlier in the same attempt was rolled back too
    assert!(storage.dining_table(3).unwrap().is_none());
    let registry = TableRegistry::new(storage.clone(), TABLE_COUNT);
    registry.try_acquire(3).unwrap();
}

#[test]
fn test_multi_item_decrements_are_all_or_nothing() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    seed_item(&storage, "fries", 60, 0);
    fill_cart(&storage, "c1", &[("burger", 2), ("fries", 1)]);

    let err = coordinator.checkout(&takeout("c1")).unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::InsufficientStock { available: 0, .. }
    ));

    // The burger decrement that succeeded inside the transaction must not
    // stick after the abort
    assert_eq!(storage.menu_item("burger").unwrap().unwrap().stock, 5);
    assert_eq!(storage.menu_item("fries").unwrap().unwrap().stock, 0);
}

#[test]
fn test_failed_checkout_burns_no_order_number() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 1);
    fill_cart(&storage, "c1", &[("burger", 2)]);

    coordinator.checkout(&takeout("c1")).unwrap_err();

    let sequencer = OrderSequencer::new(storage.clone());
    assert_eq!(sequencer.current().unwrap(), None);

    // After the customer trims the cart, the first committed order still
    // gets the initial number
    let carts = CartStore::new(storage.clone());
    carts.set_quantity("c1", "burger", 1).unwrap().unwrap();
    let receipt = coordinator.checkout(&takeout("c1")).unwrap();
    assert_eq!(receipt.order_number, 1000);
}


// ========================================================================
// Missing items / invalid tables
// ========================================================================

#[test]
fn test_cart_line_for_removed_item_fails() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 1)]);

    // Catalog lost the item after it was carted
    let txn = storage.begin_write().unwrap();
    {
        let mut table = txn.open_table(crate::checkout::storage::MENU_TABLE).unwrap();
        table.remove("burger").unwrap();
    }
    txn.commit().unwrap();

    assert!(matches!(
        coordinator.checkout(&takeout("c1")),
        Err(CheckoutError::ItemNotFound(id)) if id == "burger"
    ));
}

#[test]
fn test_table_number_out_of_range_rejected() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 1)]);

    assert!(matches!(
        coordinator.checkout(&dine_in("c1", TABLE_COUNT + 1)),
        Err(CheckoutError::InvalidTable(_))
    ));
    // Nothing applied
    assert_eq!(storage.menu_item("burger").unwrap().unwrap().stock, 5);
    assert!(storage.orders_for_customer("c1").unwrap().is_empty());
}


// ========================================================================
// Table occupancy races and release
// ========================================================================

#[test]
fn test_checkout_against_occupied_table_fails_cleanly() {
    let (storage, coordinator) = test_coordinator();
    seed_item(&storage, "burger", 150, 5);
    fill_cart(&storage, "c1", &[("burger", 2)]);

    let registry = TableRegistry::new(storage.clone(), TABLE_COUNT);
    registry.try_acquire(3).unwrap();

    assert!(matches!(
        coordinator.checkout(&dine_in("c1", 3)),
        Err(CheckoutError::TableOccupied(3))
    ));

    // No side effects from the failed attempt
    assert_eq!(storage.menu_item("burger").unwrap().unwrap().stock, 5);
    let carts = CartStore::new(storage.clone());
    assert_eq!(carts.lines("c1").unwrap().len(), 1);
    assert!(storage.orders_for_customer("c1").unwrap().is_empty());
}

#[test]
fn test_release_then_reacquire() {
    let storage = CheckoutStorage::open_in_memory().unwrap();
    let registry = TableRegistry::new(storage.clone(), TABLE_COUNT);

    registry.try_acquire(5).unwrap();
    assert!(matches!(
        registry.try_acquire(5),
        Err(CheckoutError::TableOccupied(5))
    ));

    assert!(registry.release(5).unwrap());
    assert_eq!(storage.dining_table(5).unwrap().unwrap().status, TableStatus::Free);
    registry.try_acquire(5).unwrap();

    // Releasing a free table is a no-op
    registry.release(5).unwrap();
    assert!(!registry.release(5).unwrap());
}


// ========================================================================
// Wire classification
// ========================================================================

#[test]
fn test_errors_map_to_wire_codes() {
    let cases = [
        (CheckoutError::EmptyCart, CheckoutErrorCode::EmptyCart),
        (CheckoutError::InvalidTable(26), CheckoutErrorCode::InvalidTable),
        (CheckoutError::TableOccupied(3), CheckoutErrorCode::TableOccupied),
        (
            CheckoutError::ItemNotFound("burger".into()),
            CheckoutErrorCode::ItemNotFound,
        ),
        (
            CheckoutError::InsufficientStock {
                item: "burger".into(),
                available: 1,
            },
            CheckoutErrorCode::InsufficientStock,
        ),
        (
            CheckoutError::AllocationFailed("counter unreachable".into()),
            CheckoutErrorCode::AllocationFailed,
        ),
    ];

    for (err, code) in cases {
        let failure: CheckoutFailure = err.into();
        assert_eq!(failure.code, code);
        assert!(!failure.message.is_empty());
    }

    let failure: CheckoutFailure = CheckoutError::InsufficientStock {
        item: "burger".into(),
        available: 1,
    }
    .into();
    assert_eq!(failure.message, "Available stock for burger is 1");
}
