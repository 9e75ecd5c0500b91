//! End-to-end walk through the store: stock, deplete, scan, persist, reload.

use stockroom_inventory::{
    DEFAULT_LOW_STOCK_THRESHOLD, Inventory, LoadOutcome, Removal, StockError, StockLogEntry,
};

#[test]
fn apple_banana_scenario() {
    let mut inv = Inventory::new();
    let mut log: Vec<StockLogEntry> = Vec::new();

    inv.add_item("apple", 10, Some(&mut log)).unwrap();
    inv.add_item("banana", 3, Some(&mut log)).unwrap();
    assert_eq!(log.len(), 2);

    assert_eq!(inv.remove_item("apple", 3).unwrap(), Removal::Remaining(7));
    assert_eq!(inv.get_qty("apple"), 7);

    let err = inv.remove_item("orange", 1).unwrap_err();
    assert!(matches!(err, StockError::NotFound(_)));
    assert!(err.is_warning());

    assert_eq!(inv.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD), vec!["banana"]);
}

#[test]
fn independent_inventories_do_not_share_state() {
    let mut front = Inventory::new();
    let mut back = Inventory::new();
    front.add_item("apple", 4, None).unwrap();
    back.add_item("apple", 9, None).unwrap();
    back.remove_item("apple", 9).unwrap();

    assert_eq!(front.get_qty("apple"), 4);
    assert_eq!(back.get_qty("apple"), 0);
}

#[test]
fn persisted_inventory_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut inv = Inventory::new();
    inv.add_item("apple", 10, None).unwrap();
    inv.add_item("banana", 3, None).unwrap();
    inv.remove_item("apple", 3).unwrap();
    inv.save_data(&path).unwrap();

    let mut reloaded = Inventory::new();
    assert_eq!(reloaded.load_data(&path).unwrap(), LoadOutcome::Loaded { items: 2 });
    assert_eq!(reloaded, inv);

    let mut report = Vec::new();
    reloaded.write_report(&mut report).unwrap();
    assert_eq!(
        String::from_utf8(report).unwrap(),
        "Items Report\napple -> 7\nbanana -> 3\n"
    );
}
