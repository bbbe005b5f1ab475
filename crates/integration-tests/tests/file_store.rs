//! Restart scenarios against the on-disk data file.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use openclose_core::{NewProduct, Price, ShopStatus};
use openclose_store::{
    Credentials, FileKeyValueStore, InventoryStore, KeyValueStore, LoginDelay, RecordingSink,
    SessionStore, SystemClock,
};

fn open(path: &Path) -> (SessionStore, InventoryStore) {
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(path).unwrap());
    let sink = RecordingSink::new();
    let session = SessionStore::open(
        Arc::clone(&storage),
        Arc::new(sink.clone()),
        Credentials::default(),
        LoginDelay::none(),
    );
    let inventory = InventoryStore::open(storage, Arc::new(sink), Arc::new(SystemClock));
    (session, inventory)
}

#[tokio::test]
async fn test_state_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.json");

    let (mut session, mut inventory) = open(&path);
    assert!(!path.exists());

    assert!(session.login("admin", "admin123").await.unwrap());
    inventory.toggle_status().unwrap();
    let tea = inventory
        .add_product(NewProduct::new("Tea", Price::from_cents(250), 40))
        .unwrap();
    drop((session, inventory));

    let (session, inventory) = open(&path);
    assert!(session.is_authenticated());
    assert_eq!(inventory.status(), ShopStatus::Open);
    assert_eq!(inventory.products().len(), 4);
    assert_eq!(inventory.products().last(), Some(&tea));
}

#[test]
fn test_data_file_is_an_object_of_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.json");

    let (_session, mut inventory) = open(&path);
    inventory.toggle_status().unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["shopStatus"], "open");
    assert!(value["products"].is_string());
    assert!(value.get("user").is_none());
}

#[test]
fn test_corrupt_data_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.json");
    std::fs::write(&path, "garbage").unwrap();

    let (session, inventory) = open(&path);
    assert!(!session.is_authenticated());
    assert_eq!(inventory.status(), ShopStatus::Closed);
    assert_eq!(inventory.products().len(), 3);
}
