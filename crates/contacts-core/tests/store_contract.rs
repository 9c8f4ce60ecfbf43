//! Contract tests for ContactStore
//!
//! Exercised through a trait object so any implementation can be swapped
//! in behind the interpreter.

use contacts_core::traits::NO_CONTACTS;
use contacts_core::{ContactStore, Error, MemoryContactStore, Record};

fn store() -> Box<dyn ContactStore> {
    Box::new(MemoryContactStore::new())
}

#[tokio::test]
async fn add_then_lookup_returns_same_name() {
    let store = store();
    store.add_record(Record::new("alice").unwrap()).await.unwrap();

    let found = store.get_record("alice").await.unwrap();
    assert_eq!(found.map(|r| r.name().to_string()).as_deref(), Some("alice"));
}

#[tokio::test]
async fn remove_then_lookup_reports_absent() {
    let store = store();
    store.add_record(Record::new("alice").unwrap()).await.unwrap();
    store.remove_record("alice").await.unwrap();

    assert!(store.get_record("alice").await.unwrap().is_none());
    assert!(!store.contains("alice").await.unwrap());
    assert!(matches!(
        store.remove_record("alice").await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn update_via_lookup_and_reinsert() {
    let store = store();
    let mut alice = Record::new("alice").unwrap();
    alice.add_phone("111");
    store.add_record(alice).await.unwrap();

    let mut alice = store.get_record("alice").await.unwrap().unwrap();
    assert!(alice.edit_phone("111", "222").is_changed());
    alice.set_birthday("1990-05-01").unwrap();
    store.add_record(alice).await.unwrap();

    assert_eq!(
        store.render().await.unwrap(),
        "Name: alice\nBirthday: 1990-05-01\nPhones:\n- 222"
    );
}

#[tokio::test]
async fn empty_store_renders_fixed_message() {
    assert_eq!(store().render().await.unwrap(), NO_CONTACTS);
    assert_eq!(NO_CONTACTS, "No contacts found.");
}
