use rusqlite::Connection;
use scholardesk_core::store::migrations::latest_version;
use scholardesk_core::store::BackingStore;
use scholardesk_core::{open_store, open_store_in_memory, StoreError};

#[test]
fn in_memory_store_roundtrips_values() {
    let store = open_store_in_memory().unwrap();

    assert!(store.get("missing").unwrap().is_none());

    store.set("papers", r#"[{"title":"a"}]"#).unwrap();
    assert_eq!(
        store.get("papers").unwrap().as_deref(),
        Some(r#"[{"title":"a"}]"#)
    );

    store.set("papers", "[]").unwrap();
    assert_eq!(store.get("papers").unwrap().as_deref(), Some("[]"));

    store.remove("papers").unwrap();
    assert!(store.get("papers").unwrap().is_none());
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.db");

    {
        let store = open_store(&path).unwrap();
        store.set("settings", r#"{"theme":"dark"}"#).unwrap();
    }

    let reopened = open_store(&path).unwrap();
    assert_eq!(
        reopened.get("settings").unwrap().as_deref(),
        Some(r#"{"theme":"dark"}"#)
    );
}

#[test]
fn reopening_applies_no_further_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.db");

    drop(open_store(&path).unwrap());
    drop(open_store(&path).unwrap());

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_on_disk_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!(
            "PRAGMA user_version = {};",
            latest_version() + 1
        ))
        .unwrap();
    }

    let result = open_store(&path);
    assert!(matches!(
        result,
        Err(StoreError::UnsupportedSchemaVersion { .. })
    ));
}
