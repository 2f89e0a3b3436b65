//! SQLite-backed durable store.
//!
//! # Responsibility
//! - Open file or in-memory connections for the key-value medium.
//! - Configure connection pragmas and run migrations before use.
//! - Map SQLite transport failures onto the narrow `BackingError` the
//!   cells recover from.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - Out-of-space failures surface as `BackingError::Full`; everything
//!   else as `Unavailable`.

use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::store::backing::{BackingError, BackingResult, BackingStore};
use crate::store::migrations::apply_migrations;
use crate::store::StoreResult;

/// Key-value store persisted in a SQLite database.
pub struct SqliteBackingStore {
    conn: Connection,
}

/// Opens a store file and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<SqliteBackingStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=store status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteBackingStore { conn })
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory store and applies all pending migrations.
pub fn open_store_in_memory() -> StoreResult<SqliteBackingStore> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=memory");

    let mut conn = Connection::open_in_memory()?;
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=store status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteBackingStore { conn })
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}

fn map_sqlite_error(err: rusqlite::Error) -> BackingError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == ErrorCode::DiskFull {
            return BackingError::Full;
        }
    }
    BackingError::Unavailable(err.to_string())
}

impl BackingStore for SqliteBackingStore {
    fn get(&self, key: &str) -> BackingResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(map_sqlite_error)
    }

    fn set(&self, key: &str, value: &str) -> BackingResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT (key) DO UPDATE SET value = excluded.value;",
                params![key, value],
            )
            .map(|_| ())
            .map_err(map_sqlite_error)
    }

    fn remove(&self, key: &str) -> BackingResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", params![key])
            .map(|_| ())
            .map_err(map_sqlite_error)
    }
}
