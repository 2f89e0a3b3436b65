//! Durable key-value backing contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the narrow string-keyed medium all persistence goes through.
//! - Provide a process-local implementation for tests and for degraded
//!   in-memory-only operation.
//!
//! # Invariants
//! - `set` either stores the full value or fails; no partial writes are
//!   observable through `get`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BackingResult<T> = Result<T, BackingError>;

/// I/O failure of the backing medium.
///
/// Both variants are recoverable: callers fall back to defaults on read
/// and keep the in-memory value on write.
#[derive(Debug)]
pub enum BackingError {
    /// The medium cannot be reached or refused the operation.
    Unavailable(String),
    /// The medium is out of space or quota.
    Full,
}

impl Display for BackingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "backing store unavailable: {details}"),
            Self::Full => write!(f, "backing store is full"),
        }
    }
}

impl Error for BackingError {}

/// String-keyed durable medium.
///
/// One namespaced key per collection kind plus one for settings; each
/// value is a complete JSON document.
pub trait BackingStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> BackingResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> BackingResult<()>;

    /// Removes `key` if present.
    fn remove(&self, key: &str) -> BackingResult<()>;
}

/// Process-local backing store.
///
/// Used by tests and as the degraded fallback when no durable medium is
/// available. An optional byte quota exercises the `Full` path.
#[derive(Debug, Default)]
pub struct MemoryBackingStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once stored bytes would exceed
    /// `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn stored_bytes_after(&self, key: &str, value: &str) -> usize {
        let entries = self.entries.borrow();
        let current: usize = entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        current + key.len() + value.len()
    }
}

impl BackingStore for MemoryBackingStore {
    fn get(&self, key: &str) -> BackingResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BackingResult<()> {
        if let Some(quota) = self.quota_bytes {
            if self.stored_bytes_after(key, value) > quota {
                return Err(BackingError::Full);
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BackingResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BackingError, BackingStore, MemoryBackingStore};

    #[test]
    fn get_set_remove_roundtrip() {
        let store = MemoryBackingStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_prior_value() {
        let store = MemoryBackingStore::with_quota(8);
        store.set("k", "ok").unwrap();

        let err = store.set("k", "far too large").unwrap_err();
        assert!(matches!(err, BackingError::Full));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("ok"));
    }
}
