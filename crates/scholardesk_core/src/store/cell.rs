//! Hydration-safe typed cell over one backing key.
//!
//! # Responsibility
//! - Wrap one backing key with JSON (de)serialization and a default
//!   value.
//! - Distinguish "not yet loaded" from "loaded empty" via the hydration
//!   flag.
//!
//! # Invariants
//! - `hydrate` consults the backing key at most once per cell lifetime;
//!   `is_hydrated` becomes true after that attempt and never reverts.
//! - Writes keep the in-memory value authoritative for the running
//!   session; write-through to the backing medium is best-effort and a
//!   failure is never surfaced as an error.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::backing::BackingStore;

/// Value persisted by one cell.
///
/// `from_stored` is the single reconciliation point: implementations
/// backfill any field missing from older persisted documents from the
/// compiled-in defaults.
pub trait CellValue: Clone {
    fn default_value() -> Self;
    fn from_stored(raw: &str) -> Result<Self, serde_json::Error>;
    fn to_stored(&self) -> Result<String, serde_json::Error>;
}

/// Collections persist as plain JSON arrays; per-record serde defaults
/// handle fields introduced after the data was written.
impl<T> CellValue for Vec<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    fn default_value() -> Self {
        Vec::new()
    }

    fn from_stored(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

struct CellState<T> {
    value: T,
    hydrated: bool,
}

/// One typed value bound to one backing key.
pub struct PersistedCell<T: CellValue> {
    key: &'static str,
    backing: Rc<dyn BackingStore>,
    state: RefCell<CellState<T>>,
}

impl<T: CellValue> PersistedCell<T> {
    /// Creates an unhydrated cell holding the default value.
    pub fn new(backing: Rc<dyn BackingStore>, key: &'static str) -> Self {
        Self {
            key,
            backing,
            state: RefCell::new(CellState {
                value: T::default_value(),
                hydrated: false,
            }),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the current value and whether it was loaded from backing.
    pub fn read(&self) -> (T, bool) {
        let state = self.state.borrow();
        (state.value.clone(), state.hydrated)
    }

    /// Current value; callers gating on load state use `is_hydrated`.
    pub fn snapshot(&self) -> T {
        self.state.borrow().value.clone()
    }

    pub fn is_hydrated(&self) -> bool {
        self.state.borrow().hydrated
    }

    /// Performs the one-time backing read.
    ///
    /// Present and parseable data replaces the default; absent data,
    /// malformed data, and an unavailable backing all fall back to the
    /// default. Repeated calls are no-ops.
    pub fn hydrate(&self) {
        let mut state = self.state.borrow_mut();
        if state.hydrated {
            return;
        }

        match self.backing.get(self.key) {
            Ok(Some(raw)) => match T::from_stored(&raw) {
                Ok(value) => {
                    state.value = value;
                    info!(
                        "event=cell_hydrate module=store status=ok key={}",
                        self.key
                    );
                }
                Err(err) => {
                    // Malformed persisted data is discarded, not repaired.
                    warn!(
                        "event=cell_hydrate module=store status=fallback reason=malformed key={} error={}",
                        self.key, err
                    );
                }
            },
            Ok(None) => {
                debug!(
                    "event=cell_hydrate module=store status=default key={}",
                    self.key
                );
            }
            Err(err) => {
                warn!(
                    "event=cell_hydrate module=store status=fallback reason=backing key={} error={}",
                    self.key, err
                );
            }
        }

        state.hydrated = true;
    }

    /// Applies `updater` to the current value and writes through.
    ///
    /// The in-memory value always advances; a failed serialization or
    /// backing write is logged and swallowed.
    pub fn write(&self, updater: impl FnOnce(T) -> T) {
        let mut state = self.state.borrow_mut();
        let current = state.value.clone();
        state.value = updater(current);

        let raw = match state.value.to_stored() {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=cell_write module=store status=error reason=serialize key={} error={}",
                    self.key, err
                );
                return;
            }
        };

        if let Err(err) = self.backing.set(self.key, &raw) {
            warn!(
                "event=cell_write module=store status=error reason=backing key={} error={}",
                self.key, err
            );
        }
    }
}
