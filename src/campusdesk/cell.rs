//! # Durable State Cell
//!
//! A [`DurableCell`] binds one key of a [`KeyValueStore`] to a value held in
//! memory. Callers read and write it like ordinary state; every write is also
//! serialized to JSON and stored under the key, replacing whatever was there.
//!
//! ## Opening
//!
//! [`DurableCell::open`] reads the key once. If nothing is stored, the stored
//! text is blank, or it does not parse, the cell starts from the supplied
//! default. Read and parse problems are reported and logged, never returned.
//!
//! ## Writing
//!
//! - [`DurableCell::set`] replaces the value.
//! - [`DurableCell::update`] derives the new value from the current one.
//!
//! Both change the in-memory value first and then write it out. A failed
//! write (quota, I/O) leaves the new in-memory value in place, is handed to
//! the [`Reporter`], and shows up as [`SyncState::Unsynced`].
//!
//! The cell is mutated through `&mut self`, so two updates can never
//! interleave and an updater always sees the latest value.

use crate::notify::{CmdMessage, Reporter};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// Whether the in-memory value matches what was last written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Synced,
    Unsynced,
}

pub struct DurableCell<T, S: KeyValueStore> {
    key: String,
    value: T,
    store: Rc<S>,
    reporter: Rc<dyn Reporter>,
    state: SyncState,
}

impl<T, S> DurableCell<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn open(
        store: Rc<S>,
        key: impl Into<String>,
        default: T,
        reporter: Rc<dyn Reporter>,
    ) -> Self {
        let key = key.into();
        let value = match restore(store.as_ref(), &key, reporter.as_ref()) {
            Some(value) => value,
            None => default,
        };
        Self {
            key,
            value,
            store,
            reporter,
            state: SyncState::Synced,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn sync_state(&self) -> SyncState {
        self.state
    }

    pub fn set(&mut self, value: T) -> SyncState {
        self.commit(value)
    }

    pub fn update<F>(&mut self, f: F) -> SyncState
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.commit(next)
    }

    fn commit(&mut self, next: T) -> SyncState {
        self.value = next;
        self.state = match self.persist() {
            Ok(bytes) => {
                debug!(key = %self.key, bytes, "persisted");
                SyncState::Synced
            }
            Err(reason) => {
                error!(key = %self.key, %reason, "failed to persist");
                self.reporter.report(CmdMessage::error(format!(
                    "Changes to '{}' are kept for this session but could not be saved: {}",
                    self.key, reason
                )));
                SyncState::Unsynced
            }
        };
        self.state
    }

    fn persist(&self) -> crate::error::Result<usize> {
        let raw = serde_json::to_string(&self.value)?;
        self.store.set(&self.key, &raw)?;
        Ok(raw.len())
    }
}

fn restore<T, S>(store: &S, key: &str, reporter: &dyn Reporter) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => {
            debug!(key, "nothing stored, using default");
            return None;
        }
        Err(reason) => {
            warn!(key, %reason, "could not read stored value");
            reporter.report(CmdMessage::warning(format!(
                "Could not read saved '{}' ({}); starting from defaults.",
                key, reason
            )));
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(reason) => {
            warn!(key, %reason, "stored value is corrupt");
            reporter.report(CmdMessage::warning(format!(
                "Saved '{}' could not be parsed ({}); starting from defaults.",
                key, reason
            )));
            None
        }
    }
}
