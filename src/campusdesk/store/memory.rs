use super::{check_quota, KeyValueStore};
use crate::error::{DeskError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage for testing.
///
/// Uses `RefCell` for interior mutability since the desk is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    slots: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seed a raw value without counting it as a write.
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(DeskError::Store("Simulated write error".to_string()));
        }
        check_quota(key, value, self.quota)?;
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
