//! # Storage Layer
//!
//! The durable store is a plain key-value store of strings. It knows nothing
//! about records or JSON: serialization belongs to the
//! [`DurableCell`](crate::cell::DurableCell) sitting on top of it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one `{key}.json` file per key
//!   inside the data directory. Writes go to a temp file and are renamed into
//!   place so a slot is never left half-written.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures and count writes
//!
//! Both enforce an optional per-key byte quota, mirroring the quota a browser
//! puts on its local storage.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data_dir>/
//! ├── config.json
//! └── store/
//!     ├── gallery-items.json      # JSON array of gallery items
//!     └── faculty-members.json    # JSON array of faculty members
//! ```
//!
//! Methods take `&self` so several cells can share one store behind an `Rc`;
//! implementations use interior mutability where they need it.

use crate::error::{DeskError, Result};

pub mod fs;
pub mod memory;

/// Abstract interface for durable key-value storage.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`. Never merges.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub(crate) fn check_quota(key: &str, value: &str, quota: Option<usize>) -> Result<()> {
    match quota {
        Some(limit) if value.len() > limit => Err(DeskError::QuotaExceeded {
            key: key.to_string(),
            needed: value.len(),
            limit,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_allows_exact_fit() {
        assert!(check_quota("k", "abcd", Some(4)).is_ok());
        assert!(check_quota("k", "abcd", None).is_ok());
    }

    #[test]
    fn quota_rejects_oversized_value() {
        let err = check_quota("gallery-items", "abcde", Some(4)).unwrap_err();
        assert!(matches!(
            err,
            DeskError::QuotaExceeded {
                needed: 5,
                limit: 4,
                ..
            }
        ));
    }
}
