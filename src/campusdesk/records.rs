//! # Record Stores
//!
//! A [`RecordStore`] keeps one collection (gallery items or faculty members)
//! as a most-recent-first `Vec`, held in a [`DurableCell`] under the record
//! type's [`Record::STORAGE_KEY`].
//!
//! `add` is the only way a record comes into existence: it assigns the id and
//! the creation time. `delete` is the only way one leaves. Both go through the
//! cell's updater form so each is a single read-modify-write of the latest
//! collection.
//!
//! ## Ids
//!
//! Ids look like `gallery_1718031200123_3f2b9c0e8d7a4e1f9b6c5d4e3f2a1b0c`:
//! the record prefix, the creation time in Unix milliseconds, and the simple
//! form of a random v4 UUID. An id already present in the collection is
//! re-drawn.

use crate::cell::DurableCell;
use crate::model::Record;
use crate::notify::Reporter;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use tracing::info;
use uuid::Uuid;

pub struct RecordStore<R: Record, S: KeyValueStore> {
    cell: DurableCell<Vec<R>, S>,
}

impl<R: Record, S: KeyValueStore> RecordStore<R, S> {
    pub fn open(store: Rc<S>, reporter: Rc<dyn Reporter>) -> Self {
        Self {
            cell: DurableCell::open(store, R::STORAGE_KEY, Vec::new(), reporter),
        }
    }

    /// Records, newest first.
    pub fn list(&self) -> &[R] {
        self.cell.get()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.list().iter().find(|r| r.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.list().iter().position(|r| r.id() == id)
    }

    pub fn add(&mut self, draft: R::Draft) -> R {
        let created_at = Utc::now();
        let mut id = generate_id(R::ID_PREFIX, created_at);
        while self.get(&id).is_some() {
            id = generate_id(R::ID_PREFIX, created_at);
        }

        let record = R::from_draft(id, created_at, draft);
        let prepended = record.clone();
        self.cell.update(move |prev| {
            let mut next = Vec::with_capacity(prev.len() + 1);
            next.push(prepended);
            next.extend(prev.iter().cloned());
            next
        });
        info!(id = record.id(), key = self.cell.key(), "record added");
        record
    }

    /// Removes the record with `id`. An unknown id changes nothing and does
    /// not touch the store.
    pub fn delete(&mut self, id: &str) -> Option<R> {
        let removed = self.get(id).cloned()?;
        self.cell
            .update(|prev| prev.iter().filter(|r| r.id() != id).cloned().collect());
        info!(id, key = self.cell.key(), "record deleted");
        Some(removed)
    }
}

fn generate_id(prefix: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        at.timestamp_millis(),
        Uuid::new_v4().simple()
    )
}
