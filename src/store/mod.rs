//! Ordered record list mirrored to a single storage slot.

pub mod error;
pub mod storage;

pub use error::*;
pub use storage::*;

use tracing::{debug, error, info, warn};

use crate::domain::Record;

/// Default slot name, shared with the browser form's local storage.
pub const DEFAULT_STORAGE_KEY: &str = "submittedData";

/// The structural change that triggered a write-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMutation {
    Appended(usize),
    Updated(usize),
    Removed(usize),
}

/// Committed records in insertion order. Position is the only identity.
///
/// Every successful structural mutation ends in [`RecordStore::on_mutated`],
/// which serializes the whole list back to the slot.
pub struct RecordStore<S> {
    storage: S,
    key: String,
    records: Vec<Record>,
}

impl<S: Storage> RecordStore<S> {
    /// Hydrates the store from `key`.
    ///
    /// A missing, unreadable or malformed slot yields an empty store.
    pub fn load_initial(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = match storage.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Record>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(key = %key, error = %e, "Stored records are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!(key = %key, "No stored records");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read stored records, starting empty");
                Vec::new()
            }
        };

        info!(key = %key, count = records.len(), "Record store hydrated");
        Self { storage, key, records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds `record` at the end and returns its index.
    pub fn append(&mut self, record: Record) -> Result<usize, StorageError> {
        self.records.push(record);
        let index = self.records.len() - 1;
        self.on_mutated(StoreMutation::Appended(index))?;
        Ok(index)
    }

    /// Replaces the record at `index`. Returns `false` without writing if
    /// `index` is out of bounds.
    pub fn update_at(&mut self, index: usize, record: Record) -> Result<bool, StorageError> {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                self.on_mutated(StoreMutation::Updated(index))?;
                Ok(true)
            }
            None => {
                debug!(index, len = self.records.len(), "Update index out of bounds, ignoring");
                Ok(false)
            }
        }
    }

    /// Removes the record at `index`, shifting later records down by one.
    /// Returns `None` without writing if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Record>, StorageError> {
        if index >= self.records.len() {
            debug!(index, len = self.records.len(), "Remove index out of bounds, ignoring");
            return Ok(None);
        }
        let removed = self.records.remove(index);
        self.on_mutated(StoreMutation::Removed(index))?;
        Ok(Some(removed))
    }

    /// Serializes the full list and writes it to the slot.
    pub fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.records)?;
        self.storage.set_item(&self.key, &raw)
    }

    fn on_mutated(&self, mutation: StoreMutation) -> Result<(), StorageError> {
        debug!(?mutation, len = self.records.len(), "Record store mutated");
        self.persist().inspect_err(|e| {
            error!(?mutation, error = %e, "Failed to persist records");
        })
    }
}
