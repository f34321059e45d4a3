//! Shared application state
//!
//! Built once at startup from an explicit schema and an opened store, then
//! handed to every route.

use std::sync::{Arc, Mutex};

use crate::schema::{FormSchema, Payload};
use crate::storage::{PageRequest, StorageError, StorageResult, SubmissionPage, SubmissionRecord, SubmissionStore};

/// State shared across handlers
pub struct AppState {
    schema: Arc<FormSchema>,
    store: Mutex<SubmissionStore>,
}

impl AppState {
    pub fn new(schema: FormSchema, store: SubmissionStore) -> Self {
        Self {
            schema: Arc::new(schema),
            store: Mutex::new(store),
        }
    }

    /// The form schema served and enforced
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Appends an accepted payload. Writers are serialized by the lock.
    pub fn append(&self, payload: Payload) -> StorageResult<SubmissionRecord> {
        let mut store = self.store.lock().map_err(|_| StorageError::LockPoisoned)?;
        store.append(payload)
    }

    /// Returns one page of submissions
    pub fn list(&self, request: &PageRequest) -> StorageResult<SubmissionPage> {
        let store = self.store.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(store.list(request))
    }

    /// Number of stored submissions
    pub fn submission_count(&self) -> StorageResult<usize> {
        let store = self.store.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(store.len())
    }
}
