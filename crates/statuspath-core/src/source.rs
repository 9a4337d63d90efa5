//! # Collaborator Traits
//!
//! The boundary between the pure core and the outside world.
//!
//! - `RecordSource`: delivers the current status of a record
//! - `PathObserver`: receives every recomputed snapshot
//!
//! Implementors live at the edges (the binary, tests). The core never
//! performs I/O itself.

use crate::view::PathSnapshot;
use crate::PathError;
use std::collections::BTreeMap;

/// Supplies the current status of a workflow record.
pub trait RecordSource {
    /// Fetch the status field of `record_id`.
    ///
    /// `Ok(None)` means the record exists but its status is not set.
    /// An `Err` is a fetch failure, which is distinct from "no data yet".
    fn fetch_status(&self, record_id: &str) -> Result<Option<String>, PathError>;
}

/// Receives a snapshot after every recomputation of a path view.
pub trait PathObserver {
    fn on_snapshot(&mut self, snapshot: &PathSnapshot);
}

/// Record source backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: BTreeMap<String, Option<String>>,
}

impl InMemoryRecordSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the status of a record.
    pub fn insert(&mut self, record_id: impl Into<String>, status: Option<String>) {
        self.records.insert(record_id.into(), status);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for InMemoryRecordSource {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl RecordSource for InMemoryRecordSource {
    fn fetch_status(&self, record_id: &str) -> Result<Option<String>, PathError> {
        self.records
            .get(record_id)
            .cloned()
            .ok_or_else(|| PathError::RecordNotFound(record_id.to_string()))
    }
}
