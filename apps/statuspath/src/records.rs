//! # Record Files
//!
//! File-backed record source and the logging observer.
//!
//! A record file is a JSON object mapping record ids to their current
//! status. `null` means the record exists but its status is unset:
//!
//! ```json
//! { "a0B7": "Approved", "a0B8": "Draft", "a0B9": null }
//! ```

use statuspath_core::{InMemoryRecordSource, PathError, PathObserver, PathSnapshot};
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::{MAX_RECORDS_FILE_SIZE, read_bounded};

/// Parse a record map from JSON bytes.
pub fn parse_records(data: &[u8]) -> Result<InMemoryRecordSource, PathError> {
    let records: BTreeMap<String, Option<String>> = serde_json::from_slice(data)
        .map_err(|e| PathError::RecordFetch(format!("Invalid record file: {}", e)))?;
    Ok(records.into_iter().collect())
}

/// Load a record file into an in-memory source.
///
/// Read and parse failures surface as `PathError::RecordFetch` so the view
/// renders them as a fetch error.
pub fn load_records(path: &Path) -> Result<InMemoryRecordSource, PathError> {
    let data = read_bounded(path, MAX_RECORDS_FILE_SIZE)
        .map_err(|e| PathError::RecordFetch(e.to_string()))?;
    let source = parse_records(&data)?;
    tracing::debug!("Loaded {} records from {:?}", source.len(), path);
    Ok(source)
}

/// Logs every snapshot transition at the system boundary.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PathObserver for TracingObserver {
    fn on_snapshot(&mut self, snapshot: &PathSnapshot) {
        let record = snapshot.record_id.as_deref().unwrap_or("-");

        if let Some(detail) = &snapshot.error_detail {
            tracing::warn!(record, "Record error: {}", detail);
        } else if snapshot.projection.is_unmatched() {
            tracing::warn!(
                record,
                status = snapshot.status.as_deref().unwrap_or_default(),
                "Status is not in the catalog; rendering all stages complete"
            );
        } else if snapshot.is_ready() {
            tracing::info!(
                record,
                status = snapshot.status.as_deref().unwrap_or_default(),
                guidance = snapshot.projection.guidance_key.as_deref().unwrap_or("none"),
                "Path ready"
            );
        } else {
            tracing::debug!(record, "Path loading");
        }
    }
}
