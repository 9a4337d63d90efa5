//! # Path View
//!
//! Caller-owned state for one rendered path.
//!
//! The view holds the latest inputs (record id, status, fetch error) and the
//! snapshot derived from them. Every input change recomputes the snapshot
//! from scratch and notifies subscribed observers.
//!
//! ## Render states
//!
//! | Inputs | Snapshot |
//! |--------|----------|
//! | no record id, or no status yet | not ready, loading shown |
//! | fetch failed | not ready, error shown, loading hidden |
//! | record id + status | projected path, guidance if the key has a message |

use crate::guidance::{GuidanceBook, GuidanceMessage};
use crate::primitives::DEFAULT_ERROR_MESSAGE;
use crate::projector::PathProjector;
use crate::source::{PathObserver, RecordSource};
use crate::types::ProjectionResult;
use crate::view::PageReference;
use crate::StatusCatalog;
use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD UPDATE
// =============================================================================

/// One delivery from the record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordUpdate {
    /// A fetch is in flight.
    Loading,
    /// The record arrived. `status` is `None` if the field is unset.
    Loaded { status: Option<String> },
    /// The fetch failed.
    Failed { reason: String },
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Renderer-facing state of a path view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSnapshot {
    pub record_id: Option<String>,
    pub status: Option<String>,
    pub projection: ProjectionResult,
    pub guidance: Option<GuidanceMessage>,
    /// User-facing error message, set only after a failed fetch.
    pub error: Option<String>,
    /// Underlying failure reason, for logs.
    pub error_detail: Option<String>,
    pub show_loading: bool,
}

impl Default for PathSnapshot {
    fn default() -> Self {
        Self {
            record_id: None,
            status: None,
            projection: ProjectionResult::not_ready(),
            guidance: None,
            error: None,
            error_detail: None,
            show_loading: true,
        }
    }
}

impl PathSnapshot {
    /// Snapshot of a projection, with guidance looked up in `book`.
    #[must_use]
    pub fn from_projection(projection: ProjectionResult, book: &GuidanceBook) -> Self {
        let guidance = book.lookup(projection.guidance_key.as_deref()).cloned();
        Self {
            show_loading: !projection.ready,
            projection,
            guidance,
            ..Self::default()
        }
    }

    /// Snapshot after a failed fetch: no path, error shown, loading hidden.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            show_loading: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.projection.ready
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

// =============================================================================
// PATH VIEW
// =============================================================================

/// Holds the inputs of one path and the snapshot derived from them.
pub struct PathView {
    projector: PathProjector,
    guidance: GuidanceBook,
    error_message: String,
    record_id: Option<String>,
    status: Option<String>,
    failure: Option<String>,
    snapshot: PathSnapshot,
    observers: Vec<Box<dyn PathObserver>>,
}

impl std::fmt::Debug for PathView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathView")
            .field("projector", &self.projector)
            .field("guidance", &self.guidance)
            .field("error_message", &self.error_message)
            .field("record_id", &self.record_id)
            .field("status", &self.status)
            .field("failure", &self.failure)
            .field("snapshot", &self.snapshot)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for PathView {
    fn default() -> Self {
        Self::new(StatusCatalog::default(), GuidanceBook::default())
    }
}

impl PathView {
    /// Create a view with no record id and no status.
    #[must_use]
    pub fn new(catalog: StatusCatalog, guidance: GuidanceBook) -> Self {
        let mut view = Self {
            projector: PathProjector::new(catalog),
            guidance,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            record_id: None,
            status: None,
            failure: None,
            snapshot: PathSnapshot::default(),
            observers: Vec::new(),
        };
        view.snapshot = view.derive();
        view
    }

    /// Replace the message shown after a failed fetch.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self.snapshot = self.derive();
        self
    }

    /// Set the record id directly, as the host does when it injects one.
    pub fn set_record_id(&mut self, record_id: Option<String>) -> &PathSnapshot {
        self.record_id = record_id.filter(|id| !id.is_empty());
        self.recompute()
    }

    /// Fall back to the page reference for a record id.
    ///
    /// Does nothing if a record id is already set. Returns true if an id
    /// was newly taken from the page.
    pub fn resolve_record_id(&mut self, page: &PageReference) -> bool {
        if self.record_id.is_some() {
            return false;
        }
        let Some(id) = page.record_id() else {
            return false;
        };
        self.record_id = Some(id.to_string());
        self.recompute();
        true
    }

    /// Apply one delivery from the record source.
    pub fn apply(&mut self, update: RecordUpdate) -> &PathSnapshot {
        match update {
            RecordUpdate::Loading => {
                self.status = None;
                self.failure = None;
            }
            RecordUpdate::Loaded { status } => {
                self.status = status;
                self.failure = None;
            }
            RecordUpdate::Failed { reason } => {
                self.status = None;
                self.failure = Some(reason);
            }
        }
        self.recompute()
    }

    /// Fetch the current status from `source` and apply the outcome.
    ///
    /// Without a record id there is nothing to fetch; the view stays loading.
    pub fn refresh(&mut self, source: &dyn RecordSource) -> &PathSnapshot {
        let Some(record_id) = self.record_id.clone() else {
            return self.recompute();
        };
        let update = match source.fetch_status(&record_id) {
            Ok(status) => RecordUpdate::Loaded { status },
            Err(e) => RecordUpdate::Failed {
                reason: e.to_string(),
            },
        };
        self.apply(update)
    }

    /// Register an observer. It is notified on every recomputation.
    pub fn subscribe(&mut self, observer: Box<dyn PathObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn snapshot(&self) -> &PathSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    fn recompute(&mut self) -> &PathSnapshot {
        self.snapshot = self.derive();
        for observer in &mut self.observers {
            observer.on_snapshot(&self.snapshot);
        }
        &self.snapshot
    }

    fn derive(&self) -> PathSnapshot {
        let mut snapshot = match self.failure {
            Some(_) => PathSnapshot::failed(self.error_message.clone()),
            None if self.record_id.is_some() => PathSnapshot::from_projection(
                self.projector.project(self.status.as_deref()),
                &self.guidance,
            ),
            None => PathSnapshot::default(),
        };
        snapshot.record_id = self.record_id.clone();
        snapshot.status = self.status.clone();
        snapshot.error_detail = self.failure.clone();
        snapshot
    }
}

// =============================================================================
// TESTS
// =============================================================================
