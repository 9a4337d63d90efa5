//! # statuspath-core
//!
//! The status path engine - THE LOGIC.
//!
//! Given an ordered catalog of workflow statuses and the current status of
//! a record, this crate computes the stage list of a linear progress path
//! (complete / current / future per stage) and the guidance shown for the
//! current status.
//!
//! ## Layout
//!
//! - `catalog`: validated, ordered status catalog (default: ethics request workflow)
//! - `projector`: the pure status-to-path projection
//! - `guidance`: guidance key to help message mapping
//! - `view`: caller-owned path state, record updates, page-reference fallback
//! - `source`: collaborator traits (record source, snapshot observer)
//!
//! ## Architectural Constraints
//!
//! - No async, no I/O, no logging: the binary owns every side effect
//! - Projection is total: unknown statuses are defined behavior, not errors
//! - Results are recomputed wholesale; nothing is mutated incrementally
//!
//! ## Example
//!
//! ```
//! use statuspath_core::{StatusCatalog, project};
//!
//! let result = project(&StatusCatalog::default(), Some("Approved"));
//! assert!(result.ready);
//! assert_eq!(result.guidance_key.as_deref(), Some("approved"));
//! assert_eq!(result.current_index(), Some(6));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod guidance;
pub mod primitives;
pub mod projector;
pub mod source;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{PathError, ProjectionResult, StageDescriptor, StyleTag};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use catalog::{DEFAULT_STATUSES, StatusCatalog, StatusCatalogEntry};
pub use guidance::{GuidanceBook, GuidanceMessage};
pub use projector::{PathProjector, project};
pub use source::{InMemoryRecordSource, PathObserver, RecordSource};
pub use view::{PageReference, PathSnapshot, PathView, RecordUpdate};
