//! # Core Type Definitions
//!
//! This module contains the value types shared across statuspath:
//! - Stage rendering state (`StyleTag`, `StageDescriptor`)
//! - Projection output (`ProjectionResult`)
//! - Error types (`PathError`)
//!
//! All derived values are recomputed wholesale on every projection.
//! Nothing in this module holds mutable shared state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// STYLE TAG
// =============================================================================

/// Presentation class prefix shared by every stage.
pub const PATH_ITEM_CLASS: &str = "slds-path__item";

/// Display state of a single stage.
///
/// Future stages render as `Incomplete`; there is no separate "future" look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleTag {
    /// The stage matching the current status.
    Current,
    /// A stage before the current one (or every stage if nothing matched).
    Complete,
    /// A stage after the current one.
    Incomplete,
}

impl StyleTag {
    /// State classes appended to [`PATH_ITEM_CLASS`].
    #[must_use]
    pub fn modifier(&self) -> &'static str {
        match self {
            StyleTag::Current => "slds-is-current slds-is-active",
            StyleTag::Complete => "slds-is-complete",
            StyleTag::Incomplete => "slds-is-incomplete",
        }
    }

    /// Full presentation class string for this tag.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("{} {}", PATH_ITEM_CLASS, self.modifier())
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StyleTag::Current => "CURRENT",
            StyleTag::Complete => "COMPLETE",
            StyleTag::Incomplete => "INCOMPLETE",
        };
        f.write_str(name)
    }
}

// =============================================================================
// STAGE DESCRIPTOR
// =============================================================================

/// One rendered unit of the path.
///
/// Exactly one of `is_current`, `is_complete`, `is_future` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDescriptor {
    /// Display label.
    pub label: String,
    /// Raw status value this stage stands for.
    pub value: String,
    pub is_current: bool,
    pub is_complete: bool,
    pub is_future: bool,
    pub style_tag: StyleTag,
}

impl StageDescriptor {
    /// Presentation class string for this stage.
    #[must_use]
    pub fn css_class(&self) -> String {
        self.style_tag.css_class()
    }
}

// =============================================================================
// PROJECTION RESULT
// =============================================================================

/// Output of a single projection.
///
/// Owned by the caller. A new value is produced for every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectionResult {
    /// Stages in catalog order.
    pub stages: Vec<StageDescriptor>,
    /// Guidance key of the matched catalog entry, if any.
    pub guidance_key: Option<String>,
    /// False while the current status is not yet known.
    pub ready: bool,
}

impl ProjectionResult {
    /// The "still loading" result: no stages, no guidance, not ready.
    #[must_use]
    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Index of the current stage, if the status matched an entry.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.stages.iter().position(|s| s.is_current)
    }

    /// Ready, but the status matched no catalog entry.
    ///
    /// Every stage renders complete and there is no guidance.
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        self.ready && self.current_index().is_none()
    }

    /// Whether guidance should be shown.
    #[must_use]
    pub fn has_guidance(&self) -> bool {
        self.guidance_key.is_some()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in statuspath.
///
/// Projection itself never fails; these cover catalog validation,
/// collaborator failures and the binary's I/O boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A catalog must contain at least one status.
    #[error("Status catalog is empty")]
    EmptyCatalog,

    /// A catalog entry has an empty required field.
    #[error("Catalog entry {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    /// A status appears more than once in the catalog.
    #[error("Duplicate status in catalog: {0}")]
    DuplicateStatus(String),

    /// The record source failed to deliver the current status.
    #[error("Record fetch failed: {0}")]
    RecordFetch(String),

    /// The record source has no record with this id.
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Configuration could not be parsed or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
