//! # Path Projector
//!
//! Projects a current status onto a status catalog.
//!
//! The catalog is walked once in order. Stages before the matching entry are
//! complete, the matching entry is current, and stages after it are future.
//! If no entry matches, every stage is complete and there is no guidance.
//!
//! Projection is total and pure: the same inputs always yield the same
//! `ProjectionResult`, and nothing is cached between calls.

use crate::catalog::StatusCatalog;
use crate::types::{ProjectionResult, StageDescriptor, StyleTag};

/// Project `current_status` onto `catalog`.
///
/// A missing or empty status yields the not-ready result.
#[must_use]
pub fn project(catalog: &StatusCatalog, current_status: Option<&str>) -> ProjectionResult {
    let Some(current) = current_status.filter(|s| !s.is_empty()) else {
        return ProjectionResult::not_ready();
    };

    let mut stages = Vec::with_capacity(catalog.len());
    let mut guidance_key = None;
    let mut passed_current = false;

    for entry in catalog {
        let is_current = entry.status == current;
        let is_complete = !is_current && !passed_current;
        let is_future = !is_current && passed_current;

        let style_tag = if is_current {
            StyleTag::Current
        } else if is_complete {
            StyleTag::Complete
        } else {
            StyleTag::Incomplete
        };

        stages.push(StageDescriptor {
            label: entry.status.clone(),
            value: entry.status.clone(),
            is_current,
            is_complete,
            is_future,
            style_tag,
        });

        if is_current {
            passed_current = true;
            guidance_key = Some(entry.guidance_key.clone());
        }
    }

    ProjectionResult {
        stages,
        guidance_key,
        ready: true,
    }
}

/// A projector bound to one catalog.
#[derive(Debug, Clone, Default)]
pub struct PathProjector {
    catalog: StatusCatalog,
}

impl PathProjector {
    /// Create a projector over the given catalog.
    #[must_use]
    pub fn new(catalog: StatusCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this projector walks.
    #[must_use]
    pub fn catalog(&self) -> &StatusCatalog {
        &self.catalog
    }

    /// Project a status onto the bound catalog.
    #[must_use]
    pub fn project(&self, current_status: Option<&str>) -> ProjectionResult {
        project(&self.catalog, current_status)
    }
}

// =============================================================================
// TESTS
// =============================================================================
