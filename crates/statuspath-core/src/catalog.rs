//! # Status Catalog
//!
//! The ordered list of known workflow statuses.
//!
//! Catalog order is workflow progression order: the first entry is the
//! initial status and the last is terminal. A catalog is validated once at
//! construction and is immutable afterwards.
//!
//! ## Validation
//!
//! - At least one entry, at most `MAX_CATALOG_ENTRIES`
//! - `status` and `guidance_key` non-empty and within `MAX_STATUS_LENGTH`
//! - `status` values unique (duplicates are rejected, never last-wins)

use crate::PathError;
use crate::primitives::{MAX_CATALOG_ENTRIES, MAX_STATUS_LENGTH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// DEFAULT CATALOG
// =============================================================================

/// The ethics request workflow: `(status, guidance_key)` in progression order.
pub const DEFAULT_STATUSES: [(&str, &str); 9] = [
    ("Draft", "draft"),
    ("eForm in Progress", "eform"),
    ("Review by Research Office", "reviewOffice"),
    ("Researcher actions required", "researcherActions"),
    ("Assigned for committee review", "committeeReview"),
    ("Open for Comments", "openComments"),
    ("Approved", "approved"),
    ("Expired", "expired"),
    ("Closed", "closed"),
];

// =============================================================================
// CATALOG ENTRY
// =============================================================================

/// A single known status and the guidance shown while a record is in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCatalogEntry {
    /// Status identifier; also used as the display label.
    pub status: String,
    /// Key into the guidance book.
    pub guidance_key: String,
}

impl StatusCatalogEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(status: impl Into<String>, guidance_key: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            guidance_key: guidance_key.into(),
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// A validated, ordered, immutable status catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<StatusCatalogEntry>",
    into = "Vec<StatusCatalogEntry>"
)]
pub struct StatusCatalog {
    entries: Vec<StatusCatalogEntry>,
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_STATUSES
                .iter()
                .map(|(status, key)| StatusCatalogEntry::new(*status, *key))
                .collect(),
        }
    }
}

impl StatusCatalog {
    /// Build a catalog, validating every entry.
    pub fn new(entries: Vec<StatusCatalogEntry>) -> Result<Self, PathError> {
        Self::validate(&entries)?;
        Ok(Self { entries })
    }

    /// Check a list of entries against the catalog rules.
    pub fn validate(entries: &[StatusCatalogEntry]) -> Result<(), PathError> {
        if entries.is_empty() {
            return Err(PathError::EmptyCatalog);
        }
        if entries.len() > MAX_CATALOG_ENTRIES {
            return Err(PathError::Config(format!(
                "Catalog has {} entries, maximum is {}",
                entries.len(),
                MAX_CATALOG_ENTRIES
            )));
        }

        let mut seen = BTreeSet::new();
        for (index, entry) in entries.iter().enumerate() {
            check_field(index, "status", &entry.status)?;
            check_field(index, "guidance_key", &entry.guidance_key)?;

            if !seen.insert(entry.status.as_str()) {
                return Err(PathError::DuplicateStatus(entry.status.clone()));
            }
        }

        Ok(())
    }

    /// Entries in progression order.
    #[must_use]
    pub fn entries(&self) -> &[StatusCatalogEntry] {
        &self.entries
    }

    /// Iterate entries in progression order.
    pub fn iter(&self) -> std::slice::Iter<'_, StatusCatalogEntry> {
        self.entries.iter()
    }

    /// Number of statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry for an exact status value.
    #[must_use]
    pub fn find(&self, status: &str) -> Option<&StatusCatalogEntry> {
        self.entries.iter().find(|e| e.status == status)
    }

    /// Position of a status in progression order.
    #[must_use]
    pub fn position(&self, status: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.status == status)
    }

    /// The first status in the workflow.
    #[must_use]
    pub fn first(&self) -> Option<&StatusCatalogEntry> {
        self.entries.first()
    }

    /// The terminal status in the workflow.
    #[must_use]
    pub fn last(&self) -> Option<&StatusCatalogEntry> {
        self.entries.last()
    }
}

fn check_field(index: usize, field: &'static str, value: &str) -> Result<(), PathError> {
    if value.trim().is_empty() {
        return Err(PathError::EmptyField { index, field });
    }
    if value.len() > MAX_STATUS_LENGTH {
        return Err(PathError::Config(format!(
            "Catalog entry {} {} is {} bytes, maximum is {}",
            index,
            field,
            value.len(),
            MAX_STATUS_LENGTH
        )));
    }
    Ok(())
}

impl TryFrom<Vec<StatusCatalogEntry>> for StatusCatalog {
    type Error = PathError;

    fn try_from(entries: Vec<StatusCatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<StatusCatalog> for Vec<StatusCatalogEntry> {
    fn from(catalog: StatusCatalog) -> Self {
        catalog.entries
    }
}

impl<'a> IntoIterator for &'a StatusCatalog {
    type Item = &'a StatusCatalogEntry;
    type IntoIter = std::slice::Iter<'a, StatusCatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
