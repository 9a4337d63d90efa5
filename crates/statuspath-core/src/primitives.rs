//! # Primitives
//!
//! Fixed runtime constants for statuspath.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Message surfaced when the record source reports a failure.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error loading record data";

/// Page-reference `state` keys consulted for a record id, in order.
pub const PAGE_STATE_RECORD_KEYS: [&str; 2] = ["recordId", "c__recordId"];

/// Page-reference `attributes` key consulted after the state keys.
pub const PAGE_ATTRIBUTE_RECORD_KEY: &str = "recordId";

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of entries in a status catalog.
///
/// A path is rendered as a single row; catalogs beyond this are rejected.
pub const MAX_CATALOG_ENTRIES: usize = 64;

/// Maximum length for status and guidance key strings.
pub const MAX_STATUS_LENGTH: usize = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_keys_prefer_plain_record_id() {
        assert_eq!(PAGE_STATE_RECORD_KEYS[0], "recordId");
        assert_eq!(PAGE_STATE_RECORD_KEYS[1], "c__recordId");
    }
}
