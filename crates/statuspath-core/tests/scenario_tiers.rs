//! # Scenario Tier Tests
//!
//! Fixed scenarios over the default nine-status catalog.
//!
//! ## Tiers
//! - T0: Projection scenarios (matched, first, last, unmatched, missing)
//! - T1: View lifecycle (record id resolution, updates, errors)

use statuspath_core::{
    GuidanceBook, PageReference, PathView, ProjectionResult, RecordUpdate, StatusCatalog,
    StyleTag, project,
};

fn default_project(status: Option<&str>) -> ProjectionResult {
    project(&StatusCatalog::default(), status)
}

// =============================================================================
// TIER T0: PROJECTION SCENARIOS
// =============================================================================

mod t0_projection {
    use super::*;

    /// T0.1: a mid-workflow status splits the path around it.
    #[test]
    fn approved() {
        let result = default_project(Some("Approved"));

        assert!(result.ready);
        assert_eq!(result.stages.len(), 9);
        assert!(result.stages[..6].iter().all(|s| s.is_complete));
        assert!(result.stages[6].is_current);
        assert_eq!(result.stages[6].label, "Approved");
        assert!(result.stages[7..].iter().all(|s| s.is_future));
        assert_eq!(result.guidance_key.as_deref(), Some("approved"));
    }

    /// T0.2: the first status leaves everything else in the future.
    #[test]
    fn draft() {
        let result = default_project(Some("Draft"));

        assert!(result.stages[0].is_current);
        assert_eq!(result.stages[0].style_tag, StyleTag::Current);
        assert!(result.stages[1..].iter().all(|s| s.is_future));
        assert!(
            result.stages[1..]
                .iter()
                .all(|s| s.style_tag == StyleTag::Incomplete)
        );
        assert_eq!(result.guidance_key.as_deref(), Some("draft"));
    }

    /// T0.3: the terminal status has no future stages.
    #[test]
    fn closed() {
        let result = default_project(Some("Closed"));

        assert!(result.stages[..8].iter().all(|s| s.is_complete));
        assert!(result.stages[8].is_current);
        assert!(!result.stages.iter().any(|s| s.is_future));
        assert_eq!(result.guidance_key.as_deref(), Some("closed"));
    }

    /// T0.4: an unknown status renders every stage complete, with no guidance.
    #[test]
    fn unknown_status_renders_all_complete() {
        let result = default_project(Some("Unknown Status"));

        assert!(result.ready);
        assert_eq!(result.stages.len(), 9);
        assert!(result.stages.iter().all(|s| s.is_complete));
        assert!(!result.stages.iter().any(|s| s.is_current || s.is_future));
        assert!(
            result
                .stages
                .iter()
                .all(|s| s.style_tag == StyleTag::Complete)
        );
        assert!(result.guidance_key.is_none());
    }

    /// T0.5: no status means not ready.
    #[test]
    fn missing_status() {
        let result = default_project(None);
        assert!(!result.ready);
        assert!(result.stages.is_empty());
        assert!(result.guidance_key.is_none());
    }

    /// T0.6: every default status has guidance in the default book.
    #[test]
    fn every_default_status_has_guidance() {
        let book = GuidanceBook::default();
        for entry in &StatusCatalog::default() {
            let result = default_project(Some(entry.status.as_str()));
            assert!(
                book.lookup(result.guidance_key.as_deref()).is_some(),
                "{}",
                entry.status
            );
        }
    }
}

// =============================================================================
// TIER T1: VIEW LIFECYCLE
// =============================================================================

mod t1_view_lifecycle {
    use super::*;

    /// T1.1: portal flow: id from URL, then loading, then loaded.
    #[test]
    fn portal_flow() {
        let mut view = PathView::default();
        assert!(view.snapshot().show_loading);

        let page = PageReference::from_url("/s/ethics-request?c__recordId=a0B7")
            .with_attribute("recordId", "ignored");
        assert!(view.resolve_record_id(&page));
        assert_eq!(view.record_id(), Some("a0B7"));
        assert!(view.snapshot().show_loading);

        view.apply(RecordUpdate::Loading);
        let snap = view.apply(RecordUpdate::Loaded {
            status: Some("Researcher actions required".to_string()),
        });

        assert!(snap.is_ready());
        assert_eq!(snap.projection.current_index(), Some(3));
        assert_eq!(
            snap.guidance.as_ref().map(|g| g.title.as_str()),
            Some("Researcher actions required")
        );
    }

    /// T1.2: a fetch error is distinct from loading and from an unmatched status.
    #[test]
    fn error_is_not_unmatched() {
        let mut view = PathView::default();
        view.set_record_id(Some("r1".to_string()));

        let failed = view
            .apply(RecordUpdate::Failed {
                reason: "network".to_string(),
            })
            .clone();
        assert!(failed.has_error());
        assert!(!failed.show_loading);
        assert!(failed.projection.stages.is_empty());

        let unmatched = view.apply(RecordUpdate::Loaded {
            status: Some("Withdrawn".to_string()),
        });
        assert!(!unmatched.has_error());
        assert!(unmatched.is_ready());
        assert!(unmatched.projection.stages.iter().all(|s| s.is_complete));
        assert!(unmatched.guidance.is_none());
    }

    /// T1.3: re-applying the same update yields the same snapshot.
    #[test]
    fn repeated_update_is_idempotent() {
        let mut view = PathView::default();
        view.set_record_id(Some("r1".to_string()));
        let update = RecordUpdate::Loaded {
            status: Some("Expired".to_string()),
        };

        let first = view.apply(update.clone()).clone();
        let second = view.apply(update).clone();
        assert_eq!(first, second);
    }
}
