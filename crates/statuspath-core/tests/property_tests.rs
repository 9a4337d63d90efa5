//! # Property-Based Tests
//!
//! Invariants of the path projection, checked with proptest over arbitrary
//! catalogs and statuses.

use proptest::collection::btree_set;
use proptest::prelude::*;
use statuspath_core::{ProjectionResult, StatusCatalog, StatusCatalogEntry, StyleTag, project};

/// A valid catalog of 1..12 distinct statuses in arbitrary order.
fn catalog_strategy() -> impl Strategy<Value = StatusCatalog> {
    btree_set("[A-Za-z][A-Za-z ]{0,11}", 1..12)
        .prop_map(|set| set.into_iter().collect::<Vec<String>>())
        .prop_shuffle()
        .prop_map(|statuses| {
            let entries = statuses
                .into_iter()
                .enumerate()
                .map(|(i, s)| StatusCatalogEntry::new(s, format!("key{}", i)))
                .collect();
            StatusCatalog::new(entries).expect("distinct non-blank statuses")
        })
}

/// Rank used for the ordering check: complete < current < future.
fn rank(result: &ProjectionResult, i: usize) -> u8 {
    let stage = &result.stages[i];
    if stage.is_complete {
        0
    } else if stage.is_current {
        1
    } else {
        2
    }
}

proptest! {
    /// P1: projection is total and ready for any non-empty status.
    #[test]
    fn projection_is_total(catalog in catalog_strategy(), status in "[A-Za-z ]{1,12}") {
        let result = project(&catalog, Some(status.as_str()));
        prop_assert!(result.ready);
        prop_assert_eq!(result.stages.len(), catalog.len());
    }

    /// P2: exactly one flag per stage, and the style tag agrees with it.
    #[test]
    fn flags_are_mutually_exclusive(
        catalog in catalog_strategy(),
        status in proptest::option::of("[A-Za-z ]{0,12}")
    ) {
        let result = project(&catalog, status.as_deref());
        for stage in &result.stages {
            let set = [stage.is_current, stage.is_complete, stage.is_future]
                .iter()
                .filter(|f| **f)
                .count();
            prop_assert_eq!(set, 1);

            let expected = if stage.is_current {
                StyleTag::Current
            } else if stage.is_complete {
                StyleTag::Complete
            } else {
                StyleTag::Incomplete
            };
            prop_assert_eq!(stage.style_tag, expected);
        }
    }

    /// P3: complete stages precede the current stage, which precedes future stages.
    #[test]
    fn stages_are_ordered(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let status = catalog.entries()[pick.index(catalog.len())].status.clone();
        let result = project(&catalog, Some(status.as_str()));

        for i in 1..result.stages.len() {
            prop_assert!(rank(&result, i - 1) <= rank(&result, i));
        }
        prop_assert_eq!(result.stages.iter().filter(|s| s.is_current).count(), 1);
        prop_assert_eq!(result.current_index(), catalog.position(&status));
        prop_assert_eq!(
            result.guidance_key.as_deref(),
            catalog.find(&status).map(|e| e.guidance_key.as_str())
        );
    }

    /// P4: a missing or empty status is the not-ready result.
    #[test]
    fn missing_status_not_ready(catalog in catalog_strategy()) {
        prop_assert_eq!(project(&catalog, None), ProjectionResult::not_ready());
        prop_assert_eq!(project(&catalog, Some("")), ProjectionResult::not_ready());
    }

    /// P5: identical inputs give identical results.
    #[test]
    fn projection_is_idempotent(
        catalog in catalog_strategy(),
        status in proptest::option::of("[A-Za-z ]{0,12}")
    ) {
        let first = project(&catalog, status.as_deref());
        let second = project(&catalog, status.as_deref());
        prop_assert_eq!(first, second);
    }

    /// Unmatched statuses mark every stage complete.
    #[test]
    fn unmatched_status_all_complete(catalog in catalog_strategy()) {
        // Generated statuses never contain digits.
        let result = project(&catalog, Some("status 404"));
        prop_assert!(result.stages.iter().all(|s| s.is_complete));
        prop_assert!(result.guidance_key.is_none());
    }
}
