//! # Renderers
//!
//! Turn a `PathSnapshot` into terminal text or JSON.
//!
//! Exactly one of three bodies is rendered: the loading line, the error
//! message, or the path followed by its guidance block.

use statuspath_core::{PathError, PathSnapshot, StageDescriptor, StatusCatalog, StyleTag};

/// Marker printed in front of a stage.
fn marker(stage: &StageDescriptor) -> &'static str {
    match stage.style_tag {
        StyleTag::Complete => "✓",
        StyleTag::Current => "▶",
        StyleTag::Incomplete => "·",
    }
}

/// Render a snapshot for the terminal.
pub fn render_text(snapshot: &PathSnapshot) -> String {
    let mut out = String::new();

    out.push_str("Status Path\n");
    out.push_str("===========\n");
    if let Some(record) = &snapshot.record_id {
        out.push_str(&format!("Record: {}\n", record));
    }

    if let Some(error) = &snapshot.error {
        out.push_str(&format!("\nError: {}\n", error));
        return out;
    }

    if snapshot.show_loading {
        out.push_str("\nLoading...\n");
        return out;
    }

    if let Some(status) = &snapshot.status {
        out.push_str(&format!("Status: {}\n", status));
    }
    out.push('\n');

    for stage in &snapshot.projection.stages {
        out.push_str(&format!("  {} {}\n", marker(stage), stage.label));
    }

    if let Some(guidance) = &snapshot.guidance {
        out.push('\n');
        out.push_str(&guidance.title);
        out.push('\n');
        out.push_str(&format!("  {}\n", guidance.body));
    }

    out
}

/// Render a snapshot as pretty JSON, including the class string of each stage.
pub fn render_json(snapshot: &PathSnapshot) -> Result<String, PathError> {
    let stages: Vec<serde_json::Value> = snapshot
        .projection
        .stages
        .iter()
        .map(|s| {
            serde_json::json!({
                "label": s.label,
                "value": s.value,
                "is_current": s.is_current,
                "is_complete": s.is_complete,
                "is_future": s.is_future,
                "style_tag": s.style_tag,
                "css_class": s.css_class(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "record_id": snapshot.record_id,
        "status": snapshot.status,
        "ready": snapshot.projection.ready,
        "show_loading": snapshot.show_loading,
        "error": snapshot.error,
        "guidance_key": snapshot.projection.guidance_key,
        "guidance": snapshot.guidance,
        "stages": stages,
    });

    serde_json::to_string_pretty(&output).map_err(|e| PathError::IoError(e.to_string()))
}

/// Render the catalog as a numbered list.
pub fn render_catalog(catalog: &StatusCatalog) -> String {
    let width = catalog.iter().map(|e| e.status.len()).max().unwrap_or(0);
    let mut out = String::new();

    out.push_str("Status Catalog\n");
    out.push_str("==============\n");
    for (i, entry) in catalog.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  [{}]\n",
            i + 1,
            entry.status,
            entry.guidance_key,
            width = width
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use statuspath_core::{GuidanceBook, project};

    fn approved() -> PathSnapshot {
        let projection = project(&StatusCatalog::default(), Some("Approved"));
        let mut snapshot = PathSnapshot::from_projection(projection, &GuidanceBook::default());
        snapshot.status = Some("Approved".to_string());
        snapshot
    }

    #[test]
    fn text_marks_each_stage() {
        let text = render_text(&approved());
        assert!(text.contains("  ✓ Draft\n"));
        assert!(text.contains("  ▶ Approved\n"));
        assert!(text.contains("  · Closed\n"));
        assert!(text.contains("Status: Approved"));
    }

    #[test]
    fn text_loading_and_error() {
        assert!(render_text(&PathSnapshot::default()).contains("Loading..."));

        let failed = render_text(&PathSnapshot::failed("Error loading record data"));
        assert!(failed.contains("Error: Error loading record data"));
        assert!(!failed.contains("Loading..."));
    }

    #[test]
    fn json_includes_css_class() {
        let json = render_json(&approved()).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["ready"], true);
        assert_eq!(value["guidance_key"], "approved");
        assert_eq!(value["stages"][6]["style_tag"], "CURRENT");
        assert_eq!(
            value["stages"][7]["css_class"],
            "slds-path__item slds-is-incomplete"
        );
    }

    #[test]
    fn catalog_listing() {
        let text = render_catalog(&StatusCatalog::default());
        assert!(text.contains(" 1. Draft"));
        assert!(text.contains("[committeeReview]"));
    }
}
