//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::AppConfig;
use crate::records::{TracingObserver, load_records};
use crate::render::{render_catalog, render_json, render_text};
use statuspath_core::{PageReference, PathError, PathSnapshot, PathView, RecordUpdate, project};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a configuration file (1 MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size of a record file (16 MB).
pub const MAX_RECORDS_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Validate file path: canonicalize and ensure it is a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PathError> {
    let canonical = path.canonicalize().map_err(|e| {
        PathError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PathError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Read a file after checking its path and size.
pub fn read_bounded(path: &Path, max_size: u64) -> Result<Vec<u8>, PathError> {
    let validated = validate_file_path(path)?;

    let metadata = std::fs::metadata(&validated)
        .map_err(|e| PathError::IoError(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > max_size {
        return Err(PathError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }

    std::fs::read(&validated).map_err(|e| PathError::IoError(format!("Read file: {}", e)))
}

fn print_snapshot(snapshot: &PathSnapshot, json_mode: bool) -> Result<(), PathError> {
    if json_mode {
        println!("{}", render_json(snapshot)?);
    } else {
        print!("{}", render_text(snapshot));
    }
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Project `status` with the configured catalog and guidance.
pub fn show_snapshot(
    config: &AppConfig,
    status: Option<&str>,
) -> Result<PathSnapshot, PathError> {
    let catalog = config.catalog()?;
    let projection = project(&catalog, status);

    if projection.is_unmatched() {
        tracing::warn!(
            "Status {:?} is not in the catalog; rendering all stages complete",
            status
        );
    }

    let mut snapshot = PathSnapshot::from_projection(projection, &config.guidance_book());
    snapshot.status = status.filter(|s| !s.is_empty()).map(str::to_string);
    Ok(snapshot)
}

/// Render the path for a status given on the command line.
pub fn cmd_show(
    config: &AppConfig,
    json_mode: bool,
    status: Option<&str>,
) -> Result<(), PathError> {
    let snapshot = show_snapshot(config, status)?;
    print_snapshot(&snapshot, json_mode)
}

// =============================================================================
// RECORD COMMAND
// =============================================================================

/// Resolve a record, fetch its status from `records`, and return the snapshot.
///
/// Record file problems become a fetch error on the snapshot rather than a
/// command failure.
pub fn record_snapshot(
    config: &AppConfig,
    records: &Path,
    id: Option<String>,
    url: Option<&str>,
) -> Result<PathSnapshot, PathError> {
    let mut view = PathView::new(config.catalog()?, config.guidance_book())
        .with_error_message(config.error_message());
    view.subscribe(Box::new(TracingObserver));

    view.set_record_id(id);
    if let Some(url) = url {
        if view.resolve_record_id(&PageReference::from_url(url)) {
            tracing::info!("recordId from URL = {}", view.record_id().unwrap_or_default());
        }
    }

    if view.record_id().is_none() {
        tracing::warn!("No record id given; path stays in the loading state");
        return Ok(view.snapshot().clone());
    }

    view.apply(RecordUpdate::Loading);
    let snapshot = match load_records(records) {
        Ok(source) => view.refresh(&source),
        Err(e) => view.apply(RecordUpdate::Failed {
            reason: e.to_string(),
        }),
    };

    Ok(snapshot.clone())
}

/// Render the path of a record.
pub fn cmd_record(
    config: &AppConfig,
    json_mode: bool,
    records: &Path,
    id: Option<String>,
    url: Option<&str>,
) -> Result<(), PathError> {
    let snapshot = record_snapshot(config, records, id, url)?;
    print_snapshot(&snapshot, json_mode)
}

// =============================================================================
// CATALOG COMMAND
// =============================================================================

/// List the configured catalog.
pub fn cmd_catalog(config: &AppConfig, json_mode: bool) -> Result<(), PathError> {
    let catalog = config.catalog()?;

    if json_mode {
        let output = serde_json::to_string_pretty(&catalog)
            .map_err(|e| PathError::IoError(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    print!("{}", render_catalog(&catalog));
    Ok(())
}

// =============================================================================
// GUIDANCE COMMAND
// =============================================================================

/// Print one guidance message.
pub fn cmd_guidance(config: &AppConfig, json_mode: bool, key: &str) -> Result<(), PathError> {
    let book = config.guidance_book();
    let message = book
        .lookup(Some(key))
        .ok_or_else(|| PathError::Config(format!("No guidance for key: {}", key)))?;

    if json_mode {
        let output = serde_json::json!({
            "key": key,
            "title": message.title,
            "body": message.body,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", message.title);
    println!("  {}", message.body);
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate the configuration and report catalog keys without guidance.
pub fn cmd_check(config: &AppConfig, json_mode: bool) -> Result<(), PathError> {
    let catalog = config.catalog()?;
    let missing = config.missing_guidance()?;

    for key in &missing {
        tracing::warn!("Guidance key '{}' has no message", key);
    }

    if json_mode {
        let output = serde_json::json!({
            "valid": true,
            "stages": catalog.len(),
            "missing_guidance": missing,
            "error_message": config.error_message(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Configuration OK");
    println!("  Stages:           {}", catalog.len());
    println!("  Missing guidance: {}", missing.len());
    Ok(())
}
