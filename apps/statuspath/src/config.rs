//! # Configuration
//!
//! Optional TOML file that customizes the catalog, the guidance book and
//! the fetch error message.
//!
//! ```toml
//! error_message = "Could not load the ethics request"
//!
//! [[stage]]
//! status = "Draft"
//! guidance_key = "draft"
//!
//! [[stage]]
//! status = "Submitted"
//! guidance_key = "submitted"
//!
//! [guidance.submitted]
//! title = "Submitted"
//! body = "Your request is with the Research Office."
//! ```
//!
//! Without `[[stage]]` entries the default catalog is used. Guidance
//! entries overlay the default book key by key.

use serde::Deserialize;
use statuspath_core::{
    GuidanceBook, GuidanceMessage, PathError, StatusCatalog, StatusCatalogEntry,
    primitives::DEFAULT_ERROR_MESSAGE,
};
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::{MAX_CONFIG_FILE_SIZE, read_bounded};

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default, rename = "stage")]
    pub stages: Vec<StatusCatalogEntry>,

    #[serde(default)]
    pub guidance: BTreeMap<String, GuidanceMessage>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, PathError> {
        toml::from_str(text).map_err(|e| PathError::Config(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, PathError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let contents = read_bounded(path, MAX_CONFIG_FILE_SIZE)?;
        let text = String::from_utf8(contents)
            .map_err(|e| PathError::Config(format!("Config is not UTF-8: {}", e)))?;
        let config = Self::from_toml(&text)?;

        tracing::info!(
            "Loaded config from {:?} ({} stages, {} guidance overrides)",
            path,
            config.stages.len(),
            config.guidance.len()
        );
        Ok(config)
    }

    /// The configured catalog, validated. Falls back to the default catalog.
    pub fn catalog(&self) -> Result<StatusCatalog, PathError> {
        if self.stages.is_empty() {
            return Ok(StatusCatalog::default());
        }
        StatusCatalog::new(self.stages.clone())
    }

    /// The default guidance book with configured messages laid over it.
    pub fn guidance_book(&self) -> GuidanceBook {
        let mut book = GuidanceBook::default();
        for (key, message) in &self.guidance {
            if book.insert(key.clone(), message.clone()).is_some() {
                tracing::debug!("Guidance '{}' overrides the default message", key);
            }
        }
        book
    }

    /// Message shown when the record cannot be loaded.
    pub fn error_message(&self) -> &str {
        self.error_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
    }

    /// Catalog guidance keys that have no message in the guidance book.
    pub fn missing_guidance(&self) -> Result<Vec<String>, PathError> {
        let catalog = self.catalog()?;
        let book = self.guidance_book();
        Ok(catalog
            .iter()
            .filter(|e| !book.contains(&e.guidance_key))
            .map(|e| e.guidance_key.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").expect("parse");
        assert_eq!(config.catalog().expect("catalog"), StatusCatalog::default());
        assert_eq!(config.guidance_book(), GuidanceBook::default());
        assert_eq!(config.error_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            AppConfig::from_toml("colour = \"red\""),
            Err(PathError::Config(_))
        ));
    }

    #[test]
    fn blank_error_message_falls_back() {
        let config = AppConfig::from_toml("error_message = \"  \"").expect("parse");
        assert_eq!(config.error_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn guidance_replaces_default_message() {
        let config = AppConfig::from_toml(
            "[guidance.draft]\ntitle = \"Start here\"\nbody = \"Open the eForm.\"\n",
        )
        .expect("parse");
        let book = config.guidance_book();
        assert_eq!(book.len(), GuidanceBook::default().len());
        assert_eq!(
            book.lookup(Some("draft")).map(|m| m.body.as_str()),
            Some("Open the eForm.")
        );
    }
}
