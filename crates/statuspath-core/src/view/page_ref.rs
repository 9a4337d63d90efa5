//! # Page Reference
//!
//! Navigation context that may carry a record id out of band.
//!
//! Consulted only when the record id was not supplied directly. Lookup
//! order is `state.recordId`, `state.c__recordId`, `attributes.recordId`;
//! the first non-empty value wins.

use crate::primitives::{PAGE_ATTRIBUTE_RECORD_KEY, PAGE_STATE_RECORD_KEYS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Navigation state and attributes of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageReference {
    #[serde(default)]
    pub state: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl PageReference {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page reference whose `state` is the query string of `url`.
    ///
    /// Accepts a full URL, a path with a query, or a bare query string, with
    /// or without the leading `?`. Any `#fragment` is dropped. Keys and
    /// values are form-decoded (`%XX` escapes, `+` as space).
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let without_fragment = url.split('#').next().unwrap_or_default();
        let query = match without_fragment.split_once('?') {
            Some((_, q)) => q,
            None if without_fragment.contains('=') => without_fragment,
            None => "",
        };

        let state = form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self {
            state,
            attributes: BTreeMap::new(),
        }
    }

    /// Add a state entry.
    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.state.insert(key.into(), value.into());
        self
    }

    /// Add an attribute entry.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The record id this page points at, if any.
    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        PAGE_STATE_RECORD_KEYS
            .iter()
            .filter_map(|key| self.state.get(*key))
            .chain(self.attributes.get(PAGE_ATTRIBUTE_RECORD_KEY))
            .map(String::as_str)
            .find(|id| !id.is_empty())
    }
}
