//! # Guidance Book
//!
//! Maps a guidance key to the help message shown under the path.
//!
//! One lookup per render replaces a per-status boolean check. A key with no
//! message renders no guidance block; it is not an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contextual help for one workflow status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceMessage {
    pub title: String,
    pub body: String,
}

impl GuidanceMessage {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

const DEFAULT_GUIDANCE: [(&str, &str, &str); 9] = [
    (
        "draft",
        "Draft",
        "Your application has been created but not yet started. Open the eForm to begin entering the project details.",
    ),
    (
        "eform",
        "eForm in progress",
        "Complete every section of the eForm and attach the supporting documents, then submit it for review by the Research Office.",
    ),
    (
        "reviewOffice",
        "Review by Research Office",
        "The Research Office is checking your submission for completeness. No action is needed from you at this stage.",
    ),
    (
        "researcherActions",
        "Researcher actions required",
        "The reviewers have requested changes. Read the comments, update the eForm and resubmit.",
    ),
    (
        "committeeReview",
        "Assigned for committee review",
        "Your application has been assigned to an ethics committee and will be considered at its next scheduled meeting.",
    ),
    (
        "openComments",
        "Open for comments",
        "Committee members are recording comments on your application. You will be notified if a response is required.",
    ),
    (
        "approved",
        "Approved",
        "Your application has been approved. Keep the approval letter on file and submit amendments before changing the protocol.",
    ),
    (
        "expired",
        "Expired",
        "The approval period has ended. Research activity must stop until a renewal has been approved.",
    ),
    (
        "closed",
        "Closed",
        "This application is closed. No further changes can be made; contact the Research Office to reopen it.",
    ),
];

/// Guidance messages keyed by guidance key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuidanceBook {
    messages: BTreeMap<String, GuidanceMessage>,
}

impl Default for GuidanceBook {
    fn default() -> Self {
        let messages = DEFAULT_GUIDANCE
            .iter()
            .map(|(key, title, body)| ((*key).to_string(), GuidanceMessage::new(*title, *body)))
            .collect();
        Self { messages }
    }
}

impl GuidanceBook {
    /// A book with no messages.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Look up the message for a key. `None` in, `None` out.
    #[must_use]
    pub fn lookup(&self, key: Option<&str>) -> Option<&GuidanceMessage> {
        key.and_then(|k| self.messages.get(k))
    }

    /// Add or replace a message, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        message: GuidanceMessage,
    ) -> Option<GuidanceMessage> {
        self.messages.insert(key.into(), message)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}
