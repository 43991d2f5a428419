//! Pre-approved channel list.

use serde::Deserialize;

/// Static set of channel-name substrings considered pre-approved.
///
/// Membership is case-insensitive substring containment, not exact match:
/// "Pixabay" matches "Pixabay Sound Library" and "pixabay". The list is
/// loaded once and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TrustList {
    entries: Vec<String>,
}

impl TrustList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Whether any trust-list entry appears inside `channel_name`,
    /// ignoring case.
    pub fn matches(&self, channel_name: &str) -> bool {
        let channel = channel_name.to_lowercase();
        self.entries
            .iter()
            .any(|entry| channel.contains(&entry.to_lowercase()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
