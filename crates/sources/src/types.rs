//! Candidate record type.

/// Stand-in duration for results that report none.
///
/// Large enough that the duration rejection fires by default for every
/// request with a bound under 333 seconds, so an unknown-length clip has to
/// be explicitly tolerated by a long-form request rather than slipping
/// through.
pub const UNKNOWN_DURATION_SECS: u64 = 999;

/// One search result under evaluation.
///
/// Ephemeral: a candidate exists only while one sound request is being
/// resolved and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,

    /// Channel name, falling back to the uploader name when the backend
    /// reports no explicit channel
    pub channel_name: String,

    /// Channel follower count; `None` when the backend does not know it
    pub follower_count: Option<u64>,

    /// Clip length in whole seconds; `None` when unreported
    pub duration_secs: Option<u64>,

    /// Canonical URL, resolvable by the acquirer
    pub source_url: String,
}

impl Candidate {
    /// Duration used for scoring: the reported value, or the
    /// [`UNKNOWN_DURATION_SECS`] sentinel when the backend reported none.
    pub fn effective_duration_secs(&self) -> u64 {
        self.duration_secs.unwrap_or(UNKNOWN_DURATION_SECS)
    }
}
