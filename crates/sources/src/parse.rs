//! Parsing of `yt-dlp --dump-json` output into [`Candidate`] records.
//!
//! yt-dlp emits one JSON object per result line. Only a handful of fields
//! matter here; everything else is ignored. A line that is not valid JSON,
//! or that lacks any usable URL, is a malformed record: it is dropped with
//! a warning and the rest of the results are unaffected.

use serde::Deserialize;
use tracing::warn;

use crate::types::Candidate;

/// The subset of a yt-dlp result entry we care about.
///
/// Every field is optional: search backends routinely omit follower counts
/// and durations, and live entries can miss almost anything.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    channel_follower_count: Option<u64>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    webpage_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Parse one dump-json line into a candidate.
///
/// Returns `None` for malformed records (invalid JSON, no URL); the caller
/// keeps going with the remaining lines.
pub fn candidate_from_line(line: &str) -> Option<Candidate> {
    let entry: RawEntry = match serde_json::from_str(line) {
        Ok(entry) => entry,
        Err(err) => {
            warn!(error = %err, "dropping unparseable search result line");
            return None;
        }
    };

    let source_url = match entry.webpage_url.or(entry.url) {
        Some(url) if !url.is_empty() => url,
        _ => {
            warn!("dropping search result without a source URL");
            return None;
        }
    };

    // yt-dlp reports `uploader` for results without a distinct channel
    let channel_name = entry
        .channel
        .filter(|c| !c.is_empty())
        .or(entry.uploader)
        .unwrap_or_default();

    Some(Candidate {
        title: entry.title.unwrap_or_default(),
        channel_name,
        follower_count: entry.channel_follower_count,
        duration_secs: entry.duration.map(|d| d.max(0.0).round() as u64),
        source_url,
    })
}
