//! The candidate-search seam.

use thiserror::Error;

use crate::types::Candidate;

/// Errors from a candidate-search invocation.
///
/// The engine treats any of these as "zero candidates for this request";
/// they never abort a run. `Spawn` during preflight is the one exception,
/// handled at the binary edge as a fatal environment problem.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The external tool could not be launched at all
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// A source of search candidates for a free-text query.
///
/// Implementations issue one search and return results in the backend's own
/// relevance order. Returning an error means the whole invocation failed;
/// individually malformed records are dropped by the implementation instead.
#[allow(async_fn_in_trait)]
pub trait CandidateSearch {
    /// Search for up to `limit` candidates matching `query`.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Candidate>, SearchError>;
}
