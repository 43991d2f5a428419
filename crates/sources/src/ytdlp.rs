//! yt-dlp backed candidate search.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::parse::candidate_from_line;
use crate::search::{CandidateSearch, SearchError};
use crate::types::Candidate;

/// Candidate search backed by the `yt-dlp` command-line tool.
///
/// One search runs `yt-dlp --dump-json ytsearch{limit}:{query}` and parses
/// one result per stdout line. Flat-playlist output omits the follower
/// counts and durations the scorer needs, so results are fully resolved
/// and the limit kept small to bound the resolution cost.
pub struct YtDlpSearch {
    program: String,
}

impl Default for YtDlpSearch {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlpSearch {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Verify the external tool is present and executable.
    ///
    /// Called once before a run; a failure here is the environment-level
    /// fatal case rather than a per-request one.
    pub async fn preflight(&self) -> Result<(), SearchError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| SearchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SearchError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(
            version = %String::from_utf8_lossy(&output.stdout).trim(),
            "yt-dlp preflight ok"
        );
        Ok(())
    }
}

impl CandidateSearch for YtDlpSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Candidate>, SearchError> {
        let search_spec = format!("ytsearch{limit}:{query}");
        info!(%query, limit, "running candidate search");

        let output = Command::new(&self.program)
            .arg("--dump-json")
            .arg(&search_spec)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| SearchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SearchError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let candidates: Vec<Candidate> = stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(candidate_from_line)
            .collect();

        debug!(count = candidates.len(), %query, "search produced candidates");
        Ok(candidates)
    }
}
