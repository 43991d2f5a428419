//! # Acquisition Orchestrator
//!
//! Coordinates the whole acquisition flow, one request at a time:
//! 1. Search for candidates with the request's query
//! 2. Score and select the best accepted candidate
//! 3. Download the winner into the output directory
//! 4. Record the outcome for the final report
//!
//! Requests are independent: a failed search, an empty selection, or a
//! failed download is logged and recorded against its own request and the
//! run continues. Nothing per-request propagates out of [`FetchEngine::run`];
//! the only error it can return is failing to create the output directory
//! before any request starts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use acquire::AudioAcquirer;
use manifest::SoundRequest;
use scoring::{select_best, Scorer, SelectionOutcome};
use sources::CandidateSearch;

/// Per-request result, reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Artifact downloaded and verified
    Downloaded {
        title: String,
        channel: String,
        score: u32,
        bytes: u64,
    },
    /// No candidate was accepted (covers failed searches too)
    NoCandidate,
    /// A candidate was selected but the download failed
    DownloadFailed { reason: String },
}

/// One request's outcome, keyed by its target name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub target_name: String,
    pub outcome: FetchOutcome,
}

impl TargetReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Downloaded { .. })
    }
}

/// Drives sound requests through search, selection, and acquisition.
///
/// Generic over its two external collaborators so tests can substitute
/// scripted doubles for the subprocess-backed implementations.
pub struct FetchEngine<S, A> {
    searcher: S,
    acquirer: A,
    scorer: Scorer,
    search_limit: usize,
    output_dir: PathBuf,
}

impl<S: CandidateSearch, A: AudioAcquirer> FetchEngine<S, A> {
    pub fn new(
        searcher: S,
        acquirer: A,
        scorer: Scorer,
        search_limit: usize,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            searcher,
            acquirer,
            scorer,
            search_limit,
            output_dir: output_dir.into(),
        }
    }

    /// The acquirer this engine drives.
    pub fn acquirer(&self) -> &A {
        &self.acquirer
    }

    /// Resolve every request in order, one fully before the next.
    ///
    /// Returns one report per request, in request order.
    pub async fn run(&self, requests: &[SoundRequest]) -> Result<Vec<TargetReport>> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| {
                format!(
                    "failed to create output directory {}",
                    self.output_dir.display()
                )
            })?;

        let mut reports = Vec::with_capacity(requests.len());
        for request in requests {
            let outcome = self.resolve(request).await;
            reports.push(TargetReport {
                target_name: request.target_name.clone(),
                outcome,
            });
        }
        Ok(reports)
    }

    async fn resolve(&self, request: &SoundRequest) -> FetchOutcome {
        info!(
            target = %request.target_name,
            query = %request.query,
            description = %request.description,
            "processing sound request"
        );

        // A failed search degrades to zero candidates for this request
        let candidates = match self.searcher.search(&request.query, self.search_limit).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(
                    target = %request.target_name,
                    error = %err,
                    "search failed, continuing with no candidates"
                );
                Vec::new()
            }
        };

        let (candidate, score) = match select_best(&self.scorer, &candidates, request) {
            SelectionOutcome::Selected { candidate, score } => (candidate, score),
            SelectionOutcome::NoneFound => {
                info!(target = %request.target_name, "no suitable candidate found");
                return FetchOutcome::NoCandidate;
            }
        };

        info!(
            target = %request.target_name,
            title = %candidate.title,
            channel = %candidate.channel_name,
            score,
            "selected candidate"
        );

        let target_path = self.output_dir.join(&request.target_name);
        match self.acquirer.acquire(&candidate.source_url, &target_path).await {
            Ok(artifact) => {
                info!(
                    target = %request.target_name,
                    bytes = artifact.bytes,
                    "download complete"
                );
                FetchOutcome::Downloaded {
                    title: candidate.title,
                    channel: candidate.channel_name,
                    score,
                    bytes: artifact.bytes,
                }
            }
            Err(err) => {
                warn!(
                    target = %request.target_name,
                    error = %err,
                    "download failed"
                );
                FetchOutcome::DownloadFailed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
