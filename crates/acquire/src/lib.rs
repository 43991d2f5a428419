//! Audio acquisition: download and transcode a selected candidate.
//!
//! The [`AudioAcquirer`] trait is the engine's seam; [`YtDlpAcquirer`] is
//! the production implementation, shelling out to `yt-dlp -x` to extract
//! and transcode audio into a single normalized file.
//!
//! Acquisition is idempotent per target: any pre-existing artifact at the
//! target path is removed before the external tool runs, so a re-run can
//! never keep a stale or partial file. After the tool returns, the target
//! must exist and be non-empty or the acquisition is a failure; a missing
//! artifact is never passed off as success.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

/// Errors from one acquisition attempt.
///
/// All of these are per-request: the engine records them and moves on.
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The external tool could not be launched
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited unsuccessfully
    #[error("{program} exited with {status} for {url}: {stderr}")]
    ToolFailed {
        program: String,
        status: std::process::ExitStatus,
        url: String,
        stderr: String,
    },

    /// A stale artifact at the target path could not be removed
    #[error("could not remove stale artifact {path}")]
    StaleArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool reported success but produced no file
    #[error("no artifact at {path} after download")]
    MissingArtifact { path: PathBuf },

    /// The tool produced a zero-byte file
    #[error("artifact at {path} is empty")]
    EmptyArtifact { path: PathBuf },
}

/// A successfully materialized audio artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Fetches audio from a URL into a local file.
#[allow(async_fn_in_trait)]
pub trait AudioAcquirer {
    /// Download and transcode `url` into `target`, replacing any existing
    /// artifact there.
    async fn acquire(&self, url: &str, target: &Path) -> Result<Artifact, AcquireError>;
}

/// Production acquirer shelling out to `yt-dlp`.
pub struct YtDlpAcquirer {
    program: String,
    audio_format: String,
    audio_quality: String,
}

impl Default for YtDlpAcquirer {
    fn default() -> Self {
        Self {
            program: "yt-dlp".to_string(),
            audio_format: "mp3".to_string(),
            audio_quality: "128K".to_string(),
        }
    }
}

impl YtDlpAcquirer {
    pub fn new(
        program: impl Into<String>,
        audio_format: impl Into<String>,
        audio_quality: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            audio_format: audio_format.into(),
            audio_quality: audio_quality.into(),
        }
    }
}

impl AudioAcquirer for YtDlpAcquirer {
    async fn acquire(&self, url: &str, target: &Path) -> Result<Artifact, AcquireError> {
        remove_stale(target).await?;

        info!(%url, target = %target.display(), "downloading audio");
        let output = Command::new(&self.program)
            .arg("-x")
            .arg("--audio-format")
            .arg(&self.audio_format)
            .arg("--audio-quality")
            .arg(&self.audio_quality)
            .arg("-o")
            .arg(target)
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| AcquireError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(AcquireError::ToolFailed {
                program: self.program.clone(),
                status: output.status,
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let bytes = verify_artifact(target).await?;
        debug!(target = %target.display(), bytes, "artifact verified");
        Ok(Artifact {
            path: target.to_path_buf(),
            bytes,
        })
    }
}

/// Remove any pre-existing artifact at `target`.
///
/// A missing file is fine; anything else (permissions, a directory in the
/// way) fails the acquisition before the tool even runs.
pub async fn remove_stale(target: &Path) -> Result<(), AcquireError> {
    match tokio::fs::remove_file(target).await {
        Ok(()) => {
            debug!(target = %target.display(), "removed stale artifact");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(AcquireError::StaleArtifact {
            path: target.to_path_buf(),
            source,
        }),
    }
}

/// Confirm the artifact exists and is non-empty; returns its byte size.
pub async fn verify_artifact(target: &Path) -> Result<u64, AcquireError> {
    let metadata = match tokio::fs::metadata(target).await {
        Ok(metadata) => metadata,
        Err(_) => {
            return Err(AcquireError::MissingArtifact {
                path: target.to_path_buf(),
            });
        }
    };
    if metadata.len() == 0 {
        return Err(AcquireError::EmptyArtifact {
            path: target.to_path_buf(),
        });
    }
    Ok(metadata.len())
}
