//! The sound manifest: the full configured request set.
//!
//! A manifest bundles the sound requests with the trust list and scoring
//! weights. The built-in manifest reproduces the tool's original asset set;
//! a JSON file can replace it wholesale.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ManifestError, Result};
use crate::trust::TrustList;
use crate::types::{ScoreWeights, SoundRequest};

/// Full configuration for one acquisition run.
///
/// Loaded once at process start; read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundManifest {
    pub requests: Vec<SoundRequest>,

    #[serde(default = "default_trusted_channels")]
    pub trusted_channels: TrustList,

    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_trusted_channels() -> TrustList {
    TrustList::new(
        [
            "Free Sound Effects",
            "Pixabay",
            "Epidemic Sound",
            "ZapSplat",
            "Audio Library",
            "Sound Effects",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    )
}

impl SoundManifest {
    /// The built-in request set shipped with the tool.
    pub fn builtin() -> Self {
        let requests = vec![
            SoundRequest::new(
                "sign.mp3",
                "wax seal stamp sound effect royalty free",
                10,
                "Ratification Ritual seal stamp",
            ),
            SoundRequest::new(
                "complete.mp3",
                "achievement sound effect gentle",
                10,
                "Treaty/habit completion",
            ),
            SoundRequest::new(
                "recover.mp3",
                "singing bowl single strike",
                15,
                "Recovery state transition",
            ),
            SoundRequest::new(
                "clockwork.mp3",
                "pocket watch ticking loop",
                60,
                "3-second countdown ticking",
            ),
            SoundRequest::new("thud.mp3", "gavel sound effect", 5, "Final seal impact"),
            SoundRequest::new(
                "ambience.mp3",
                "dark ambient background loop meditation",
                300,
                "Council Chamber background",
            ),
        ];

        Self {
            requests,
            trusted_channels: default_trusted_channels(),
            weights: ScoreWeights::default(),
        }
    }

    /// Load a manifest from a JSON file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manifest: Self =
            serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the invariants a usable manifest must hold: at least one
    /// request, non-empty names and queries, positive duration bounds,
    /// unique target names.
    pub fn validate(&self) -> Result<()> {
        if self.requests.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for request in &self.requests {
            if request.target_name.is_empty() {
                return Err(ManifestError::InvalidValue {
                    target: request.target_name.clone(),
                    field: "target_name".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            if request.query.trim().is_empty() {
                return Err(ManifestError::InvalidValue {
                    target: request.target_name.clone(),
                    field: "query".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            if request.max_duration_secs == 0 {
                return Err(ManifestError::InvalidValue {
                    target: request.target_name.clone(),
                    field: "max_duration_secs".to_string(),
                    reason: "must be positive".to_string(),
                });
            }
            if !seen.insert(request.target_name.as_str()) {
                return Err(ManifestError::DuplicateTarget(request.target_name.clone()));
            }
        }
        Ok(())
    }

    /// Restrict the manifest to the named targets, preserving manifest order.
    ///
    /// Returns `UnknownTarget` if any name has no matching request.
    pub fn select_targets(&self, names: &[String]) -> Result<Vec<SoundRequest>> {
        for name in names {
            if !self.requests.iter().any(|r| &r.target_name == name) {
                return Err(ManifestError::UnknownTarget(name.clone()));
            }
        }
        Ok(self
            .requests
            .iter()
            .filter(|r| names.contains(&r.target_name))
            .cloned()
            .collect())
    }
}
