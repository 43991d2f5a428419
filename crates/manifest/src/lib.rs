//! Configuration data model for the sound acquisition tool.
//!
//! This crate provides:
//! - `SoundRequest`: one desired output artifact (target name, search query,
//!   duration bound)
//! - `TrustList`: pre-approved channel-name substrings
//! - `ScoreWeights`: the point values and thresholds of the scoring heuristic
//! - `SoundManifest`: the full request set, loadable from a JSON file or
//!   built in
//!
//! Everything here is read-only after load: the manifest is resolved once at
//! process start and handed to the engine as immutable data.

pub mod error;
pub mod manifest;
pub mod trust;
pub mod types;

// Re-export commonly used types
pub use error::ManifestError;
pub use manifest::SoundManifest;
pub use trust::TrustList;
pub use types::{ScoreWeights, SoundRequest};
