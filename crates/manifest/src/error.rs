//! Error types for manifest loading and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating a sound manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("failed to read manifest {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON for the expected shape
    #[error("invalid manifest {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request field has an unusable value
    #[error("invalid value for {field} in request '{target}': {reason}")]
    InvalidValue {
        target: String,
        field: String,
        reason: String,
    },

    /// Two requests share the same target name
    #[error("duplicate target name '{0}'")]
    DuplicateTarget(String),

    /// Manifest defines no requests at all
    #[error("manifest defines no sound requests")]
    Empty,

    /// A requested target name is not present in the manifest
    #[error("unknown target '{0}'")]
    UnknownTarget(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ManifestError>;
