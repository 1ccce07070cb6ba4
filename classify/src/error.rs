//! Error types for feature encoding and training-data writing.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to encode a feature or an outcome.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No registered sub-encoder accepts the feature's value type.
    #[error("no feature encoder accepts feature `{name}` of type {kind}")]
    UnsupportedFeature {
        /// Name of the offending feature.
        name: String,
        /// Value-type tag of the offending feature.
        kind: &'static str,
    },

    /// The writer has no features encoder configured.
    #[error("no features encoder has been set on this data writer")]
    MissingFeaturesEncoder,

    /// The writer has no outcome encoder configured.
    #[error("no outcome encoder has been set on this data writer")]
    MissingOutcomeEncoder,
}

/// Failure while creating, writing, or finishing a training-data file.
#[derive(Debug, Error)]
pub enum DataWriteError {
    /// A feature or outcome could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// File or directory access under the output directory failed.
    #[error("I/O failure at {path}: {source}")]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Persisted encoder state exists but could not be decoded.
    #[error("malformed encoder state at {path}: {source}")]
    MalformedState {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl DataWriteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataWriteError::Io {
            path: path.into(),
            source,
        }
    }
}
