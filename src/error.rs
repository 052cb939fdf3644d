//! Error types for Stamped
//!
//! Uses `thiserror` for library errors. Every variant that concerns a file
//! carries the offending path so the CLI can report a precise diagnostic.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::{MarkerError, MergeError};

/// Result type alias for Stamped operations
pub type StampedResult<T> = Result<T, StampedError>;

/// Main error type for Stamped operations
#[derive(Error, Debug)]
pub enum StampedError {
    /// Existing file carries no signature and clobber mode is off
    #[error("{path} exists but has no signature; refusing to overwrite (use --clobber to force)")]
    NoSignature { path: PathBuf },

    /// Existing file has a signature that does not match its content
    #[error("{path} has an invalid signature; it was edited outside its manual sections (use --clobber to force)")]
    BadSignature { path: PathBuf },

    /// Manual-section markers are malformed in freshly rendered or final content
    #[error("malformed manual section markers in {path}: {source}")]
    MalformedMarker {
        path: PathBuf,
        #[source]
        source: MarkerError,
    },

    /// A prior version cannot be used as a merge source
    #[error("cannot salvage manual sections from {path}: {source}")]
    CorruptPriorContent {
        path: PathBuf,
        #[source]
        source: MarkerError,
    },

    /// File system operation failed on a specific path
    #[error("file system error on {path}: {message}")]
    Fs { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Rekey entry could not be parsed
    #[error("invalid rekey entry '{entry}' - expected NEW=OLD1,OLD2")]
    InvalidRekey { entry: String },
}

impl StampedError {
    /// Path of the file this error is about, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StampedError::NoSignature { path }
            | StampedError::BadSignature { path }
            | StampedError::MalformedMarker { path, .. }
            | StampedError::CorruptPriorContent { path, .. }
            | StampedError::Fs { path, .. } => Some(path),
            StampedError::InvalidConfig { file, .. } => Some(file),
            StampedError::InvalidRekey { .. } => None,
        }
    }

    /// Short machine-readable kind, used by JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            StampedError::NoSignature { .. } => "no_signature",
            StampedError::BadSignature { .. } => "bad_signature",
            StampedError::MalformedMarker { .. } => "malformed_marker",
            StampedError::CorruptPriorContent { .. } => "corrupt_prior_content",
            StampedError::Fs { .. } => "fs",
            StampedError::InvalidConfig { .. } => "invalid_config",
            StampedError::InvalidRekey { .. } => "invalid_rekey",
        }
    }

    /// Attach a path to a merge failure.
    ///
    /// Template problems are generator bugs and are reported against the
    /// target path; prior-source problems name the source they came from.
    pub fn from_merge(target: PathBuf, err: MergeError) -> Self {
        match err {
            MergeError::Template(source) => StampedError::MalformedMarker {
                path: target,
                source,
            },
            MergeError::CorruptPrior { origin, source } => StampedError::CorruptPriorContent {
                path: origin,
                source,
            },
        }
    }
}
