//! Error types for `refit`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `refit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No base block matched a material letter's name pattern.
    ///
    /// The structural material letters (W, S, G, R, A, M, H, L) must all
    /// resolve against the loaded base blocks before operations can parse.
    #[error("no base block matching \"{pattern}\" for material letter '{letter}'")]
    BaseMaterialNotFound {
        /// The operation-descriptor letter that failed to resolve.
        letter: char,
        /// The base block name pattern the letter maps to.
        pattern: String,
    },

    /// The blueprint file to rewrite does not exist.
    #[error("blueprint not found: {path}")]
    BlueprintNotFound {
        /// The missing blueprint path.
        path: PathBuf,
    },

    /// Could not determine the home directory for default asset paths.
    #[error("could not determine the home directory for default asset paths")]
    HomeDirNotFound,
}

/// A specialized Result type for `refit` operations.
pub type Result<T> = std::result::Result<T, Error>;
