use std::path::PathBuf;

use thiserror::Error;

/// Result alias for content loading.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Failures while reading or parsing a content pack.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The pack could not be read from disk.
    #[error("failed to read content pack {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// JSON parse error.
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported content format for {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    /// The same category key appears twice in one pack.
    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),
}
