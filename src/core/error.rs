//! Error types and error handling for folio.
//!
//! The search core itself never fails. These errors come from the
//! layers around it: loading a site, resolving a node for display,
//! and reading configuration.

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for folio
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl FolioError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FolioError::FileNotFound(_) | FolioError::InvalidPath(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            FolioError::NotAFile(_)
                | FolioError::DuplicateNodeId(_)
                | FolioError::InvalidManifest(_)
                | FolioError::ConfigError(_)
        )
    }
}
