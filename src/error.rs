use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Revision error: {0}")]
    Revision(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create an invalid-version-format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitSemverError::InvalidVersionFormat(msg.into())
    }

    /// Create a revision error with context
    pub fn revision(msg: impl Into<String>) -> Self {
        GitSemverError::Revision(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }
}
