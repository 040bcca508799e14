use thiserror::Error;

/// Unified error type for git-tagger operations
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("no version tags found in the repository")]
    NoTagsFound,

    #[error("version format error: {0}")]
    Format(String),

    #[error("tag '{0}' already exists")]
    DuplicateTag(String),

    #[error("working tree has uncommitted changes; commit or stash them first")]
    DirtyWorkingTree,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tagger
pub type Result<T> = std::result::Result<T, TaggerError>;

impl TaggerError {
    /// Create a format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        TaggerError::Format(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TaggerError::Config(msg.into())
    }
}
