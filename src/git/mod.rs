//! Git operations abstraction layer
//!
//! The [Repository] trait defines the handful of git operations the tagger
//! needs. Concrete implementations:
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing
//!
//! Orchestration code depends on the trait rather than `git2` directly so
//! the command flows can be tested without touching a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send`. Methods return
/// [crate::error::Result] and map underlying failures (e.g. `git2::Error`)
/// to [crate::error::TaggerError] variants.
pub trait Repository: Send {
    /// List all tag names in the repository.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the full 40-character hash of the current HEAD commit.
    fn head_hash(&self) -> Result<String>;

    /// Check whether the working tree has no uncommitted or untracked changes.
    fn is_clean(&self) -> Result<bool>;

    /// Stage all changes and create a commit with the given message.
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Create an annotated tag named `name` at HEAD with the given message.
    ///
    /// # Returns
    /// * `Ok(())` - Tag created
    /// * `Err(TaggerError::DuplicateTag)` - A tag with this name exists
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;
}
