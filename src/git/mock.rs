use crate::error::{Result, TaggerError};
use crate::git::Repository;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations.
///
/// Records created tags and commits so orchestration tests can assert on
/// the side effects of a command flow.
pub struct MockRepository {
    tags: Mutex<Vec<String>>,
    head: String,
    clean: bool,
    commits: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create an empty mock repository with a clean working tree.
    pub fn new() -> Self {
        MockRepository {
            tags: Mutex::new(Vec::new()),
            head: "3456abcdef0123456789abcdef0123456789abcd".to_string(),
            clean: true,
            commits: Mutex::new(Vec::new()),
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.lock().unwrap().push(name.into());
    }

    /// Set the HEAD commit hash
    pub fn set_head_hash(&mut self, hash: impl Into<String>) {
        self.head = hash.into();
    }

    /// Mark the working tree as dirty
    pub fn set_dirty(&mut self) {
        self.clean = false;
    }

    /// Messages of the commits created through [Repository::commit_all]
    pub fn committed_messages(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.lock().unwrap().clone())
    }

    fn head_hash(&self) -> Result<String> {
        Ok(self.head.clone())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        self.commits.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn create_tag(&self, name: &str, _message: &str) -> Result<()> {
        let mut tags = self.tags.lock().unwrap();
        if tags.iter().any(|existing| existing == name) {
            return Err(TaggerError::DuplicateTag(name.to_string()));
        }
        tags.push(name.to_string());
        Ok(())
    }
}
