use crate::error::{Result, TaggerError};
use crate::git::Repository;
use git2::{ErrorCode, StatusOptions};
use std::path::Path;

/// Real [Repository] implementation backed by the `git2` crate.
pub struct Git2Repository {
    repo: git2::Repository,
}

impl Git2Repository {
    /// Discover the repository from the current working directory.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Successfully opened repository
    /// * `Err` - If not inside a git repository
    pub fn discover() -> Result<Self> {
        let repo = git2::Repository::discover(".")?;
        Ok(Git2Repository { repo })
    }

    /// Open a repository at an explicit path. Used by integration tests so
    /// they don't have to change the process working directory.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::open(path)?;
        Ok(Git2Repository { repo })
    }
}

impl Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        Ok(names.iter().flatten().map(|name| name.to_string()).collect())
    }

    fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?;
        let oid = head
            .target()
            .ok_or_else(|| git2::Error::from_str("HEAD is detached or invalid"))?;
        Ok(oid.to_string())
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false);
        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;

        match self
            .repo
            .tag(name, head.as_object(), &signature, message, false)
        {
            Ok(_) => Ok(()),
            Err(e) if e.code() == ErrorCode::Exists => {
                Err(TaggerError::DuplicateTag(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
