use crate::error::{ReleaseConfigError, Result};
use git2::{BranchType, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Remote {
    repo: Git2Repo,
}

impl Git2Remote {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Remote { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Remote { repo }
    }
}

impl super::RemoteLister for Git2Remote {
    fn list_remote_branches(&self) -> Result<String> {
        let branches = self
            .repo
            .branches(Some(BranchType::Remote))
            .map_err(|e| ReleaseConfigError::remote(format!("Cannot list branches: {}", e)))?;

        let mut names = Vec::new();

        for entry in branches {
            let (branch, _) = entry
                .map_err(|e| ReleaseConfigError::remote(format!("Cannot read branch: {}", e)))?;

            if let Some(name) = branch.name().map_err(|e| {
                ReleaseConfigError::remote(format!("Branch name is not valid UTF-8: {}", e))
            })? {
                names.push(name.to_string());
            }
        }

        Ok(names.join("\n"))
    }
}

// SAFETY: Git2Remote wraps git2::Repository which is Send.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Remote {}
