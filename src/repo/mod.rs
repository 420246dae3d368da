//! Local git repository access
//!
//! Reads the origin remote and the checked-out branch, and pushes the branch
//! back (see [`push`]).

pub mod push;

pub use push::{BranchPusher, PushOutcome};

use crate::error::{Error, Result};
use crate::types::GitRemote;
use git2::Repository;
use std::path::Path;
use tracing::debug;

/// What the inspector learns about the repository
#[derive(Debug, Clone)]
pub struct RepoSnapshot {
    /// The remote the workflow targets
    pub remote: GitRemote,
    /// Short name of the checked-out branch
    pub branch: String,
}

/// A git repository opened with libgit2
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`, searching parent directories
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| Error::NotARepo(format!("{}: {}", path.display(), e.message())))?;
        debug!(path = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Wrap an already opened repository
    pub const fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// The underlying libgit2 handle
    pub const fn repository(&self) -> &Repository {
        &self.repo
    }

    /// First configured URL of the named remote
    pub fn remote(&self, name: &str) -> Result<GitRemote> {
        let remote = self.repo.find_remote(name).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::RemoteNotFound(name.to_string())
            } else {
                Error::Git(e)
            }
        })?;

        let url = remote
            .url()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::RemoteWithoutUrl(name.to_string()))?;

        Ok(GitRemote {
            name: name.to_string(),
            url: url.to_string(),
        })
    }

    /// Short name of the checked-out branch
    pub fn current_branch(&self) -> Result<String> {
        if self.repo.head_detached()? {
            return Err(Error::DetachedHead);
        }

        let head = self.repo.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                Error::UnbornBranch(e.message().to_string())
            } else {
                Error::Git(e)
            }
        })?;

        head.shorthand()
            .map(ToString::to_string)
            .ok_or(Error::DetachedHead)
    }

    /// Read the remote and the current branch in one go
    pub fn inspect(&self, remote: &str) -> Result<RepoSnapshot> {
        let remote = self.remote(remote)?;
        let branch = self.current_branch()?;
        debug!(remote = %remote.name, url = %remote.url, branch = %branch, "inspected repository");
        Ok(RepoSnapshot { remote, branch })
    }
}
