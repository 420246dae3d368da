//! Runtime configuration
//!
//! Built once at startup from the command line and the environment.

use crate::auth::get_github_auth;
use crate::error::Result;
use std::env;
use std::path::PathBuf;

/// Remote the branch is pushed to and the repository is read from
pub const DEFAULT_REMOTE: &str = "origin";

/// Base branch for every pull request
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Environment variable naming a GitHub Enterprise host
pub const GH_HOST_ENV: &str = "GH_HOST";

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to look for the repository
    pub repo_path: PathBuf,
    /// GitHub token used for the push and the API
    pub token: String,
    /// Remote name (always `origin`)
    pub remote: String,
    /// Pull request base branch (always `main`)
    pub base_branch: String,
    /// GitHub Enterprise host, if any
    pub gh_host: Option<String>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env(repo_path: PathBuf) -> Result<Self> {
        Self::from_lookup(repo_path, |key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(repo_path: PathBuf, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth = get_github_auth(&lookup)?;
        let gh_host = lookup(GH_HOST_ENV).filter(|h| !h.is_empty());

        Ok(Self {
            repo_path,
            token: auth.token,
            remote: DEFAULT_REMOTE.to_string(),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            gh_host,
        })
    }
}
