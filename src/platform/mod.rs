//! Platform services for GitHub
//!
//! Provides the pull request operation behind a trait so the workflow can be
//! driven against a mock.

mod detection;
mod factory;
mod github;

pub use detection::{is_github_host, parse_repo_ref};
pub use factory::create_platform_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PullRequest, PullRequestDraft, RepoRef};
use async_trait::async_trait;

/// Platform service trait for pull request operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Open a new pull request from the draft
    async fn create_pr(&self, draft: &PullRequestDraft) -> Result<PullRequest>;

    /// The repository this service talks to
    fn repo(&self) -> &RepoRef;
}
