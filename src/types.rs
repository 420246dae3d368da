//! Core types for prflow

use serde::{Deserialize, Serialize};
use std::fmt;

/// A GitHub repository identified from the origin remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl RepoRef {
    /// Create a reference to a github.com repository
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            host: None,
        }
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// `owner/name-fork`
    pub fn fork_name(&self) -> String {
        format!("{}/{}-fork", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Where the current branch should be pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDestination {
    /// Push to the repository itself
    Push,
    /// Push to the fork of the repository
    Fork,
    /// Don't push, go straight to the pull request
    Skip,
    /// Stop without doing anything
    Cancel,
}

impl PushDestination {
    /// Menu order shown to the user
    pub const MENU: [Self; 4] = [Self::Push, Self::Fork, Self::Skip, Self::Cancel];

    /// Menu label for this choice
    pub fn label(self, repo: &RepoRef) -> String {
        match self {
            Self::Push => repo.full_name(),
            Self::Fork => format!("Fork {}", repo.full_name()),
            Self::Skip => "Skip pushing branch".to_string(),
            Self::Cancel => "Cancel".to_string(),
        }
    }
}

/// A pull request about to be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDraft {
    /// PR title
    pub title: String,
    /// PR body (markdown)
    pub body: String,
    /// Head branch name
    pub head: String,
    /// Base branch name
    pub base: String,
}

/// A pull request as reported by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// A git remote
#[derive(Debug, Clone)]
pub struct GitRemote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// Remote URL
    pub url: String,
}
