//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows the terminal (or a test recorder) to receive progress
//! updates while the workflow runs.

use crate::types::PullRequest;
use async_trait::async_trait;
use std::fmt;

/// Workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pushing the branch
    Pushing,
    /// Creating the pull request
    CreatingPr,
    /// Collecting the commit message
    ComposingCommit,
    /// Workflow complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pushing => "Pushing branch",
            Self::CreatingPr => "Creating pull request",
            Self::ComposingCommit => "Composing commit message",
            Self::Complete => "Done",
        };
        f.write_str(s)
    }
}

/// Push operation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushStatus {
    /// Push started
    Started,
    /// Push succeeded
    Success,
    /// Remote already had the branch
    AlreadyUpToDate,
    /// Push failed with error message
    Failed(String),
}

impl fmt::Display for PushStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => f.write_str("pushing"),
            Self::Success => f.write_str("Push successful!"),
            Self::AlreadyUpToDate => f.write_str("Branch already up-to-date."),
            Self::Failed(msg) => write!(f, "Push failed: {msg}"),
        }
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called as the branch is pushed to `target` (`owner/name` or `owner/name-fork`)
    async fn on_push(&self, branch: &str, target: &str, status: PushStatus);

    /// Called when the pull request is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called with the confirmed commit message
    async fn on_commit_message(&self, message: &str);

    /// Called when a phase fails, just before the error is returned
    async fn on_failure(&self, phase: Phase);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_push(&self, _branch: &str, _target: &str, _status: PushStatus) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_commit_message(&self, _message: &str) {}
    async fn on_failure(&self, _phase: Phase) {}
    async fn on_message(&self, _message: &str) {}
}
