//! Interactive forms
//!
//! The workflow asks its questions through [`Prompter`]; the terminal
//! implementation lives in [`terminal`].

mod terminal;

pub use terminal::TerminalPrompter;

use crate::commit::CommitMessageDraft;
use crate::error::Result;
use crate::types::{PushDestination, RepoRef};

/// Answers from the pull request form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestFields {
    /// PR title
    pub title: String,
    /// PR body
    pub body: String,
}

/// Source of the user's answers
///
/// Each method blocks until its form is complete. An aborted form is an
/// error and ends the run.
pub trait Prompter {
    /// Ask where the current branch should be pushed
    fn choose_destination(&self, repo: &RepoRef) -> Result<PushDestination>;

    /// Ask for the pull request title and body
    fn pull_request_fields(&self) -> Result<PullRequestFields>;

    /// Ask for the conventional commit fields and the confirmation
    fn commit_fields(&self) -> Result<CommitMessageDraft>;
}
