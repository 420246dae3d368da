//! Scripted prompter for testing

#![allow(dead_code)]

use prflow::commit::CommitMessageDraft;
use prflow::error::{Error, Result};
use prflow::prompt::{Prompter, PullRequestFields};
use prflow::types::{PushDestination, RepoRef};
use std::sync::Mutex;

/// Which form the mock should abort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Destination,
    PullRequest,
    Commit,
}

/// Prompter returning preset answers and recording which forms were shown
pub struct MockPrompter {
    destination: PushDestination,
    pr_fields: PullRequestFields,
    commit: CommitMessageDraft,
    abort_on: Option<Form>,
    shown: Mutex<Vec<Form>>,
}

impl MockPrompter {
    /// Create a prompter with the given answers
    pub fn new(
        destination: PushDestination,
        pr_fields: PullRequestFields,
        commit: CommitMessageDraft,
    ) -> Self {
        Self {
            destination,
            pr_fields,
            commit,
            abort_on: None,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Abort the given form as if the user pressed Esc
    #[must_use]
    pub fn aborting(mut self, form: Form) -> Self {
        self.abort_on = Some(form);
        self
    }

    /// Forms shown so far, in order
    pub fn shown(&self) -> Vec<Form> {
        self.shown.lock().unwrap().clone()
    }

    fn show(&self, form: Form) -> Result<()> {
        self.shown.lock().unwrap().push(form);
        if self.abort_on == Some(form) {
            return Err(Error::Prompt(format!("{form:?}")));
        }
        Ok(())
    }
}

impl Prompter for MockPrompter {
    fn choose_destination(&self, _repo: &RepoRef) -> Result<PushDestination> {
        self.show(Form::Destination)?;
        Ok(self.destination)
    }

    fn pull_request_fields(&self) -> Result<PullRequestFields> {
        self.show(Form::PullRequest)?;
        Ok(self.pr_fields.clone())
    }

    fn commit_fields(&self) -> Result<CommitMessageDraft> {
        self.show(Form::Commit)?;
        Ok(self.commit.clone())
    }
}
