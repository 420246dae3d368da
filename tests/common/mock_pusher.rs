//! Mock branch pusher for testing

#![allow(dead_code)]

use prflow::error::{Error, Result};
use prflow::repo::{BranchPusher, PushOutcome};
use std::sync::Mutex;

/// Call record for `push_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCall {
    pub remote: String,
    pub branch: String,
    pub token: String,
}

/// Pusher with a fixed outcome and call tracking
pub struct MockPusher {
    outcome: PushOutcome,
    error: Option<String>,
    calls: Mutex<Vec<PushCall>>,
}

impl MockPusher {
    /// Pusher whose pushes succeed with `outcome`
    pub fn returning(outcome: PushOutcome) -> Self {
        Self {
            outcome,
            error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Pusher whose pushes are rejected
    pub fn rejecting(reason: &str) -> Self {
        Self {
            outcome: PushOutcome::Pushed,
            error: Some(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Get all `push_branch` calls
    pub fn calls(&self) -> Vec<PushCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl BranchPusher for MockPusher {
    fn push_branch(&self, remote: &str, branch: &str, token: &str) -> Result<PushOutcome> {
        self.calls.lock().unwrap().push(PushCall {
            remote: remote.to_string(),
            branch: branch.to_string(),
            token: token.to_string(),
        });

        match &self.error {
            Some(reason) => Err(Error::PushRejected {
                reference: format!("refs/heads/{branch}"),
                reason: reason.clone(),
            }),
            None => Ok(self.outcome),
        }
    }
}
