//! Progress callback that records events

#![allow(dead_code)]

use async_trait::async_trait;
use prflow::types::PullRequest;
use prflow::workflow::{Phase, ProgressCallback, PushStatus};
use std::sync::Mutex;

/// A recorded progress event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Phase(Phase),
    Push {
        branch: String,
        target: String,
        status: PushStatus,
    },
    PrCreated(u64),
    CommitMessage(String),
    Failure(Phase),
    Message(String),
}

/// Records every callback for later assertions
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    /// All events so far
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Push statuses reported so far
    pub fn push_statuses(&self) -> Vec<PushStatus> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Push { status, .. } => Some(status),
                _ => None,
            })
            .collect()
    }

    /// Commit messages printed so far
    pub fn commit_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::CommitMessage(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.record(Event::Phase(phase));
    }

    async fn on_push(&self, branch: &str, target: &str, status: PushStatus) {
        self.record(Event::Push {
            branch: branch.to_string(),
            target: target.to_string(),
            status,
        });
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        self.record(Event::PrCreated(pr.number));
    }

    async fn on_commit_message(&self, message: &str) {
        self.record(Event::CommitMessage(message.to_string()));
    }

    async fn on_failure(&self, phase: Phase) {
        self.record(Event::Failure(phase));
    }

    async fn on_message(&self, message: &str) {
        self.record(Event::Message(message.to_string()));
    }
}
