//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use prflow::error::{Error, Result};
use prflow::platform::PlatformService;
use prflow::types::{PullRequest, PullRequestDraft, RepoRef};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simple mock platform service
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    repo: RepoRef,
    next_pr_number: AtomicU64,
    create_pr_calls: Mutex<Vec<PullRequestDraft>>,
    error_on_create_pr: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock for the given repository
    pub fn with_repo(repo: RepoRef) -> Self {
        Self {
            repo,
            next_pr_number: AtomicU64::new(1),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_create_pr: Mutex::new(None),
        }
    }

    /// Make `create_pr` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `create_pr` calls
    pub fn get_create_pr_calls(&self) -> Vec<PullRequestDraft> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Assert that `create_pr` was called with specific head and base
    pub fn assert_create_pr_called(&self, head: &str, base: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls.iter().any(|c| c.head == head && c.base == base),
            "Expected create_pr({head}, {base}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn create_pr(&self, draft: &PullRequestDraft) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(draft.clone());

        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!(
                "https://github.com/{}/{}/pull/{number}",
                self.repo.owner, self.repo.name
            ),
            base_ref: draft.base.clone(),
            head_ref: draft.head.clone(),
            title: draft.title.clone(),
        })
    }

    fn repo(&self) -> &RepoRef {
        &self.repo
    }
}
