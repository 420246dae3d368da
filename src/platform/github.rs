//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestDraft, RepoRef};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    repo: RepoRef,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// Enterprise hosts are addressed at `https://<host>/api/v3`.
    pub fn new(token: &str, repo: RepoRef) -> Result<Self> {
        let base_uri = repo.host.as_ref().map(|h| format!("https://{h}/api/v3"));
        Self::build(token, repo, base_uri)
    }

    /// Create a service talking to an explicit API root
    pub fn with_base_uri(token: &str, repo: RepoRef, base_uri: &str) -> Result<Self> {
        Self::build(token, repo, Some(base_uri.to_string()))
    }

    fn build(token: &str, repo: RepoRef, base_uri: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, repo })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn create_pr(&self, draft: &PullRequestDraft) -> Result<PullRequest> {
        debug!(repo = %self.repo, head = %draft.head, base = %draft.base, "creating pull request");

        let pr = self
            .client
            .pulls(&self.repo.owner, &self.repo.name)
            .create(&draft.title, &draft.head, &draft.base)
            .body(&draft.body)
            .maintainer_can_modify(true)
            .send()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    fn repo(&self) -> &RepoRef {
        &self.repo
    }
}
