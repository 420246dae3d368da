//! Workflow execution
//!
//! Runs the steps in order; the first error ends the run.

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::prompt::{Prompter, PullRequestFields};
use crate::repo::{BranchPusher, PushOutcome};
use crate::types::{PullRequest, PullRequestDraft, PushDestination, RepoRef};
use crate::workflow::{Phase, ProgressCallback, PushStatus};
use tracing::{debug, info};

/// Everything the workflow needs to know up front
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Repository behind the remote
    pub repo: RepoRef,
    /// Remote name the branch is pushed to
    pub remote: String,
    /// Current branch, used as the PR head
    pub branch: String,
    /// PR base branch
    pub base_branch: String,
    /// Token for the push
    pub token: String,
}

impl WorkflowContext {
    /// Build the pull request draft from the form answers
    pub fn draft(&self, fields: PullRequestFields) -> PullRequestDraft {
        PullRequestDraft {
            title: fields.title,
            body: fields.body,
            head: self.branch.clone(),
            base: self.base_branch.clone(),
        }
    }
}

/// Result of a completed workflow
#[derive(Debug, Clone)]
pub struct WorkflowResult {
    /// Destination the user chose
    pub destination: PushDestination,
    /// Push outcome, `None` when skipped
    pub push: Option<PushOutcome>,
    /// The created pull request
    pub pull_request: PullRequest,
    /// The commit message, `None` when declined
    pub commit_message: Option<String>,
}

/// Run the workflow
///
/// Cancelling at the destination step returns [`Error::Cancelled`] without
/// pushing. Declining the commit confirmation is a normal completion with no
/// message.
pub async fn run_workflow(
    ctx: &WorkflowContext,
    prompter: &dyn Prompter,
    pusher: &dyn BranchPusher,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> Result<WorkflowResult> {
    let destination = prompter.choose_destination(&ctx.repo)?;
    debug!(?destination, "push destination chosen");

    let push = match destination {
        PushDestination::Cancel => return Err(Error::Cancelled),
        PushDestination::Push => {
            Some(push_branch(ctx, pusher, progress, &ctx.repo.full_name()).await?)
        }
        PushDestination::Fork => {
            progress.on_message("Pushing to fork…").await;
            Some(push_branch(ctx, pusher, progress, &ctx.repo.fork_name()).await?)
        }
        PushDestination::Skip => {
            progress.on_message("Skipping push…").await;
            None
        }
    };

    let fields = prompter.pull_request_fields()?;
    let draft = ctx.draft(fields);

    progress.on_phase(Phase::CreatingPr).await;
    let pull_request = match platform.create_pr(&draft).await {
        Ok(pr) => pr,
        Err(e) => {
            progress.on_failure(Phase::CreatingPr).await;
            return Err(e);
        }
    };
    info!(number = pull_request.number, url = %pull_request.html_url, "pull request created");
    progress.on_pr_created(&pull_request).await;

    progress.on_phase(Phase::ComposingCommit).await;
    let commit = prompter.commit_fields()?;
    let commit_message = commit.message();
    if let Some(message) = &commit_message {
        progress.on_commit_message(message).await;
    }

    progress.on_phase(Phase::Complete).await;

    Ok(WorkflowResult {
        destination,
        push,
        pull_request,
        commit_message,
    })
}

async fn push_branch(
    ctx: &WorkflowContext,
    pusher: &dyn BranchPusher,
    progress: &dyn ProgressCallback,
    target: &str,
) -> Result<PushOutcome> {
    progress.on_phase(Phase::Pushing).await;
    progress
        .on_push(&ctx.branch, target, PushStatus::Started)
        .await;

    match pusher.push_branch(&ctx.remote, &ctx.branch, &ctx.token) {
        Ok(outcome) => {
            let status = match outcome {
                PushOutcome::Pushed => PushStatus::Success,
                PushOutcome::UpToDate => PushStatus::AlreadyUpToDate,
            };
            progress.on_push(&ctx.branch, target, status).await;
            Ok(outcome)
        }
        Err(e) => {
            progress
                .on_push(&ctx.branch, target, PushStatus::Failed(e.to_string()))
                .await;
            progress.on_failure(Phase::Pushing).await;
            Err(e)
        }
    }
}
