//! Default command - push, open a pull request, compose a commit message

use crate::cli::progress::CliProgress;
use prflow::config::Config;
use prflow::error::Result;
use prflow::platform::{create_platform_service, parse_repo_ref};
use prflow::prompt::TerminalPrompter;
use prflow::repo::GitRepo;
use prflow::workflow::{WorkflowContext, run_workflow};
use std::path::Path;
use tracing::info;

/// Run the workflow against the repository at `path`
pub async fn run(path: &Path) -> Result<()> {
    // Token first: nothing else happens without it
    let config = Config::from_env(path.to_path_buf())?;

    let repo = GitRepo::open(&config.repo_path)?;
    let snapshot = repo.inspect(&config.remote)?;
    let repo_ref = parse_repo_ref(&snapshot.remote.url, config.gh_host.as_deref())?;
    info!(repo = %repo_ref, branch = %snapshot.branch, "starting workflow");

    let platform = create_platform_service(&repo_ref, &config.token)?;

    let ctx = WorkflowContext {
        repo: repo_ref,
        remote: snapshot.remote.name,
        branch: snapshot.branch,
        base_branch: config.base_branch,
        token: config.token,
    };

    let prompter = TerminalPrompter::new();
    let progress = CliProgress::new();
    let result = run_workflow(&ctx, &prompter, &repo, platform.as_ref(), &progress).await?;

    info!(
        pr = result.pull_request.number,
        committed = result.commit_message.is_some(),
        "workflow complete"
    );
    Ok(())
}
