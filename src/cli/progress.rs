//! CLI progress callback with styled output and a spinner

use crate::cli::style::{Stream, Stylize, arrow, check, cross, hyperlink_url, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use prflow::types::PullRequest;
use prflow::workflow::{Phase, ProgressCallback, PushStatus};
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints to stdout
///
/// Shows a spinner while the pull request is being created.
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress printer with no active spinner
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            spinner.finish_and_clear();
        }
    }
}

fn push_started_line(branch: &str, target: &str) -> String {
    format!(
        "{} {} {} to {}...",
        arrow(),
        "Pushing branch".emphasis(),
        branch.accent(),
        target.accent()
    )
}

fn pr_created_line(pr: &PullRequest) -> String {
    format!(
        "{} Pull request created: {}",
        check(),
        hyperlink_url(Stream::Stdout, &pr.html_url)
    )
}

/// Highlighted label on its own line, then the message verbatim
fn commit_message_block(message: &str) -> String {
    format!("{}\n{message}", "Final commit message:".highlight())
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::CreatingPr => self.start_spinner("Creating pull request..."),
            Phase::ComposingCommit => println!(),
            Phase::Pushing | Phase::Complete => {}
        }
    }

    async fn on_push(&self, branch: &str, target: &str, status: PushStatus) {
        match &status {
            PushStatus::Started => println!("{}", push_started_line(branch, target)),
            PushStatus::Success => {
                println!("{} {}", check(), status.to_string().success());
            }
            PushStatus::AlreadyUpToDate => {
                println!("{} {}", check(), status.to_string().muted());
            }
            PushStatus::Failed(_) => {
                eprintln!("{} Push to {} failed", cross(), target.accent().for_stderr());
            }
        }
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        self.stop_spinner();
        println!("{}", pr_created_line(pr));
    }

    async fn on_commit_message(&self, message: &str) {
        println!("{}", commit_message_block(message));
    }

    async fn on_failure(&self, phase: Phase) {
        self.stop_spinner();
        if phase == Phase::CreatingPr {
            eprintln!("{} {} failed", cross(), phase.to_string().error());
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
