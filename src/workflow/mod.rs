//! Push, pull request and commit message workflow
//!
//! A single pass through the steps, each one terminal on failure:
//! 1. Destination - ask where to push (or cancel)
//! 2. Push - push the branch unless skipped
//! 3. Pull request - collect title/body and open the PR
//! 4. Commit - collect and print the conventional commit message

mod execute;
mod progress;

pub use execute::{WorkflowContext, WorkflowResult, run_workflow};
pub use progress::{NoopProgress, Phase, ProgressCallback, PushStatus};
