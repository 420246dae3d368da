//! Error types for prflow
//!
//! Every error is terminal: it propagates to the binary's single handler,
//! which prints it and exits with [`EXIT_FAILURE`].

use thiserror::Error;

/// Process exit code for cancellation and for every fatal error
pub const EXIT_FAILURE: u8 = 1;

/// Errors produced while running the push / pull request / commit workflow
#[derive(Debug, Error)]
pub enum Error {
    /// `GITHUB_TOKEN` is unset or empty
    #[error("GITHUB_TOKEN env var is required")]
    MissingToken,

    /// No git repository at or above the given path
    #[error("not a git repository: {0}")]
    NotARepo(String),

    /// The named remote is not configured
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// The remote exists but has no usable URL
    #[error("remote '{0}' has no URL configured")]
    RemoteWithoutUrl(String),

    /// HEAD does not point at a branch
    #[error("HEAD is detached, check out a branch first")]
    DetachedHead,

    /// HEAD points at a branch with no commits yet
    #[error("current branch has no commits: {0}")]
    UnbornBranch(String),

    /// The remote URL is not a recognizable GitHub URL
    #[error("cannot parse GitHub remote URL: {0}")]
    InvalidRemoteUrl(String),

    /// The user chose to cancel
    #[error("cancelled")]
    Cancelled,

    /// A form was closed without an answer
    #[error("prompt aborted: {0}")]
    Prompt(String),

    /// The remote refused a pushed reference
    #[error("push rejected for {reference}: {reason}")]
    PushRejected {
        /// Remote reference that was refused
        reference: String,
        /// Reason reported by the remote
        reason: String,
    },

    /// GitHub API failure with a plain message
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error returned by the GitHub client
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// libgit2 failure
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// Terminal prompt failure
    #[error("prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is the user's explicit cancellation
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Exit code reported to the shell
    ///
    /// Cancellation and failures share the same code; only successful
    /// completion (including a declined commit) exits with 0.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingToken
            | Self::NotARepo(_)
            | Self::RemoteNotFound(_)
            | Self::RemoteWithoutUrl(_)
            | Self::DetachedHead
            | Self::UnbornBranch(_)
            | Self::InvalidRemoteUrl(_)
            | Self::Cancelled
            | Self::Prompt(_)
            | Self::PushRejected { .. }
            | Self::GitHubApi(_)
            | Self::Octocrab(_)
            | Self::Git(_)
            | Self::Dialoguer(_)
            | Self::Io(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias for prflow operations
pub type Result<T> = std::result::Result<T, Error>;
