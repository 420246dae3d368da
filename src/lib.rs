//! prflow - push a branch, open a GitHub pull request, compose a commit message
//!
//! The library holds the workflow and its collaborators; the `prflow` binary
//! wires them to the terminal.

pub mod auth;
pub mod commit;
pub mod config;
pub mod error;
pub mod platform;
pub mod prompt;
pub mod repo;
pub mod types;
pub mod workflow;
