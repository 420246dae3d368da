//! Shared test utilities

pub mod fixtures;
pub mod mock_platform;
pub mod mock_prompter;
pub mod mock_pusher;
pub mod recording_progress;
