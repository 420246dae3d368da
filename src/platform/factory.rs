//! Platform service factory

use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::RepoRef;

/// Create the platform service for a repository
///
/// The token is passed in explicitly; nothing here reads the environment.
pub fn create_platform_service(repo: &RepoRef, token: &str) -> Result<Box<dyn PlatformService>> {
    Ok(Box::new(GitHubService::new(token, repo.clone())?))
}
