//! GitHub authentication
//!
//! The token is read once from the environment and then passed explicitly
//! to the push and the API client.

use crate::error::{Error, Result};

/// Environment variable holding the GitHub token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// GitHub authentication configuration
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Get GitHub authentication through an environment lookup
///
/// An unset or empty `GITHUB_TOKEN` is an error.
pub fn get_github_auth<F>(lookup: F) -> Result<GitHubAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(GITHUB_TOKEN_ENV) {
        Some(token) if !token.is_empty() => Ok(GitHubAuthConfig { token }),
        _ => Err(Error::MissingToken),
    }
}
