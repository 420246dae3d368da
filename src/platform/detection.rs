//! Repository detection from remote URLs

use crate::error::{Error, Result};
use crate::types::RepoRef;
use regex::Regex;
use std::sync::LazyLock;

const GITHUB_HOST: &str = "github.com";

// SSH format: git@host:owner/repo.git
static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@([^:/]+):(.+?)(?:\.git)?/?$").expect("hardcoded SSH pattern is valid")
});

/// Whether `hostname` is github.com or the configured enterprise host
pub fn is_github_host(hostname: &str, gh_host: Option<&str>) -> bool {
    hostname == GITHUB_HOST || gh_host.is_some_and(|h| hostname == h)
}

/// Parse repository info (owner/name) from a remote URL
///
/// Accepts `git@github.com:OWNER/NAME(.git)` and
/// `https://github.com/OWNER/NAME(.git)`, or the same shapes on `gh_host`.
/// Anything else is [`Error::InvalidRemoteUrl`].
pub fn parse_repo_ref(url: &str, gh_host: Option<&str>) -> Result<RepoRef> {
    let (hostname, path) = split_remote_url(url)
        .ok_or_else(|| Error::InvalidRemoteUrl(url.to_string()))?;

    if !is_github_host(&hostname, gh_host) {
        return Err(Error::InvalidRemoteUrl(url.to_string()));
    }

    let mut parts = path.split('/');
    let owner = parts.next().unwrap_or_default();
    let name = parts
        .next()
        .map(|n| n.strip_suffix(".git").unwrap_or(n))
        .unwrap_or_default();

    if owner.is_empty() || name.is_empty() {
        return Err(Error::InvalidRemoteUrl(url.to_string()));
    }

    let host = (hostname != GITHUB_HOST).then_some(hostname);

    Ok(RepoRef {
        owner: owner.to_string(),
        name: name.to_string(),
        host,
    })
}

/// Split a remote URL into hostname and repository path
fn split_remote_url(url: &str) -> Option<(String, String)> {
    if url.starts_with("git@") {
        let caps = RE_SSH.captures(url)?;
        return Some((caps[1].to_string(), caps[2].to_string()));
    }

    let parsed = url::Url::parse(url).ok()?;
    if parsed.scheme() != "https" {
        return None;
    }
    let hostname = parsed.host_str()?.to_string();
    let path = parsed.path().trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path).to_string();
    Some((hostname, path))
}
