//! Branch push over libgit2

use crate::error::{Error, Result};
use crate::repo::GitRepo;
use anstream::{print, println};
use git2::{Cred, PushOptions, RemoteCallbacks};
use std::cell::{Cell, RefCell};
use std::io::Write;
use tracing::{debug, warn};

/// Username sent with the token for basic authentication
pub const PUSH_USERNAME: &str = "git";

/// Result of a successful push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The remote branch was created or moved
    Pushed,
    /// The remote already had the branch at the same commit
    UpToDate,
}

/// Pushes a local branch to a remote
pub trait BranchPusher {
    /// Push `refs/heads/<branch>` to the same name on `remote`
    ///
    /// An up-to-date remote is success, not an error.
    fn push_branch(&self, remote: &str, branch: &str, token: &str) -> Result<PushOutcome>;
}

/// `refs/heads/<branch>:refs/heads/<branch>`
pub fn branch_refspec(branch: &str) -> String {
    format!("refs/heads/{branch}:refs/heads/{branch}")
}

impl BranchPusher for GitRepo {
    fn push_branch(&self, remote: &str, branch: &str, token: &str) -> Result<PushOutcome> {
        let mut git_remote = self.repository().find_remote(remote).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::RemoteNotFound(remote.to_string())
            } else {
                Error::Git(e)
            }
        })?;

        // None until negotiation runs; Some(false) when every update is a no-op
        let changed: Cell<Option<bool>> = Cell::new(None);
        let rejected: RefCell<Option<(String, String)>> = RefCell::new(None);
        let auth_attempts = Cell::new(0u32);

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|_url, _username, _allowed| {
            auth_attempts.set(auth_attempts.get() + 1);
            if auth_attempts.get() > 1 {
                return Err(git2::Error::from_str("authentication rejected by remote"));
            }
            Cred::userpass_plaintext(PUSH_USERNAME, token)
        });
        callbacks.push_negotiation(|updates| {
            changed.set(Some(updates.iter().any(|u| u.src() != u.dst())));
            Ok(())
        });
        callbacks.push_update_reference(|reference, status| {
            if let Some(reason) = status {
                *rejected.borrow_mut() = Some((reference.to_string(), reason.to_string()));
            }
            Ok(())
        });
        callbacks.sideband_progress(|data| {
            print!("remote: {}", String::from_utf8_lossy(data));
            let _ = std::io::stdout().flush();
            true
        });
        callbacks.push_transfer_progress(|current, total, bytes| {
            if total > 0 {
                print!("\rWriting objects: {current}/{total} ({bytes} bytes)");
                if current == total {
                    println!();
                }
                let _ = std::io::stdout().flush();
            }
        });

        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);

        let refspec = branch_refspec(branch);
        debug!(remote, refspec = %refspec, "pushing");
        git_remote.push(&[refspec.as_str()], Some(&mut options))?;
        drop(options);

        if let Some((reference, reason)) = rejected.into_inner() {
            warn!(reference = %reference, reason = %reason, "push rejected");
            return Err(Error::PushRejected { reference, reason });
        }

        match changed.get() {
            Some(false) => Ok(PushOutcome::UpToDate),
            _ => Ok(PushOutcome::Pushed),
        }
    }
}
