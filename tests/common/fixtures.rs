//! Test data factories for prflow types

#![allow(dead_code)]

use git2::{Repository, Signature};
use prflow::commit::CommitMessageDraft;
use prflow::prompt::PullRequestFields;
use prflow::types::RepoRef;
use prflow::workflow::WorkflowContext;
use std::path::Path;
use tempfile::TempDir;

/// Repository reference used across tests
pub fn acme_widget() -> RepoRef {
    RepoRef::new("acme", "widget")
}

/// Workflow context for `acme/widget` on `feature/login`
pub fn make_context() -> WorkflowContext {
    WorkflowContext {
        repo: acme_widget(),
        remote: "origin".to_string(),
        branch: "feature/login".to_string(),
        base_branch: "main".to_string(),
        token: "ghp_test".to_string(),
    }
}

/// Pull request form answers
pub fn make_pr_fields(title: &str, body: &str) -> PullRequestFields {
    PullRequestFields {
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Commit form answers for `feat(api): add endpoint`
pub fn make_commit(confirmed: bool) -> CommitMessageDraft {
    CommitMessageDraft {
        kind: "feat".to_string(),
        scope: "api".to_string(),
        summary: "add endpoint".to_string(),
        description: "details".to_string(),
        confirmed,
    }
}

/// Write a file and commit it on HEAD
pub fn commit_file(repo: &Repository, name: &str, content: &str) -> git2::Oid {
    let workdir = repo.workdir().expect("non-bare repository");
    std::fs::write(workdir.join(name), content).expect("write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(name)).expect("add path");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");

    let sig = Signature::now("Test Author", "test@example.com").expect("signature");
    let parents: Vec<git2::Commit<'_>> = repo
        .head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, &format!("add {name}"), &tree, &parent_refs)
        .expect("commit")
}

/// A working repository on branch `branch` with one commit
pub fn init_repo_on_branch(dir: &TempDir, branch: &str) -> Repository {
    let repo = Repository::init(dir.path()).expect("init repository");
    repo.set_head(&format!("refs/heads/{branch}"))
        .expect("point HEAD at branch");
    commit_file(&repo, "README.md", "# widget\n");
    repo
}

/// A bare repository to push into
pub fn init_bare(dir: &TempDir) -> Repository {
    Repository::init_bare(dir.path()).expect("init bare repository")
}
