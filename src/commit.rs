//! Conventional commit message composition
//!
//! The message is only printed; nothing is written to the repository.

/// Commit types offered as suggestions in the type field
pub const COMMIT_TYPES: [&str; 8] = [
    "fix", "feat", "docs", "style", "refactor", "test", "chore", "revert",
];

/// Fields collected by the commit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessageDraft {
    /// Commit type (`feat`, `fix`, ...)
    pub kind: String,
    /// Scope inside the parentheses
    pub scope: String,
    /// One-line summary
    pub summary: String,
    /// Longer description after the blank line
    pub description: String,
    /// Whether the user confirmed the message
    pub confirmed: bool,
}

impl CommitMessageDraft {
    /// Render as `type(scope): summary\n\ndescription`
    ///
    /// Fields are used verbatim, so an empty scope renders as `type():`.
    pub fn format(&self) -> String {
        format!(
            "{}({}): {}\n\n{}",
            self.kind, self.scope, self.summary, self.description
        )
    }

    /// The formatted message, or `None` when the user declined
    pub fn message(&self) -> Option<String> {
        self.confirmed.then(|| self.format())
    }
}

/// First suggested commit type starting with `input`
///
/// Returns `None` for empty input or when nothing matches.
pub fn suggest_commit_type(input: &str) -> Option<&'static str> {
    if input.is_empty() {
        return None;
    }
    COMMIT_TYPES
        .iter()
        .copied()
        .find(|kind| kind.starts_with(input))
}
