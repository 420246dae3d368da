//! Terminal forms built on dialoguer

use crate::commit::{CommitMessageDraft, suggest_commit_type};
use crate::error::{Error, Result};
use crate::prompt::{Prompter, PullRequestFields};
use crate::types::{PushDestination, RepoRef};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Confirm, Editor, Input, Select};

/// Tab-completion over the suggested commit types
struct CommitTypeCompletion;

impl Completion for CommitTypeCompletion {
    fn get(&self, input: &str) -> Option<String> {
        suggest_commit_type(input).map(ToString::to_string)
    }
}

/// Prompter that reads answers from the terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    /// Create a prompter with the colorful theme
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    /// Multiline text, edited in `$EDITOR`
    ///
    /// Closing the editor without saving yields an empty string.
    fn text(&self, prompt: &str) -> Result<String> {
        let edit = Confirm::with_theme(&self.theme)
            .with_prompt(format!("{prompt} (open editor?)"))
            .default(true)
            .interact_opt()?
            .ok_or_else(|| Error::Prompt(prompt.to_string()))?;

        if !edit {
            return Ok(String::new());
        }

        let text = Editor::new().extension(".md").edit("")?.unwrap_or_default();
        Ok(text.trim_end().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn choose_destination(&self, repo: &RepoRef) -> Result<PushDestination> {
        let labels: Vec<String> = PushDestination::MENU
            .iter()
            .map(|d| d.label(repo))
            .collect();

        let index = Select::with_theme(&self.theme)
            .with_prompt("Where should we push the current branch?")
            .items(&labels)
            .default(0)
            .interact_opt()?
            .ok_or_else(|| Error::Prompt("push destination".to_string()))?;

        Ok(PushDestination::MENU[index])
    }

    fn pull_request_fields(&self) -> Result<PullRequestFields> {
        let title = self.input("PR Title")?;
        let body = self.text("PR Body")?;
        Ok(PullRequestFields { title, body })
    }

    fn commit_fields(&self) -> Result<CommitMessageDraft> {
        let completion = CommitTypeCompletion;
        let kind = Input::<String>::with_theme(&self.theme)
            .with_prompt("Type")
            .allow_empty(true)
            .completion_with(&completion)
            .interact_text()?;
        let scope = self.input("Scope")?;

        let summary = self.input("Summary")?;
        let description = self.text("Description")?;

        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Commit changes?")
            .default(false)
            .interact_opt()?
            .ok_or_else(|| Error::Prompt("commit confirmation".to_string()))?;

        Ok(CommitMessageDraft {
            kind,
            scope,
            summary,
            description,
            confirmed,
        })
    }
}
