// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CompletionResult, DirectoryLister, DisplayLines, Emphasize, LineBuffer,
            PromptConfig, PromptKey, Validation, complete_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStatus {
    /// Accepting edits.
    #[default]
    Pending,
    /// Waiting for the validator. Every key is dropped.
    Validating,
    /// The answer was accepted. Nothing changes after this.
    Done,
}

/// What [`PromptState::handle_key()`] did with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The prompt isn't [`PromptStatus::Pending`], so the key was dropped.
    Ignored,
    /// The state (and maybe the line buffer) changed. Repaint.
    Handled,
    /// Enter was pressed and the prompt is now [`PromptStatus::Validating`]. The host
    /// must run the validator on this candidate and report back with
    /// [`PromptState::resolve_validation()`].
    Submit(String),
}

/// State for one prompt session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptState {
    status: PromptStatus,
    typed_value: String,
    /// Once cleared, this stays cleared for the rest of the session.
    default_value: Option<String>,
    error_message: Option<String>,
    /// Newline separated completion candidates.
    suggestion_text: Option<String>,
    final_answer: Option<String>,
    /// The answer that is being validated.
    candidate: Option<String>,
}

impl PromptState {
    #[must_use]
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            default_value: config
                .default_value
                .clone()
                .filter(|it| !it.is_empty()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn status(&self) -> PromptStatus { self.status }

    #[must_use]
    pub fn is_loading(&self) -> bool { self.status == PromptStatus::Validating }

    #[must_use]
    pub fn typed_value(&self) -> &str { &self.typed_value }

    #[must_use]
    pub fn default_value(&self) -> Option<&str> { self.default_value.as_deref() }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> { self.error_message.as_deref() }

    #[must_use]
    pub fn suggestion_text(&self) -> Option<&str> { self.suggestion_text.as_deref() }

    /// Only set once the prompt is [`PromptStatus::Done`].
    #[must_use]
    pub fn final_answer(&self) -> Option<&str> { self.final_answer.as_deref() }

    /// React to a key that the host has already applied to `line`.
    pub fn handle_key(
        &mut self,
        key: PromptKey,
        line: &mut dyn LineBuffer,
        config: &PromptConfig,
        lister: &dyn DirectoryLister,
    ) -> KeyOutcome {
        if self.status != PromptStatus::Pending {
            tracing::debug!(message = "handle_key -> dropped", ?key, status = ?self.status);
            return KeyOutcome::Ignored;
        }

        match key {
            PromptKey::Enter => return self.submit(),
            PromptKey::Backspace if self.typed_value.is_empty() => {
                self.default_value = None;
                self.suggestion_text = None;
            }
            PromptKey::Tab if self.typed_value.is_empty() => {
                self.typed_value = self.default_value.take().unwrap_or_default();
                line.write(&self.typed_value);
            }
            PromptKey::Tab => self.complete(line, config, lister),
            PromptKey::Backspace | PromptKey::Other => {
                self.typed_value = line.line().to_string();
                self.error_message = None;
                self.suggestion_text = None;
            }
        }

        KeyOutcome::Handled
    }

    /// Apply the validator's verdict on the submitted candidate. This does nothing
    /// unless the prompt is [`PromptStatus::Validating`].
    pub fn resolve_validation(&mut self, validation: Validation, line: &mut dyn LineBuffer) {
        if self.status != PromptStatus::Validating {
            return;
        }
        let candidate = self.candidate.take().unwrap_or_default();

        match validation.error_message() {
            None => {
                tracing::debug!(message = "resolve_validation -> done", answer = %candidate);
                self.typed_value.clone_from(&candidate);
                self.error_message = None;
                self.final_answer = Some(candidate);
                self.status = PromptStatus::Done;
            }
            Some(error_message) => {
                tracing::debug!(
                    message = "resolve_validation -> rejected",
                    %candidate,
                    %error_message
                );
                // Put the typed value back into the line.
                line.write(&self.typed_value);
                self.error_message = Some(error_message);
                self.status = PromptStatus::Pending;
            }
        }
    }

    #[must_use]
    pub fn render(
        &self,
        config: &PromptConfig,
        prefix: &str,
        styler: &dyn Emphasize,
    ) -> DisplayLines {
        DisplayLines::render(self, config, prefix, styler)
    }

    fn submit(&mut self) -> KeyOutcome {
        let candidate = if self.typed_value.is_empty() {
            self.default_value.clone().unwrap_or_default()
        } else {
            self.typed_value.clone()
        };
        tracing::debug!(message = "submit -> validating", %candidate);

        self.suggestion_text = None;
        self.candidate = Some(candidate.clone());
        self.status = PromptStatus::Validating;

        KeyOutcome::Submit(candidate)
    }

    fn complete(
        &mut self,
        line: &mut dyn LineBuffer,
        config: &PromptConfig,
        lister: &dyn DirectoryLister,
    ) {
        match complete_path(
            &self.typed_value,
            config.directory_only,
            config.completion_order,
            lister,
        ) {
            CompletionResult::NoMatch => {
                line.write(&self.typed_value);
                self.suggestion_text = None;
            }
            CompletionResult::SingleMatch(path) => {
                line.write(&path);
                self.typed_value = path;
                self.suggestion_text = None;
                self.error_message = None;
            }
            CompletionResult::MultipleMatches(names) => {
                line.write(&self.typed_value);
                self.suggestion_text = Some(names.join("\n"));
                self.error_message = None;
            }
        }
    }
}
