// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Stylize as _;

use crate::{PromptConfig, PromptState, PromptStatus, TransformContext};

/// What a piece of text is, so that an [`Emphasize`] implementation can pick a style
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Message,
    DefaultValue,
    Answer,
    Error,
}

/// Text styling capability used by [`DisplayLines::render()`].
pub trait Emphasize {
    fn emphasize(&self, text: &str, role: StyleRole) -> String;
}

/// No styling at all. Handy in tests, and when output isn't a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Emphasize for PlainText {
    fn emphasize(&self, text: &str, _role: StyleRole) -> String { text.to_string() }
}

/// ANSI styling via [`crossterm::style::Stylize`].
///
/// | Role                          | Style |
/// | ----------------------------- | ----- |
/// | [`StyleRole::Message`]        | bold  |
/// | [`StyleRole::DefaultValue`]   | dim   |
/// | [`StyleRole::Answer`]         | cyan  |
/// | [`StyleRole::Error`]          | red   |
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiEmphasis;

impl Emphasize for AnsiEmphasis {
    fn emphasize(&self, text: &str, role: StyleRole) -> String {
        match role {
            StyleRole::Message => text.bold().to_string(),
            StyleRole::DefaultValue => text.dim().to_string(),
            StyleRole::Answer => text.cyan().to_string(),
            StyleRole::Error => text.red().to_string(),
        }
    }
}

/// The two lines the host paints after every event. `hint_line` may itself contain
/// newlines (one per completion candidate, then the error), and it is empty when there
/// is nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLines {
    pub prompt_line: String,
    pub hint_line: String,
}

impl DisplayLines {
    #[must_use]
    pub fn render(
        state: &PromptState,
        config: &PromptConfig,
        prefix: &str,
        styler: &dyn Emphasize,
    ) -> Self {
        let is_final = state.status() == PromptStatus::Done;

        let message = styler.emphasize(&config.message, StyleRole::Message);

        let default_str = match state.default_value() {
            Some(default_value) if !is_final && state.typed_value().is_empty() => styler
                .emphasize(&format!(" ({default_value})"), StyleRole::DefaultValue),
            _ => String::new(),
        };

        let formatted_value = {
            let it = config.transform(state.typed_value(), TransformContext { is_final });
            if is_final {
                styler.emphasize(&it, StyleRole::Answer)
            } else {
                it
            }
        };

        let prompt_line = format!("{prefix} {message}{default_str} {formatted_value}");

        let error = state
            .error_message()
            .map(|msg| styler.emphasize(&format!("> {msg}"), StyleRole::Error));
        let hint_line = [state.suggestion_text().map(ToString::to_string), error]
            .into_iter()
            .flatten()
            .filter(|it| !it.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            prompt_line,
            hint_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ansi_emphasis_wraps_text() {
        let styled = AnsiEmphasis.emphasize("hello", StyleRole::Message);
        assert_ne!(styled, "hello");
        let stripped = strip_ansi_escapes::strip(styled.as_bytes());
        assert_eq!(String::from_utf8(stripped).unwrap(), "hello");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        for role in [
            StyleRole::Message,
            StyleRole::DefaultValue,
            StyleRole::Answer,
            StyleRole::Error,
        ] {
            assert_eq!(PlainText.emphasize("hello", role), "hello");
        }
    }

    #[test]
    fn test_render_fresh_prompt_with_default() {
        let config = PromptConfig::new("Where to?").with_default("./out");
        let state = PromptState::new(&config);
        assert_eq!(
            DisplayLines::render(&state, &config, "?", &PlainText),
            DisplayLines {
                prompt_line: "? Where to? (./out) ".into(),
                hint_line: String::new(),
            }
        );
    }
}
