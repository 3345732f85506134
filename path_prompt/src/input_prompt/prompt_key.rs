// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The only distinctions the state machine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Enter,
    Backspace,
    Tab,
    Other,
}

impl From<&KeyEvent> for PromptKey {
    fn from(key_event: &KeyEvent) -> Self {
        match key_event.code {
            KeyCode::Enter => PromptKey::Enter,
            KeyCode::Backspace => PromptKey::Backspace,
            KeyCode::Tab => PromptKey::Tab,
            // Ctrl+M and Ctrl+J are what some terminals send for Enter.
            KeyCode::Char('m' | 'j') if key_event.modifiers == KeyModifiers::CONTROL => {
                PromptKey::Enter
            }
            _ => PromptKey::Other,
        }
    }
}

/// Keys that end the whole session, regardless of what the prompt is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortKey {
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+D.
    EndOfInput,
}

impl AbortKey {
    #[must_use]
    pub fn try_from_key_event(key_event: &KeyEvent) -> Option<Self> {
        if key_event.modifiers != KeyModifiers::CONTROL {
            return None;
        }
        match key_event.code {
            KeyCode::Char('c') => Some(AbortKey::Interrupt),
            KeyCode::Char('d') => Some(AbortKey::EndOfInput),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(KeyCode::Enter, KeyModifiers::NONE, PromptKey::Enter)]
    #[test_case(KeyCode::Char('m'), KeyModifiers::CONTROL, PromptKey::Enter)]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, PromptKey::Backspace)]
    #[test_case(KeyCode::Tab, KeyModifiers::NONE, PromptKey::Tab)]
    #[test_case(KeyCode::Char('m'), KeyModifiers::NONE, PromptKey::Other)]
    #[test_case(KeyCode::Left, KeyModifiers::NONE, PromptKey::Other)]
    fn test_classify(code: KeyCode, modifiers: KeyModifiers, expected: PromptKey) {
        assert_eq!(PromptKey::from(&KeyEvent::new(code, modifiers)), expected);
    }

    #[test]
    fn test_abort_keys() {
        let ctrl = |ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
        assert_eq!(
            AbortKey::try_from_key_event(&ctrl('c')),
            Some(AbortKey::Interrupt)
        );
        assert_eq!(
            AbortKey::try_from_key_event(&ctrl('d')),
            Some(AbortKey::EndOfInput)
        );
        assert_eq!(AbortKey::try_from_key_event(&ctrl('x')), None);
        assert_eq!(
            AbortKey::try_from_key_event(&KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::NONE
            )),
            None
        );
    }
}
