// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::PromptKey;

/// The line editing handle that [`crate::PromptState`] reads from and writes to.
pub trait LineBuffer {
    /// Current contents of the line.
    fn line(&self) -> &str;

    /// Replace the contents of the line with `text`, and put the cursor at the end.
    fn write(&mut self, text: &str);

    fn clear_line(&mut self);
}

/// A single line, grapheme cluster aware, text editor. The host feeds every key event
/// to [`LineEditor::apply_key()`] before the state machine sees it.
///
/// The cursor is a grapheme cluster index, in the range `0..=grapheme count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
}

impl LineBuffer for LineEditor {
    fn line(&self) -> &str { &self.buffer }

    fn write(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.grapheme_count();
    }

    fn clear_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

impl LineEditor {
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// The text to the right of the cursor. The host uses this to place the terminal
    /// cursor.
    #[must_use]
    pub fn text_after_cursor(&self) -> &str { &self.buffer[self.byte_offset(self.cursor)..] }

    /// Apply a raw key to the line.
    ///
    /// - Printable characters are inserted at the cursor.
    /// - Tab inserts a `\t`. The state machine always removes it.
    /// - Enter clears the line. The state machine already has the value.
    /// - Backspace, Delete, and cursor movement keys edit the line as expected.
    ///
    /// Anything else is ignored.
    pub fn apply_key(&mut self, key_event: &KeyEvent) {
        match PromptKey::from(key_event) {
            PromptKey::Enter => return self.clear_line(),
            PromptKey::Tab => return self.insert("\t"),
            PromptKey::Backspace => return self.delete_before_cursor(),
            PromptKey::Other => {}
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.grapheme_count(),
            KeyCode::Char(ch) if !ctrl => {
                let mut tmp = [0u8; 4];
                self.insert(ch.encode_utf8(&mut tmp));
            }
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.grapheme_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.grapheme_count(),
            _ => {}
        }
    }

    fn grapheme_count(&self) -> usize { self.buffer.graphemes(true).count() }

    /// Byte offset of the grapheme cluster at `index`, or the length of the buffer when
    /// `index` is past the end.
    fn byte_offset(&self, index: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.buffer.len(), |(offset, _)| offset)
    }

    fn insert(&mut self, text: &str) {
        let offset = self.byte_offset(self.cursor);
        self.buffer.insert_str(offset, text);
        // Inserting can merge with a neighbouring cluster (eg: a combining mark), so
        // recount instead of adding the inserted cluster count.
        let prefix_len = offset + text.len();
        self.cursor = self.buffer[..prefix_len].graphemes(true).count();
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.buffer.replace_range(start..end, "");
        self.cursor -= 1;
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.buffer.replace_range(start..end, "");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(editor: &mut LineEditor, code: KeyCode) {
        editor.apply_key(&KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(editor: &mut LineEditor, text: &str) {
        for ch in text.chars() {
            press(editor, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut editor = LineEditor::default();
        type_text(&mut editor, "repx");
        press(&mut editor, KeyCode::Backspace);
        assert_eq!(editor.line(), "rep");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_cursor_movement_and_mid_line_edit() {
        let mut editor = LineEditor::default();
        type_text(&mut editor, "sc");
        press(&mut editor, KeyCode::Left);
        type_text(&mut editor, "r");
        assert_eq!(editor.line(), "src");
        assert_eq!(editor.text_after_cursor(), "c");

        press(&mut editor, KeyCode::Home);
        press(&mut editor, KeyCode::Delete);
        assert_eq!(editor.line(), "rc");

        editor.apply_key(&KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert_eq!(editor.cursor(), 2);
        editor.apply_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(editor.cursor(), 0);
        assert_eq!(editor.line(), "rc");
    }

    #[test]
    fn test_grapheme_clusters_are_deleted_whole() {
        let mut editor = LineEditor::default();
        editor.write("a👍🏽");
        assert_eq!(editor.cursor(), 2);
        press(&mut editor, KeyCode::Backspace);
        assert_eq!(editor.line(), "a");
    }

    #[test]
    fn test_tab_inserts_and_enter_clears() {
        let mut editor = LineEditor::default();
        type_text(&mut editor, "rep");
        press(&mut editor, KeyCode::Tab);
        assert_eq!(editor.line(), "rep\t");
        press(&mut editor, KeyCode::Enter);
        assert_eq!(editor.line(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_write_replaces_contents() {
        let mut editor = LineEditor::default();
        type_text(&mut editor, "rep\t");
        editor.write("./report.csv");
        assert_eq!(editor.line(), "./report.csv");
        assert_eq!(editor.text_after_cursor(), "");
    }

    #[test]
    fn test_edges_are_no_ops() {
        let mut editor = LineEditor::default();
        press(&mut editor, KeyCode::Backspace);
        press(&mut editor, KeyCode::Delete);
        press(&mut editor, KeyCode::Left);
        press(&mut editor, KeyCode::Right);
        assert_eq!(editor, LineEditor::default());
    }
}
