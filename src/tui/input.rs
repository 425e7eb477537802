//! Input handling for the TUI
//!
//! Key classification helpers and the text buffer behind the tool input
//! widgets (file path, single-line and multi-line).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Classification helpers over crossterm key events
pub trait KeyExt {
    /// q or Ctrl+C
    fn is_quit(&self) -> bool;
    /// Ctrl+<c>
    fn is_ctrl(&self, c: char) -> bool;
    /// Plain character with no Ctrl/Alt held
    fn plain_char(&self) -> Option<char>;
}

impl KeyExt for KeyEvent {
    fn is_quit(&self) -> bool {
        self.plain_char() == Some('q') || self.is_ctrl('c')
    }

    fn is_ctrl(&self, c: char) -> bool {
        self.code == KeyCode::Char(c) && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn plain_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
            _ => None,
        }
    }
}

/// Text input buffer with a byte-offset cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            cursor: content.len(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert('\n');
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_char_boundary(self.cursor);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor = self.next_char_boundary(self.cursor);
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.content[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.content[self.cursor..]
            .find('\n')
            .map_or(self.content.len(), |i| self.cursor + i);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content and clear
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// (line, column) of the cursor, both zero-based, column in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.content[..self.cursor];
        let line = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
        (line, col)
    }

    /// Apply an editing key. Returns true if the buffer handled it.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(c) = key.plain_char() {
            self.insert(c);
            return true;
        }
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos.saturating_sub(1);
        while idx > 0 && !self.content.is_char_boundary(idx) {
            idx -= 1;
        }
        idx
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos + 1;
        while idx < self.content.len() && !self.content.is_char_boundary(idx) {
            idx += 1;
        }
        idx.min(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_is_quit() {
        assert!(key(KeyCode::Char('q')).is_quit());
        assert!(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL).is_quit());
        assert!(!key(KeyCode::Char('a')).is_quit());
    }

    #[test]
    fn test_key_plain_char() {
        assert_eq!(key(KeyCode::Char('x')).plain_char(), Some('x'));
        assert_eq!(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT).plain_char(), Some('X'));
        assert_eq!(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL).plain_char(), None);
        assert_eq!(key(KeyCode::Enter).plain_char(), None);
    }

    #[test]
    fn test_key_is_ctrl() {
        assert!(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL).is_ctrl('d'));
        assert!(!key(KeyCode::Char('d')).is_ctrl('d'));
    }

    #[test]
    fn test_text_input_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.content(), "hi");
        input.backspace();
        assert_eq!(input.content(), "h");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_text_input_multibyte() {
        let mut input = TextInput::with_content("né");
        input.move_left();
        assert_eq!(input.cursor(), 1);
        input.move_right();
        assert_eq!(input.cursor(), 3);
        input.backspace();
        assert_eq!(input.content(), "n");
    }

    #[test]
    fn test_text_input_delete() {
        let mut input = TextInput::with_content("hello");
        input.move_home();
        input.delete();
        assert_eq!(input.content(), "ello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_home_end_are_line_local() {
        let mut input = TextInput::with_content("first\nsecond");
        input.move_home();
        assert_eq!(input.cursor(), 6);
        input.move_end();
        assert_eq!(input.cursor(), 12);
    }

    #[test]
    fn test_cursor_position() {
        let mut input = TextInput::new();
        assert_eq!(input.cursor_position(), (0, 0));
        for c in "ab".chars() {
            input.insert(c);
        }
        input.insert_newline();
        input.insert('c');
        assert_eq!(input.content(), "ab\nc");
        assert_eq!(input.cursor_position(), (1, 1));
    }

    #[test]
    fn test_take_clears() {
        let mut input = TextInput::with_content("hello");
        assert_eq!(input.take(), "hello");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(&key(KeyCode::Char('a'))));
        assert!(input.handle_key(&key(KeyCode::Left)));
        assert_eq!(input.cursor(), 0);
        assert!(!input.handle_key(&key(KeyCode::F(1))));
        assert!(!input.handle_key(&KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert_eq!(input.content(), "a");
    }
}
