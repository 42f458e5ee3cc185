//! Input handling for TUI
//!
//! Wraps crossterm key events with the predicates the key handler needs,
//! and provides a small text buffer for the search box and form fields.

use crossterm::event::{KeyCode, KeyModifiers};

/// Key event representation
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Plain key with no modifiers
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Check if this is Ctrl+C
    pub fn is_interrupt(&self) -> bool {
        self.is_ctrl('c')
    }

    /// Check if this is Ctrl plus the given character
    pub fn is_ctrl(&self, c: char) -> bool {
        self.code == KeyCode::Char(c) && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Get the character if this is an unmodified (or shifted) char key
    pub fn char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
            _ => None,
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self.code, KeyCode::Up) || self.char() == Some('k')
    }

    pub fn is_down(&self) -> bool {
        matches!(self.code, KeyCode::Down) || self.char() == Some('j')
    }

    pub fn is_left(&self) -> bool {
        matches!(self.code, KeyCode::Left) || self.char() == Some('h')
    }

    pub fn is_right(&self) -> bool {
        matches!(self.code, KeyCode::Right) || self.char() == Some('l')
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(key: crossterm::event::KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Text input buffer for handling text entry
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The text content
    content: String,
    /// Cursor position (byte offset, always on a char boundary)
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

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Apply an editing key; returns true if the content or cursor changed
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(c) = key.char() {
            self.insert(c);
            return true;
        }
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.content.len(),
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

    #[test]
    fn test_interrupt() {
        assert!(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL).is_interrupt());
        assert!(!KeyEvent::plain(KeyCode::Char('c')).is_interrupt());
    }

    #[test]
    fn test_char_ignores_control_combos() {
        assert_eq!(KeyEvent::plain(KeyCode::Char('a')).char(), Some('a'));
        assert_eq!(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).char(), Some('A'));
        assert_eq!(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL).char(), None);
        assert_eq!(KeyEvent::plain(KeyCode::Enter).char(), None);
    }

    #[test]
    fn test_vim_arrows() {
        assert!(KeyEvent::plain(KeyCode::Char('j')).is_down());
        assert!(KeyEvent::plain(KeyCode::Up).is_up());
        assert!(KeyEvent::plain(KeyCode::Char('h')).is_left());
        assert!(KeyEvent::plain(KeyCode::Right).is_right());
    }

    #[test]
    fn test_text_input_edit() {
        let mut input = TextInput::new();
        for c in "chat".chars() {
            input.handle_key(&KeyEvent::plain(KeyCode::Char(c)));
        }
        input.handle_key(&KeyEvent::plain(KeyCode::Backspace));
        input.handle_key(&KeyEvent::plain(KeyCode::Left));
        input.handle_key(&KeyEvent::plain(KeyCode::Backspace));
        assert_eq!(input.content(), "ca");
        assert_eq!(input.cursor(), 1);
        input.insert('h');
        input.handle_key(&KeyEvent::plain(KeyCode::End));
        input.insert('t');
        assert_eq!(input.content(), "chat");
    }

    #[test]
    fn test_text_input_utf8() {
        let mut input = TextInput::with_content("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.content(), "hllo");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_text_input_unhandled_key() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(&KeyEvent::plain(KeyCode::F(1))));
        assert!(!input.handle_key(&KeyEvent::plain(KeyCode::Tab)));
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_content("abc");
        input.handle_key(&KeyEvent::plain(KeyCode::Home));
        input.delete();
        assert_eq!(input.content(), "bc");
        input.clear();
        assert!(input.is_empty());
    }
}
