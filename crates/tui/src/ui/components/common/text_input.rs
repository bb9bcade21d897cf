//! UTF-8 safe single-line text field with cursor management.
//!
//! Used by the free-text fields of the billing, contact and order forms. The
//! digit-masked identity field lives in [`super::masked_input`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
    max_chars: Option<usize>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field that refuses input beyond `max_chars` characters.
    pub fn with_limit(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> u16 {
        self.input[..self.cursor].width() as u16
    }

    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Inserts `c` at the cursor. Returns `false` when the field is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.max_chars.is_some_and(|max| self.input.chars().count() >= max) {
            return false;
        }
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Inserts pasted text at the cursor, flattening line breaks to spaces.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            let c = if c == '\n' || c == '\r' { ' ' } else { c };
            if !self.insert_char(c) {
                break;
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.input.drain(self.cursor..self.cursor + next.len_utf8());
        }
    }

    /// Applies an editing key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
            }
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("h🙂llo");
        st.move_home();
        st.move_right();
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right();
        st.backspace();
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
        st.delete();
        assert_eq!(st.input(), "llo");
    }

    #[test]
    fn cursor_column_counts_wide_glyphs() {
        let mut st = TextInputState::new();
        st.set_input("a🙂b");
        assert_eq!(st.cursor_column(), 4);
    }

    #[test]
    fn limit_stops_typing_and_paste() {
        let mut st = TextInputState::with_limit(3);
        st.insert_str("ab\ncd");
        assert_eq!(st.input(), "ab ");
        assert!(!st.insert_char('x'));
    }

    #[test]
    fn control_chords_are_not_consumed() {
        let mut st = TextInputState::new();
        assert!(!st.handle_key(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)));
        assert!(st.handle_key(&KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT)));
        assert_eq!(st.input(), "T");
        assert!(!st.handle_key(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    }
}
