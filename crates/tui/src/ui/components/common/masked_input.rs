//! Digit-only input that displays its content in space-separated groups,
//! e.g. `3201 2345 6789 0123` for a 16-digit identity number.
//!
//! The display text is always a pure function of the stored digits. Edits
//! arrive either as single keystrokes (filtered through [`MaskedDigitInput::on_key_entry`])
//! or as whole replacement texts from paste/IME/autofill, which are
//! sanitized by [`MaskedDigitInput::on_text_changed`]. Caret positions are
//! counted in characters, not bytes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Default digit capacity (Indonesian KTP number).
pub const DEFAULT_MAX_DIGITS: usize = 16;
/// Default group width.
pub const DEFAULT_GROUP_SIZE: usize = 4;

const SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("max_digits must be greater than zero")]
    ZeroMaxDigits,
    #[error("group_size must be greater than zero")]
    ZeroGroupSize,
}

/// Non-character keys that are never filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Backspace,
    Delete,
    Tab,
    Escape,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// A single keystroke as seen by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEntry {
    Char { ch: char, ctrl: bool },
    Control(ControlKey),
}

impl KeyEntry {
    pub fn plain(ch: char) -> Self {
        KeyEntry::Char { ch, ctrl: false }
    }

    pub fn ctrl(ch: char) -> Self {
        KeyEntry::Char { ch, ctrl: true }
    }

    /// Maps a terminal key event; keys with no counterpart yield `None`.
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let entry = match key.code {
            KeyCode::Char(ch) => KeyEntry::Char { ch, ctrl },
            KeyCode::Backspace => KeyEntry::Control(ControlKey::Backspace),
            KeyCode::Delete => KeyEntry::Control(ControlKey::Delete),
            KeyCode::Tab | KeyCode::BackTab => KeyEntry::Control(ControlKey::Tab),
            KeyCode::Esc => KeyEntry::Control(ControlKey::Escape),
            KeyCode::Enter => KeyEntry::Control(ControlKey::Enter),
            KeyCode::Left => KeyEntry::Control(ControlKey::Left),
            KeyCode::Right => KeyEntry::Control(ControlKey::Right),
            KeyCode::Up => KeyEntry::Control(ControlKey::Up),
            KeyCode::Down => KeyEntry::Control(ControlKey::Down),
            KeyCode::Home => KeyEntry::Control(ControlKey::Home),
            KeyCode::End => KeyEntry::Control(ControlKey::End),
            _ => return None,
        };
        Some(entry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedDigitInput {
    max_digits: usize,
    group_size: usize,
    display: String,
    /// Caret as a character offset into `display`.
    caret: usize,
}

impl Default for MaskedDigitInput {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            group_size: DEFAULT_GROUP_SIZE,
            display: String::new(),
            caret: 0,
        }
    }
}

impl MaskedDigitInput {
    pub fn new(max_digits: usize, group_size: usize) -> Result<Self, MaskError> {
        if max_digits == 0 {
            return Err(MaskError::ZeroMaxDigits);
        }
        if group_size == 0 {
            return Err(MaskError::ZeroGroupSize);
        }
        Ok(Self {
            max_digits,
            group_size,
            ..Self::default()
        })
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Whether a keystroke may proceed. Digits, control keys and the
    /// clipboard/select-all shortcuts pass; everything else is rejected.
    pub fn on_key_entry(&self, key: KeyEntry) -> bool {
        match key {
            KeyEntry::Control(_) => true,
            KeyEntry::Char { ch, ctrl: true } => matches!(ch.to_ascii_lowercase(), 'a' | 'c' | 'v' | 'x'),
            KeyEntry::Char { ch, ctrl: false } => ch.is_ascii_digit(),
        }
    }

    /// Accepts a wholesale replacement of the field text with the caret at
    /// character offset `caret`. Non-digits are dropped, the result is
    /// truncated to capacity and regrouped, and the caret is placed after the
    /// same number of digits it originally followed.
    pub fn on_text_changed(&mut self, raw: &str, caret: usize) {
        let digits_left_of_caret = raw.chars().take(caret).filter(char::is_ascii_digit).count();
        let digits = self.sanitize(raw);
        self.commit(&digits, digits_left_of_caret);
    }

    /// Replaces the whole content with the digits of `pasted`.
    pub fn on_paste(&mut self, pasted: &str) {
        let digits = self.sanitize(pasted);
        let caret_digits = digits.len();
        self.commit(&digits, caret_digits);
    }

    /// Types `ch` at the caret. Returns `false` when the key is filtered out.
    /// A full field keeps its first `max_digits` digits, so typing at the end
    /// is a no-op and typing mid-field pushes the last digit out.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.on_key_entry(KeyEntry::plain(ch)) {
            return false;
        }
        let mut digits = self.current_digits();
        let at = self.digits_before_caret();
        digits.insert(at, ch);
        let digits = self.sanitize(&digits);
        self.commit(&digits, at + 1);
        true
    }

    /// Removes the digit before the caret, stepping over a separator.
    pub fn backspace(&mut self) {
        let at = self.digits_before_caret();
        if at == 0 {
            self.caret = 0;
            return;
        }
        let mut digits = self.current_digits();
        digits.remove(at - 1);
        self.commit(&digits, at - 1);
    }

    /// Removes the digit after the caret, stepping over a separator.
    pub fn delete(&mut self) {
        let at = self.digits_before_caret();
        let mut digits = self.current_digits();
        if at >= digits.len() {
            return;
        }
        digits.remove(at);
        self.commit(&digits, at);
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.display_len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.display_len();
    }

    pub fn clear(&mut self) {
        self.display.clear();
        self.caret = 0;
    }

    /// Digits only, without separators.
    pub fn current_digits(&self) -> String {
        self.display.chars().filter(char::is_ascii_digit).collect()
    }

    pub fn current_display_text(&self) -> &str {
        &self.display
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// Whether the field holds exactly `max_digits` digits.
    pub fn is_complete(&self) -> bool {
        self.current_digits().len() == self.max_digits
    }

    /// Groups `digits` with single spaces. No leading, trailing or doubled
    /// separators are produced.
    pub fn format(digits: &str, group_size: usize) -> String {
        let group_size = group_size.max(1);
        let mut display = String::with_capacity(digits.len() + digits.len() / group_size);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && index % group_size == 0 {
                display.push(SEPARATOR);
            }
            display.push(ch);
        }
        display
    }

    fn sanitize(&self, raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).take(self.max_digits).collect()
    }

    fn commit(&mut self, digits: &str, caret_digits: usize) {
        self.display = Self::format(digits, self.group_size);
        self.caret = self.caret_after(caret_digits.min(digits.len()));
    }

    /// Display offset right after the `n`th digit.
    fn caret_after(&self, n: usize) -> usize {
        if n == 0 { 0 } else { n + (n - 1) / self.group_size }
    }

    fn digits_before_caret(&self) -> usize {
        self.display.chars().take(self.caret).filter(char::is_ascii_digit).count()
    }

    fn display_len(&self) -> usize {
        self.display.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(digits: &str) -> MaskedDigitInput {
        let mut input = MaskedDigitInput::default();
        input.on_paste(digits);
        input
    }

    #[test]
    fn rejects_zero_sizes() {
        assert_eq!(MaskedDigitInput::new(0, 4).unwrap_err(), MaskError::ZeroMaxDigits);
        assert_eq!(MaskedDigitInput::new(16, 0).unwrap_err(), MaskError::ZeroGroupSize);
    }

    #[test]
    fn key_filter_allows_digits_controls_and_clipboard_shortcuts() {
        let input = MaskedDigitInput::default();
        assert!(input.on_key_entry(KeyEntry::plain('7')));
        assert!(!input.on_key_entry(KeyEntry::plain('a')));
        assert!(!input.on_key_entry(KeyEntry::plain(' ')));
        assert!(!input.on_key_entry(KeyEntry::plain('٣')));
        assert!(input.on_key_entry(KeyEntry::Control(ControlKey::Backspace)));
        assert!(input.on_key_entry(KeyEntry::Control(ControlKey::Tab)));
        for ch in ['a', 'C', 'v', 'x'] {
            assert!(input.on_key_entry(KeyEntry::ctrl(ch)), "ctrl+{ch}");
        }
        assert!(!input.on_key_entry(KeyEntry::ctrl('z')));
    }

    #[test]
    fn key_events_map_modifiers() {
        let event = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert_eq!(KeyEntry::from_key_event(&event), Some(KeyEntry::ctrl('v')));
        let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(KeyEntry::from_key_event(&event), None);
    }

    #[test]
    fn truncates_and_groups() {
        let mut input = MaskedDigitInput::default();
        input.on_text_changed("12345678901234567", 17);
        assert_eq!(input.current_display_text(), "1234 5678 9012 3456");
        assert_eq!(input.current_digits(), "1234567890123456");
        assert!(input.is_complete());
        assert_eq!(input.caret(), 19);
    }

    #[test]
    fn paste_strips_noise() {
        let mut input = filled("9999");
        input.on_paste("abc123-456 def");
        assert_eq!(input.current_display_text(), "1234 56");
        assert_eq!(input.current_digits(), "123456");
        assert_eq!(input.caret(), 7);
    }

    #[test]
    fn format_never_emits_stray_separators() {
        assert_eq!(MaskedDigitInput::format("", 4), "");
        assert_eq!(MaskedDigitInput::format("1234", 4), "1234");
        assert_eq!(MaskedDigitInput::format("12345", 4), "1234 5");
        assert_eq!(MaskedDigitInput::format("1234567", 3), "123 456 7");
    }

    #[test]
    fn caret_follows_the_same_digit_after_regrouping() {
        let mut input = MaskedDigitInput::default();
        // User typed '9' inside the first group: "12934 56", caret after the 9.
        input.on_text_changed("12934 56", 3);
        assert_eq!(input.current_display_text(), "1293 456");
        assert_eq!(input.caret(), 3);

        // Caret right after the fourth digit stays before the separator.
        input.on_text_changed("1234x5678", 5);
        assert_eq!(input.current_display_text(), "1234 5678");
        assert_eq!(input.caret(), 4);

        input.on_text_changed("12345", 5);
        assert_eq!(input.caret(), 6);

        input.on_text_changed("abc", 2);
        assert_eq!(input.caret(), 0);
    }

    #[test]
    fn caret_is_clamped_to_truncated_content() {
        let mut input = MaskedDigitInput::new(6, 3).unwrap();
        input.on_text_changed("123456789", 9);
        assert_eq!(input.current_display_text(), "123 456");
        assert_eq!(input.caret(), 7);
    }

    #[test]
    fn typing_regroups_and_stops_at_capacity() {
        let mut input = MaskedDigitInput::new(6, 3).unwrap();
        for ch in "12a3456789".chars() {
            input.insert_char(ch);
        }
        assert_eq!(input.current_display_text(), "123 456");
        assert!(input.insert_char('0'));
        assert_eq!(input.current_display_text(), "123 456");
        assert_eq!(input.caret(), 7);
    }

    #[test]
    fn typing_into_a_full_field_drops_the_last_digit() {
        let mut input = filled("1234567890123456");
        input.move_home();
        assert!(input.insert_char('9'));
        assert_eq!(input.current_display_text(), "9123 4567 8901 2345");
        assert_eq!(input.caret(), 1);
        assert!(input.is_complete());
    }

    #[test]
    fn typing_in_the_middle_shifts_later_digits() {
        let mut input = filled("12345");
        input.move_home();
        input.move_right();
        assert!(input.insert_char('0'));
        assert_eq!(input.current_display_text(), "1023 45");
        assert_eq!(input.caret(), 2);
    }

    #[test]
    fn backspace_after_separator_removes_previous_digit() {
        let mut input = filled("12345678");
        input.move_home();
        for _ in 0..5 {
            input.move_right();
        }
        // Caret sits just after the separator: "1234 |5678".
        input.backspace();
        assert_eq!(input.current_display_text(), "1235 678");
        assert_eq!(input.caret(), 3);
    }

    #[test]
    fn backspace_and_delete_at_edges_are_noops() {
        let mut input = filled("123");
        input.delete();
        assert_eq!(input.current_display_text(), "123");
        input.move_home();
        input.backspace();
        assert_eq!(input.current_display_text(), "123");
        input.delete();
        assert_eq!(input.current_display_text(), "23");
        assert_eq!(input.caret(), 0);
    }

    #[test]
    fn display_is_always_a_pure_function_of_digits() {
        let mut input = MaskedDigitInput::default();
        for raw in ["", "1", "12 34 56", "x9y8z7", "0000-0000-0000-0000-0000", "  4 4 4 4 4 "] {
            input.on_text_changed(raw, raw.chars().count());
            let digits = input.current_digits();
            assert!(digits.len() <= 16);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(input.current_display_text(), MaskedDigitInput::format(&digits, 4));
        }
    }
}
