use beranda_tui::{ControlKey, KeyEntry, MaskError, MaskedDigitInput};

#[test]
fn typing_past_capacity_truncates_and_groups() {
    let mut input = MaskedDigitInput::default();
    for ch in "12345678901234567".chars() {
        input.insert_char(ch);
    }
    assert_eq!(input.current_display_text(), "1234 5678 9012 3456");
    assert_eq!(input.current_digits(), "1234567890123456");
    assert!(input.is_complete());
}

#[test]
fn paste_keeps_only_digits() {
    let mut input = MaskedDigitInput::default();
    input.on_paste("abc123-456 def");
    assert_eq!(input.current_display_text(), "1234 56");
    assert_eq!(input.caret(), input.current_display_text().chars().count());
}

#[test]
fn key_filter_admits_digits_controls_and_clipboard_shortcuts() {
    let input = MaskedDigitInput::default();
    assert!(input.on_key_entry(KeyEntry::plain('7')));
    assert!(!input.on_key_entry(KeyEntry::plain('a')));
    assert!(!input.on_key_entry(KeyEntry::plain(' ')));
    assert!(input.on_key_entry(KeyEntry::ctrl('v')));
    assert!(input.on_key_entry(KeyEntry::ctrl('A')));
    assert!(!input.on_key_entry(KeyEntry::ctrl('z')));
    assert!(input.on_key_entry(KeyEntry::Control(ControlKey::Backspace)));
}

#[test]
fn rejected_letter_leaves_content_untouched() {
    let mut input = MaskedDigitInput::default();
    input.on_paste("1234");
    assert!(!input.insert_char('x'));
    assert_eq!(input.current_display_text(), "1234");
}

#[test]
fn edit_in_the_middle_keeps_caret_after_same_digit() {
    let mut input = MaskedDigitInput::default();
    // User typed "9" after "12345" in "1234 5678".
    input.on_text_changed("1234 59678", 7);
    assert_eq!(input.current_display_text(), "1234 5967 8");
    assert_eq!(input.caret(), 7);
}

#[test]
fn custom_grouping() {
    let mut input = MaskedDigitInput::new(6, 3).unwrap();
    input.on_paste("+62 812 345 678");
    assert_eq!(input.current_display_text(), "628 123");
    assert_eq!(MaskedDigitInput::format("12345", 2), "12 34 5");
    assert_eq!(MaskedDigitInput::new(0, 4).unwrap_err(), MaskError::ZeroMaxDigits);
    assert_eq!(MaskedDigitInput::new(4, 0).unwrap_err(), MaskError::ZeroGroupSize);
}
