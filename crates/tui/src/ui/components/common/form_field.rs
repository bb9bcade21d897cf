//! One-row labeled form fields shared by the billing, contact and order
//! forms.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{Theme, theme_helpers as th};

/// Column where field values start.
pub const LABEL_WIDTH: u16 = 16;

/// What a single field row shows.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub required: bool,
    /// Display column of the caret inside `value`.
    pub cursor_column: u16,
}

/// Draws `label  value` and returns the caret position when focused.
/// Values wider than the box scroll so the caret stays visible.
pub fn render_text_field<T: Theme + ?Sized>(
    buf: &mut Buffer,
    area: Rect,
    field: &FieldView<'_>,
    focused: bool,
    theme: &T,
) -> Option<Position> {
    let value_area = render_label(buf, area, field.label, field.required, focused, theme);
    let style = th::input_style(theme, true, focused);
    buf.set_style(value_area, style);

    let width = value_area.width.saturating_sub(1);
    let skip = field.cursor_column.saturating_sub(width);
    let (text, text_style) = if field.value.is_empty() {
        (field.placeholder.to_string(), style.patch(theme.text_muted_style()))
    } else {
        (skip_columns(field.value, skip), style)
    };
    Paragraph::new(Line::from(Span::styled(text, text_style))).render(value_area, buf);

    focused.then(|| Position::new(value_area.x + field.cursor_column - skip, value_area.y))
}

/// Draws `label  ‹ value ›` for fields that cycle through fixed options.
pub fn render_choice_field<T: Theme + ?Sized>(buf: &mut Buffer, area: Rect, label: &str, value: &str, focused: bool, theme: &T) {
    let value_area = render_label(buf, area, label, false, focused, theme);
    let style = th::input_style(theme, true, focused);
    buf.set_style(value_area, style);
    Paragraph::new(Line::from(vec![
        Span::styled("‹ ", theme.accent_primary_style()),
        Span::styled(value.to_string(), style),
        Span::styled(" ›", theme.accent_primary_style()),
    ]))
    .render(value_area, buf);
}

fn render_label<T: Theme + ?Sized>(buf: &mut Buffer, area: Rect, label: &str, required: bool, focused: bool, theme: &T) -> Rect {
    let label_style = if focused {
        theme.accent_primary_style().add_modifier(Modifier::BOLD)
    } else {
        theme.text_secondary_style()
    };
    let mut spans = vec![Span::styled(label.to_string(), label_style)];
    if required {
        spans.push(Span::styled("*", theme.status_error()));
    }
    let label_width = LABEL_WIDTH.min(area.width);
    Paragraph::new(Line::from(spans)).render(Rect { width: label_width, ..area }, buf);
    Rect {
        x: area.x + label_width,
        width: area.width.saturating_sub(label_width),
        height: 1,
        ..area
    }
}

fn skip_columns(value: &str, columns: u16) -> String {
    let mut skipped = 0u16;
    value
        .chars()
        .skip_while(|c| {
            if skipped >= columns {
                return false;
            }
            skipped += c.width().unwrap_or(0) as u16;
            true
        })
        .collect()
}

/// Steps through `all` from `current`, wrapping at both ends.
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: isize) -> T {
    let len = all.len() as isize;
    let index = all.iter().position(|item| *item == current).unwrap_or(0) as isize;
    all[(index + delta).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::LightTheme;

    #[test]
    fn cycle_wraps() {
        let all = [1, 2, 3];
        assert_eq!(cycle(&all, 3, 1), 1);
        assert_eq!(cycle(&all, 1, -1), 3);
        assert_eq!(cycle(&all, 2, 0), 2);
    }

    #[test]
    fn long_values_scroll_to_keep_caret_visible() {
        let theme = LightTheme::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 26, 1));
        let field = FieldView {
            label: "Nama",
            value: "abcdefghijklmnop",
            placeholder: "",
            required: true,
            cursor_column: 16,
        };
        let area = buf.area;
        let caret = render_text_field(&mut buf, area, &field, true, &theme);
        // 10 value columns, 9 usable before the caret column.
        assert_eq!(caret, Some(Position::new(25, 0)));
        assert_eq!(buf.cell((16, 0)).map(|c| c.symbol()), Some("h"));
        assert_eq!(buf.cell((4, 0)).map(|c| c.symbol()), Some("*"));
    }

    #[test]
    fn unfocused_field_has_no_caret() {
        let theme = LightTheme::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        let field = FieldView {
            label: "Email",
            value: "",
            placeholder: "nama@email.com",
            required: false,
            cursor_column: 0,
        };
        let area = buf.area;
        assert_eq!(render_text_field(&mut buf, area, &field, false, &theme), None);
        assert_eq!(buf.cell((16, 0)).map(|c| c.symbol()), Some("n"));
    }
}
