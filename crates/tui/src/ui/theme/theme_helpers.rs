use beranda_types::NoticeLevel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, valid: bool, focused: bool) -> Style {
    let ThemeRoles {
        surface_muted, text, error, ..
    } = *theme.roles();
    let mut style = Style::default().bg(surface_muted).fg(text);
    if !valid {
        style = style.fg(error);
    }
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, enabled: bool) -> Style {
    let roles = theme.roles();
    if enabled {
        Style::default()
            .bg(roles.accent_primary)
            .fg(roles.on_accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(roles.surface_muted).fg(roles.text_muted)
    }
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let style = Style::default().fg(theme.roles().accent_secondary);
    if selected { style.bg(theme.roles().selection_bg) } else { style }
}

/// Filled tag, e.g. the "Terpopuler" package badge.
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let roles = theme.roles();
    Style::default().bg(roles.highlight).fg(roles.on_accent).add_modifier(Modifier::BOLD)
}

pub fn notice_style<T: Theme + ?Sized>(theme: &T, level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Success => theme.status_success(),
        NoticeLevel::Info => theme.status_info(),
        NoticeLevel::Error => theme.status_error(),
    }
}

/// Renders a bordered, centered button label.
pub fn render_button<T: Theme + ?Sized>(buf: &mut Buffer, area: Rect, label: &str, primary: bool, focused: bool, theme: &T) {
    let style = if primary {
        button_primary_style(theme, true)
    } else {
        button_secondary_style(theme, focused)
    };
    Paragraph::new(label)
        .centered()
        .style(style)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(focused)),
        )
        .render(area, buf);
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |c: u8| (c as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Move an RGB color toward white by `amount` (0.0..=1.0).
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let a = amount.clamp(0.0, 1.0);
            let lift = |c: u8| (c as f32 + (255.0 - c as f32) * a).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}
