//! Transient notifications shown in the bottom-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use beranda_types::NoticeLevel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 3;
const TOAST_WIDTH: u16 = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    entries: VecDeque<Toast>,
}

impl ToastState {
    /// Queues a toast; the oldest is dropped once more than three are shown.
    pub fn push(&mut self, message: impl Into<String>, level: NoticeLevel, now: Instant) {
        self.entries.push_back(Toast {
            message: message.into(),
            level,
            expires_at: now + TOAST_TTL,
        });
        while self.entries.len() > MAX_TOASTS {
            self.entries.pop_front();
        }
    }

    /// Drops expired toasts. Returns whether anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        self.entries.retain(|toast| toast.expires_at > now);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ToastComponent;

impl Component for ToastComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let width = TOAST_WIDTH.min(rect.width);
        let mut bottom = rect.bottom();
        for toast in app.toasts.iter().rev() {
            let inner_width = width.saturating_sub(4).max(1) as usize;
            let lines = toast.message.lines().map(|line| textwrap::wrap(line, inner_width).len().max(1)).sum::<usize>();
            let height = (lines as u16 + 2).min(rect.height);
            if bottom < rect.y + height {
                break;
            }
            bottom -= height;
            let area = Rect::new(rect.right().saturating_sub(width), bottom, width, height);
            let style = th::notice_style(theme, toast.level);
            let title = match toast.level {
                NoticeLevel::Success => " Berhasil ",
                NoticeLevel::Info => " Info ",
                NoticeLevel::Error => " Gagal ",
            };
            let text: Vec<Line> = toast.message.lines().map(|line| Line::from(Span::raw(line.to_string()))).collect();
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(text)
                    .wrap(Wrap { trim: false })
                    .style(th::panel_style(theme))
                    .block(th::block(theme, Some(title), false).border_style(style)),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let mut toasts = ToastState::default();
        let t0 = Instant::now();
        toasts.push("Tersimpan", NoticeLevel::Success, t0);
        assert!(!toasts.prune(t0 + Duration::from_millis(4_999)));
        assert!(toasts.prune(t0 + TOAST_TTL));
        assert!(toasts.is_empty());
    }

    #[test]
    fn only_the_latest_three_are_kept() {
        let mut toasts = ToastState::default();
        let t0 = Instant::now();
        for n in 0..5 {
            toasts.push(format!("toast {n}"), NoticeLevel::Info, t0);
        }
        let messages: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn newest_toast_is_stacked_first() {
        let mut toasts = ToastState::default();
        let t0 = Instant::now();
        toasts.push("lama", NoticeLevel::Info, t0);
        toasts.push("baru", NoticeLevel::Error, t0);
        let newest = toasts.iter().rev().next().unwrap();
        assert_eq!(newest.message, "baru");
        assert_eq!(newest.level, NoticeLevel::Error);
    }
}
