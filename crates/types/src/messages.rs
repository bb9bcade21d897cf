//! Messages and side effects exchanged between the runtime and components.

use crate::{Section, ThemeMode};

/// Application-level messages delivered to components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic runtime tick; drives timers such as carousel auto-advance.
    Tick,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// The testimonial carousel moved to a new slide.
    SlideChanged(usize),
    /// The active theme changed.
    ThemeChanged(ThemeMode),
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Overlays that can sit above the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Order form for the package with the given id.
    Order(String),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Place text on the system clipboard.
    CopyToClipboard(String),
    /// Show a toast notification.
    Notify { message: String, level: NoticeLevel },
    ShowModal(Modal),
    CloseModal,
    /// Scroll the page so the section is at the top of the viewport.
    ScrollTo(Section),
    ScrollToTop,
    ToggleTheme,
}
