//! Component system for the Beranda TUI.
//!
//! Components are renderers plus input handlers. Their state lives on
//! [`App`] so that effects, tests, and the runtime can reach it without
//! borrowing the component tree.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, buffer::Buffer, layout::Position, layout::Rect};

use crate::app::App;
use beranda_types::{Effect, Msg, Section};

/// A UI element with its own event handling and rendering.
///
/// Components report side effects as [`Effect`]s instead of performing them,
/// which keeps clipboard access, modal switching and theme persistence in the
/// runtime.
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event while the component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Coordinates are already translated into the
    /// component's coordinate space (page rows for page sections).
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle bracketed-paste text while the component has focus.
    fn handle_paste(&mut self, _app: &mut App, _text: &str) -> Vec<Effect> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

/// A block of the scrolling landing page.
///
/// Sections render into an off-screen page buffer that the main view scrolls
/// through, so they draw into a [`Buffer`] rather than a [`Frame`].
pub(crate) trait PageSection: Component {
    fn section(&self) -> Section;

    /// Rows the section needs at the given page width.
    fn height(&self, app: &App, width: u16) -> u16;

    /// Draws the section and returns the text cursor position, if one of its
    /// fields is being edited.
    fn render_section(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) -> Option<Position>;
}
