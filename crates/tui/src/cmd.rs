//! # Effect Execution Layer
//!
//! Components describe what should happen as [`Effect`]s. This module is the
//! boundary where those effects touch the world:
//! - state-only effects (scrolling, modals, toasts) are applied to [`App`]
//!   directly by [`from_effects`];
//! - effects that reach outside the process (clipboard, persisted theme) are
//!   turned into [`Cmd`]s and executed by [`run_cmds`].
//!
//! Keeping the translation separate from execution lets tests assert on the
//! commands without a clipboard or a preference file.

use beranda_types::{Effect, Modal, NoticeLevel};
use tracing::{debug, info, warn};

use crate::app::{App, Focus};
use crate::ui::components::order::OrderFormState;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
    /// Flip the theme and persist the choice.
    ToggleTheme,
}

/// Applies state-only effects to `app` and returns the commands that still
/// need to run.
pub fn from_effects(app: &mut App, effects: Vec<Effect>) -> Vec<Cmd> {
    let mut commands = Vec::new();
    for effect in effects {
        match effect {
            Effect::CopyToClipboard(text) => commands.push(Cmd::ClipboardSet(text)),
            Effect::ToggleTheme => commands.push(Cmd::ToggleTheme),
            Effect::Notify { message, level } => app.notify(message, level),
            Effect::ScrollTo(section) => {
                app.nav.close_menu();
                app.nav.scroll_to_section(section);
                app.focus = Focus::for_section(section);
                app.mark_dirty();
            }
            Effect::ScrollToTop => {
                app.nav.scroll.scroll_to_top();
                app.focus = Focus::Page;
                app.mark_dirty();
            }
            Effect::ShowModal(Modal::Order(package_id)) => open_order(app, &package_id),
            Effect::CloseModal => {
                if app.order.take().is_some() {
                    debug!("order form closed");
                }
                app.mark_dirty();
            }
        }
    }
    commands
}

fn open_order(app: &mut App, package_id: &str) {
    match OrderFormState::open(package_id) {
        Some(form) => {
            debug!(package_id, "order form opened");
            app.nav.close_menu();
            app.order = Some(form);
            app.mark_dirty();
        }
        None => {
            warn!(package_id, "order requested for unknown package");
            app.notify("Paket tidak ditemukan.", NoticeLevel::Error);
        }
    }
}

/// Executes commands produced by [`from_effects`].
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) {
    for command in commands {
        match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
            Cmd::ToggleTheme => {
                let mode = app.theme.toggle();
                info!(%mode, "theme toggled");
                app.mark_dirty();
            }
        }
    }
}

/// Writes the chat link to the clipboard. The link is also shown in the
/// success toast, so a missing clipboard only earns an extra hint.
fn execute_clipboard_set(app: &mut App, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => debug!("chat link copied to clipboard"),
        Err(error) => {
            warn!(%error, "clipboard unavailable");
            app.notify("Clipboard tidak tersedia; salin tautan dari notifikasi.", NoticeLevel::Info);
        }
    }
}
