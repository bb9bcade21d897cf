//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture,
//!   bracketed paste).
//! - Drive a single event loop over terminal input, application messages,
//!   and a periodic tick.
//! - Route input to `MainView` and execute the returned `Effect`s through
//!   `cmd`.
//! - Render only when `App` marks itself dirty.
//!
//! Message Sources
//! - A dedicated input task blocks on `crossterm::event::read()` and forwards
//!   events over a channel.
//! - The carousel and theme observers push `Msg::SlideChanged` and
//!   `Msg::ThemeChanged` into an unbounded channel, so state changes made
//!   anywhere reach the loop as ordinary messages.
//! - Ticking: a fast interval while the carousel auto-advances or a toast
//!   is showing, a slow one otherwise.
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use beranda_types::{Effect, Msg};
use beranda_util::PreferenceStore;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::{App, AppConfig};
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<Stdout>;

const FAST_TICK: Duration = Duration::from_millis(200);
const IDLE_TICK: Duration = Duration::from_millis(1000);

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Mouse moves are throttled to one per 16 ms; hover tracking does not need
/// more and it keeps the channel from flooding.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal input");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Ctrl+C always quits; `q` quits unless it would be typed into a field.
fn is_quit_event(app: &App, event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => key.modifiers.is_empty() && !app.is_editing_text() && !app.nav.is_menu_open(),
        _ => false,
    }
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Key(_) => Vec::new(),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Paste(text) => main_view.handle_paste(app, &text),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost => Vec::new(),
    }
}

/// Entry point for the TUI runtime: builds the app, sets up the terminal,
/// runs the event loop, and restores the terminal on every exit path.
pub async fn run_app(config: AppConfig, preferences: Arc<dyn PreferenceStore>) -> Result<()> {
    let (msg_sender, msg_receiver) = mpsc::unbounded_channel::<Msg>();

    let slide_sender = msg_sender.clone();
    let mut app = App::new(config, preferences, move |index| {
        let _ = slide_sender.send(Msg::SlideChanged(index));
    })?;
    let theme_sender = msg_sender;
    app.theme.subscribe(move |mode| {
        let _ = theme_sender.send(Msg::ThemeChanged(mode));
    });
    info!(slides = app.carousel.slide_count(), theme = %app.theme.mode(), "starting TUI");

    let mut terminal = setup_terminal().context("failed to initialize the terminal")?;
    let outcome = event_loop(&mut terminal, &mut app, msg_receiver).await;
    let cleanup = cleanup_terminal(&mut terminal);
    info!("TUI stopped");
    outcome.and(cleanup)
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, mut msg_receiver: mpsc::UnboundedReceiver<Msg>) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut effects: Vec<Effect> = Vec::with_capacity(4);

    let mut current_interval = FAST_TICK;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, &mut main_view)?;
    app.take_dirty();
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let needs_fast_tick = app.carousel.is_auto_advancing() || !app.toasts.is_empty();
        let target_interval = if needs_fast_tick { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                if is_quit_event(app, &event) {
                    break;
                }
                effects.extend(handle_input_event(app, &mut main_view, event));
            }
            Some(msg) = msg_receiver.recv() => {
                effects.extend(main_view.handle_message(app, &msg));
            }
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(app, &Msg::Tick));
            }
            _ = signal::ctrl_c() => { break; }
        }

        if !effects.is_empty() {
            let commands = cmd::from_effects(app, std::mem::take(&mut effects));
            cmd::run_cmds(app, commands);
        }

        // Some terminals drop resize notifications; compare sizes directly.
        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            let _ = app.update(&Msg::Resize(width, height));
        }

        if app.take_dirty() {
            render(terminal, app, &mut main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beranda_util::UserPreferences;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        App::new(AppConfig::default(), Arc::new(UserPreferences::ephemeral()), |_| {}).unwrap()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app();
        app.order = crate::ui::components::order::OrderFormState::open("15mbps");
        assert!(is_quit_event(&app, &key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn q_is_typed_into_fields_instead_of_quitting() {
        let mut app = app();
        assert!(is_quit_event(&app, &key(KeyCode::Char('q'), KeyModifiers::NONE)));
        app.focus = crate::app::Focus::Contact;
        assert!(!is_quit_event(&app, &key(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
