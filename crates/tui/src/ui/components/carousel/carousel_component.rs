use std::time::Instant;

use beranda_types::{Effect, Msg, Section};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{CarouselMode, GestureOutcome, PointerInput};
use crate::app::{App, Focus};
use crate::ui::components::{Component, PageSection};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{columns_to_units, contains};

const SECTION_HEIGHT: u16 = 12;

/// Testimonial slides with arrow buttons, dot indicators, drag-to-swipe and
/// hover-to-pause.
#[derive(Debug, Default)]
pub struct CarouselComponent;

impl CarouselComponent {
    fn pointer(app: &mut App, input: PointerInput) {
        if let Some(outcome) = app.carousel.handle_pointer(input) {
            app.track.last_outcome = Some(outcome);
        }
        app.mark_dirty();
    }

    fn toggle_pause(app: &mut App) {
        if app.carousel.is_paused() {
            app.carousel.resume(Instant::now());
        } else {
            app.carousel.pause();
        }
    }
}

impl Component for CarouselComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        if let Msg::SlideChanged(_) = msg {
            app.track.last_outcome = None;
        }
        Vec::new()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.carousel.previous(),
            KeyCode::Right | KeyCode::Char('l') => app.carousel.next(),
            KeyCode::Char(' ') | KeyCode::Char('p') => Self::toggle_pause(app),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < app.carousel.slide_count() {
                    app.carousel.go_to(index as i64);
                }
            }
            _ => return Vec::new(),
        }
        app.mark_dirty();
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let now = Instant::now();
        let (column, row) = (mouse.column, mouse.row);
        let inside = contains(app.track.area, column, row);
        let x = columns_to_units(column);

        match mouse.kind {
            MouseEventKind::Moved => {
                if inside && !app.track.hovered {
                    app.track.hovered = true;
                    Self::pointer(app, PointerInput::Enter);
                } else if !inside && app.track.hovered {
                    app.track.hovered = false;
                    Self::pointer(app, PointerInput::Leave { at: now });
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(app.track.previous_area, column, row) {
                    app.carousel.previous();
                } else if contains(app.track.next_area, column, row) {
                    app.carousel.next();
                } else if let Some(index) = app.track.dot_areas.iter().position(|area| contains(*area, column, row)) {
                    app.carousel.go_to(index as i64);
                } else if inside {
                    Self::pointer(app, PointerInput::Down { x, at: now });
                }
                app.mark_dirty();
            }
            MouseEventKind::Drag(MouseButton::Left) if app.carousel.is_dragging() => {
                if inside {
                    Self::pointer(app, PointerInput::Move { x });
                } else {
                    app.track.hovered = false;
                    Self::pointer(app, PointerInput::Leave { at: now });
                }
            }
            MouseEventKind::Up(MouseButton::Left) if app.carousel.is_dragging() => {
                Self::pointer(app, PointerInput::Up { x, at: now });
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        self.render_section(frame.buffer_mut(), rect, app);
    }
}

impl PageSection for CarouselComponent {
    fn section(&self) -> Section {
        Section::Testimonials
    }

    fn height(&self, _app: &App, _width: u16) -> u16 {
        SECTION_HEIGHT
    }

    fn render_section(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) -> Option<Position> {
        let theme = app.theme.theme();
        let focused = app.focus == Focus::Testimonials;
        let status = match (app.carousel.mode(), app.track.last_outcome) {
            (CarouselMode::Dragging, _) => " ⇆ geser ",
            (_, Some(GestureOutcome::Cancelled)) => " ↺ geser lebih jauh ",
            (CarouselMode::AutoAdvancing, _) => " ▶ otomatis ",
            (CarouselMode::Paused, _) => " ⏸ dijeda ",
        };
        let block = th::block(theme, Some(" Apa Kata Pelanggan Kami "), focused)
            .title_bottom(Line::from(Span::styled(" ←/→ pindah · spasi jeda ", theme.text_muted_style())))
            .title_top(Line::from(Span::styled(status, theme.text_muted_style())).alignment(Alignment::Right));
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, dots_row] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);
        let [previous, track, next] =
            Layout::horizontal([Constraint::Length(3), Constraint::Min(10), Constraint::Length(3)]).areas(body);

        let middle = |column: Rect| Rect {
            y: column.y + column.height / 2,
            height: 1,
            ..column
        };
        Paragraph::new("‹").centered().style(theme.accent_emphasis_style()).render(middle(previous), buf);
        Paragraph::new("›").centered().style(theme.accent_emphasis_style()).render(middle(next), buf);

        app.carousel.set_track_width(columns_to_units(track.width));
        let shift = (app.carousel.drag_offset().unwrap_or(0.0) * f32::from(track.width)).round() as i32;
        let shift = shift.clamp(-i32::from(track.width / 2), i32::from(track.width / 2));
        let travel = (shift.unsigned_abs() * 2) as u16;
        let slide_area = Rect {
            x: if shift < 0 { track.x + travel } else { track.x },
            width: track.width.saturating_sub(travel),
            ..track
        };

        if let Some(testimonial) = app.testimonials.get(app.carousel.current_index()) {
            let stars: String = (1..=5).map(|n| if n <= testimonial.rating { '★' } else { '☆' }).collect();
            let lines = vec![
                Line::from(Span::styled(
                    format!("“{}”", testimonial.quote),
                    theme.text_primary_style().add_modifier(Modifier::ITALIC),
                )),
                Line::default(),
                Line::from(Span::styled(stars, theme.highlight_style())),
                Line::from(vec![
                    Span::styled(testimonial.name, theme.text_secondary_style().add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" · {}", testimonial.location), theme.text_muted_style()),
                ]),
            ];
            Paragraph::new(lines).centered().wrap(Wrap { trim: true }).render(slide_area, buf);
        }

        let count = app.carousel.slide_count() as u16;
        let dots_width = (count * 2).saturating_sub(1);
        let start = dots_row.x + dots_row.width.saturating_sub(dots_width) / 2;
        app.track.dot_areas.clear();
        for index in 0..count {
            let dot = Rect::new(start + index * 2, dots_row.y, 1, 1);
            let (symbol, style) = if usize::from(index) == app.carousel.current_index() {
                ("●", theme.accent_primary_style())
            } else {
                ("○", theme.text_muted_style())
            };
            buf.set_string(dot.x, dot.y, symbol, style);
            app.track.dot_areas.push(dot);
        }

        app.track.area = track;
        app.track.previous_area = previous;
        app.track.next_area = next;
        None
    }
}
