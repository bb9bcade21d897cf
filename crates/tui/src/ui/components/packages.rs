//! Package cards; activating one opens the order form for it.

use beranda_types::{Effect, InternetPackage, Modal, PACKAGES, Section};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::{App, Focus};
use crate::ui::components::{Component, PageSection};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::contains;

const CARD_HEIGHT: u16 = 9;
/// Below this width cards stack vertically.
const STACK_BELOW_WIDTH: u16 = 72;

#[derive(Debug, Clone, Default)]
pub struct PackagesState {
    pub selected: usize,
    pub card_areas: Vec<Rect>,
}

impl PackagesState {
    pub fn selected_package(&self) -> &'static InternetPackage {
        &PACKAGES[self.selected.min(PACKAGES.len() - 1)]
    }

    pub fn cycle(&mut self, delta: isize) {
        let len = PACKAGES.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    pub fn order_selected(&self) -> Effect {
        Effect::ShowModal(Modal::Order(self.selected_package().id.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct PackagesComponent;

impl Component for PackagesComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Left | KeyCode::Up => app.packages.cycle(-1),
            KeyCode::Right | KeyCode::Down => app.packages.cycle(1),
            KeyCode::Enter | KeyCode::Char(' ') => return vec![app.packages.order_selected()],
            _ => return Vec::new(),
        }
        app.mark_dirty();
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.packages.card_areas.iter().position(|area| contains(*area, mouse.column, mouse.row)) {
            Some(index) => {
                app.packages.selected = index;
                vec![app.packages.order_selected()]
            }
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        self.render_section(frame.buffer_mut(), rect, app);
    }
}

impl PageSection for PackagesComponent {
    fn section(&self) -> Section {
        Section::Packages
    }

    fn height(&self, _app: &App, width: u16) -> u16 {
        let rows = if width < STACK_BELOW_WIDTH { PACKAGES.len() as u16 } else { 1 };
        rows * CARD_HEIGHT + 3
    }

    fn render_section(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) -> Option<Position> {
        let theme = app.theme.theme();
        let focused = app.focus == Focus::Packages;
        let [heading, cards] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        Paragraph::new(vec![
            Line::from(Span::styled("Pilih Paket Internet", theme.accent_emphasis_style())),
            Line::from(Span::styled("Tanpa FUP · Gratis instalasi · Dukungan 24/7", theme.text_muted_style())),
        ])
        .centered()
        .render(heading, buf);

        let slots = if area.width < STACK_BELOW_WIDTH {
            Layout::vertical(PACKAGES.iter().map(|_| Constraint::Length(CARD_HEIGHT))).split(cards)
        } else {
            Layout::horizontal(PACKAGES.iter().map(|_| Constraint::Ratio(1, PACKAGES.len() as u32)))
                .spacing(1)
                .split(cards)
        };

        app.packages.card_areas.clear();
        for (index, (package, slot)) in PACKAGES.iter().zip(slots.iter()).enumerate() {
            let slot = Rect {
                height: slot.height.min(CARD_HEIGHT),
                ..*slot
            };
            let selected = focused && index == app.packages.selected;
            let block = th::block(theme, Some(package.name), selected);
            let inner = block.inner(slot);
            block.render(slot, buf);

            let badge = if package.featured {
                Line::from(Span::styled(" TERPOPULER ", th::badge_style(theme)))
            } else {
                Line::default()
            };
            let [body, button] = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);
            Paragraph::new(vec![
                badge,
                Line::from(Span::styled(package.speed, theme.text_primary_style().add_modifier(Modifier::BOLD))),
                Line::from(vec![
                    Span::styled(package.price, theme.accent_primary_style()),
                    Span::styled(" /bulan", theme.text_muted_style()),
                ]),
            ])
            .centered()
            .render(body, buf);
            th::render_button(buf, button, "Pesan Sekarang", package.featured, selected, theme);
            app.packages.card_areas.push(slot);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_and_orders_selected_package() {
        let mut state = PackagesState::default();
        state.cycle(-1);
        assert_eq!(state.selected_package().id, "30mbps");
        state.cycle(2);
        assert_eq!(state.order_selected(), Effect::ShowModal(Modal::Order("20mbps".into())));
    }
}
