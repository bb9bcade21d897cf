use beranda_types::{Effect, Section};
use beranda_util::BRAND_NAME;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::contains;

const MENU_TOGGLE_LABEL: &str = " ☰ Menu ";
const MENU_WIDTH: u16 = 22;
/// Inline section links need at least this many columns.
const INLINE_LINKS_MIN_WIDTH: u16 = 96;
const SCROLL_TOP_LABEL: &str = " ↑ ";

/// Sticky header with brand, section links, theme toggle and the dropdown
/// menu. Also owns the floating scroll-to-top button.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    /// Header rows: a padded bar at the top of the page, a single row once
    /// the page has scrolled.
    pub fn header_height(app: &App) -> u16 {
        if app.nav.is_condensed() { 1 } else { 3 }
    }

    /// Draws the dropdown below the menu toggle, when open.
    pub fn render_menu(&mut self, frame: &mut Frame, bounds: Rect, app: &mut App) {
        let nav = &mut app.nav;
        if !nav.is_menu_open() {
            return;
        }
        let theme = app.theme.theme();
        let height = nav.items.len() as u16 + 2;
        let toggle = nav.menu_toggle_area;
        let x = (toggle.right().saturating_sub(MENU_WIDTH)).max(bounds.x);
        let area = Rect::new(x, toggle.bottom(), MENU_WIDTH.min(bounds.width), height).intersection(bounds);
        frame.render_widget(Clear, area);
        let block = th::block(theme, None, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let active = nav.active_section();
        nav.per_item_areas.clear();
        for (index, section) in nav.items.iter().enumerate() {
            let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            if row.y >= inner.bottom() {
                break;
            }
            let mut style = if index == nav.selected_index {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            if *section == active {
                style = style.add_modifier(Modifier::BOLD);
            }
            frame.render_widget(Paragraph::new(format!(" {}", section.label())).style(style), row);
            nav.per_item_areas.push(row);
        }
        nav.menu_area = area;
    }

    /// Draws the scroll-to-top button in the bottom-right corner of `page`
    /// when the scroll position calls for it.
    pub fn render_scroll_top(&mut self, frame: &mut Frame, page: Rect, app: &mut App) {
        if !app.nav.show_scroll_to_top() || page.width < 8 || page.height < 3 {
            app.nav.scroll_top_area = None;
            return;
        }
        let theme = app.theme.theme();
        let area = Rect::new(page.right() - 6, page.bottom() - 3, 5, 3);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(SCROLL_TOP_LABEL)
                .centered()
                .style(th::button_primary_style(theme, true))
                .block(th::block(theme, None, false)),
            area,
        );
        app.nav.scroll_top_area = Some(area);
    }
}

impl Component for NavBarComponent {
    /// Keys while the dropdown is open.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let nav = &mut app.nav;
        if !nav.is_menu_open() {
            return Vec::new();
        }
        let effects = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                nav.cycle_selection(-1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                nav.cycle_selection(1);
                Vec::new()
            }
            KeyCode::Enter => nav.activate_selected(),
            KeyCode::Esc => {
                nav.close_menu();
                Vec::new()
            }
            _ => return Vec::new(),
        };
        app.mark_dirty();
        effects
    }

    /// Clicks on the header, the dropdown and the scroll-to-top button.
    /// Coordinates are screen cells.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (column, row) = (mouse.column, mouse.row);
        let nav = &mut app.nav;
        let effects = if let Some(index) = nav.item_at(column, row) {
            nav.activate(index)
        } else if nav.is_outside_click(column, row) {
            nav.close_menu();
            Vec::new()
        } else if contains(nav.menu_toggle_area, column, row) {
            nav.toggle_menu();
            Vec::new()
        } else if contains(nav.theme_toggle_area, column, row) {
            vec![Effect::ToggleTheme]
        } else if let Some(section) = nav
            .inline_item_areas
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(section, _)| *section)
        {
            vec![Effect::ScrollTo(section)]
        } else if nav.scroll_top_area.is_some_and(|area| contains(area, column, row)) {
            vec![Effect::ScrollToTop]
        } else {
            return Vec::new();
        };
        app.mark_dirty();
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let condensed = app.nav.is_condensed();
        let dark = app.theme.mode().is_dark();
        let nav = &mut app.nav;

        let style = theme.header_style(condensed);
        frame.render_widget(Block::default().style(style), area);
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        nav.header_area = area;

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ◉ ", theme.accent_emphasis_style()),
                Span::styled(BRAND_NAME, theme.text_primary_style().add_modifier(Modifier::BOLD)),
            ])),
            row,
        );

        let toggle_width = MENU_TOGGLE_LABEL.chars().count() as u16;
        let menu_toggle = Rect::new(row.right().saturating_sub(toggle_width + 1), row.y, toggle_width, 1);
        let theme_toggle = Rect::new(menu_toggle.x.saturating_sub(4), row.y, 3, 1);
        let toggle_style = if nav.is_menu_open() {
            theme.selection_style()
        } else {
            theme.accent_primary_style()
        };
        frame.render_widget(Paragraph::new(MENU_TOGGLE_LABEL).style(toggle_style), menu_toggle);
        frame.render_widget(
            Paragraph::new(if dark { " ☀ " } else { " ☾ " }).style(theme.accent_primary_style()),
            theme_toggle,
        );
        nav.menu_toggle_area = menu_toggle;
        nav.theme_toggle_area = theme_toggle;

        nav.inline_item_areas.clear();
        if area.width >= INLINE_LINKS_MIN_WIDTH {
            let active = nav.active_section();
            let labels: Vec<(Section, String)> = nav.items.iter().map(|s| (*s, format!(" {} ", s.label()))).collect();
            let total: u16 = labels.iter().map(|(_, l)| l.chars().count() as u16 + 1).sum();
            let mut x = theme_toggle.x.saturating_sub(total + 2);
            for (section, label) in labels {
                let width = label.chars().count() as u16;
                let style = if section == active {
                    theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)
                } else {
                    theme.text_secondary_style()
                };
                let link = Rect::new(x, row.y, width, 1);
                frame.render_widget(Paragraph::new(label).style(style).alignment(Alignment::Center), link);
                nav.inline_item_areas.push((section, link));
                x += width + 1;
            }
        }
    }
}
