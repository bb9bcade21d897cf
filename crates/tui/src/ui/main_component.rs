//! Top-level view: sticky header, the scrolling landing page, the order
//! modal, and toasts.
//!
//! Page sections are laid out one after another in an off-screen buffer as
//! tall as the whole page; the visible window is copied into the frame at the
//! current scroll offset. Section hit areas are therefore recorded in page
//! rows, and mouse rows are translated before they reach a section.

use std::fmt;

use beranda_types::{Effect, Msg, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Stylize,
    widgets::Block,
};

use super::components::{
    BillingComponent, CarouselComponent, Component, ContactComponent, HeroComponent, NavBarComponent, OrderComponent,
    PackagesComponent, PageSection, ToastComponent,
};
use super::utils::{blit_rows, contains};
use crate::app::{App, Focus};

/// Blank rows between page sections.
const SECTION_GAP: u16 = 1;
/// Columns left free on each side of the page.
const PAGE_MARGIN: u16 = 1;
/// Rows moved per mouse-wheel notch.
const WHEEL_ROWS: i32 = 3;

pub struct MainView {
    nav_bar: NavBarComponent,
    /// Page sections in document order.
    sections: Vec<Box<dyn PageSection>>,
    order: OrderComponent,
    toasts: ToastComponent,
    /// Screen area of the page viewport from the last render.
    page_area: Rect,
}

impl fmt::Debug for MainView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: Vec<Section> = self.sections.iter().map(|s| s.section()).collect();
        f.debug_struct("MainView")
            .field("sections", &sections)
            .field("page_area", &self.page_area)
            .finish()
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

impl MainView {
    pub fn new() -> Self {
        Self {
            nav_bar: NavBarComponent,
            sections: vec![
                Box::new(HeroComponent::default()),
                Box::new(PackagesComponent),
                Box::new(CarouselComponent),
                Box::new(BillingComponent),
                Box::new(ContactComponent),
            ],
            order: OrderComponent,
            toasts: ToastComponent,
            page_area: Rect::default(),
        }
    }

    fn section_mut(&mut self, section: Section) -> Option<&mut Box<dyn PageSection>> {
        self.sections.iter_mut().find(|component| component.section() == section)
    }

    /// Page row under screen row `row`, if it lies inside the viewport.
    fn page_row(&self, app: &App, row: u16) -> Option<u16> {
        let page = self.page_area;
        (row >= page.y && row < page.bottom()).then(|| row - page.y + app.nav.scroll.offset())
    }

    /// Keys while no section has focus: the page itself scrolls.
    fn handle_page_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let scroll = &mut app.nav.scroll;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => scroll.scroll_lines(-1),
            KeyCode::Down | KeyCode::Char('j') => scroll.scroll_lines(1),
            KeyCode::Char(' ') => scroll.scroll_pages(1),
            KeyCode::Home | KeyCode::Char('g') => scroll.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => scroll.scroll_to_bottom(),
            KeyCode::Char('m') => app.nav.toggle_menu(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                return Section::ALL.get(index).map(|section| vec![Effect::ScrollTo(*section)]).unwrap_or_default();
            }
            KeyCode::Enter => return app.set_focus(Focus::Packages),
            _ => return Vec::new(),
        }
        app.mark_dirty();
        Vec::new()
    }

    /// Lays out and draws every section into an off-screen page buffer, then
    /// copies the visible rows into `page`. Returns the screen position of
    /// the text cursor when it is inside the viewport.
    fn render_page(&mut self, frame: &mut Frame, page: Rect, app: &mut App) -> Option<Position> {
        let content_width = page.width.saturating_sub(PAGE_MARGIN * 2);
        let mut layout = Vec::with_capacity(self.sections.len());
        let mut top = 0u16;
        for component in &self.sections {
            let height = component.height(app, content_width);
            layout.push((component.section(), top, height));
            top = top.saturating_add(height).saturating_add(SECTION_GAP);
        }
        let content_height = top;

        app.nav.set_section_offsets(layout.iter().map(|(section, top, _)| (*section, *top)).collect());
        app.nav.scroll.update_viewport_height(page.height);
        app.nav.scroll.update_content_height(content_height);

        let mut buffer = Buffer::empty(Rect::new(page.x, 0, page.width, content_height));
        buffer.set_style(buffer.area, app.theme.theme().base_style());

        let mut cursor = None;
        for (component, (_, top, height)) in self.sections.iter_mut().zip(layout) {
            let area = Rect::new(page.x + PAGE_MARGIN, top, content_width, height);
            if let Some(position) = component.render_section(&mut buffer, area, app) {
                cursor = Some(position);
            }
        }

        let offset = app.nav.scroll.offset();
        blit_rows(&buffer, offset, page, frame.buffer_mut());
        cursor
            .filter(|position| position.y >= offset && position.y - offset < page.height)
            .map(|position| Position::new(position.x, position.y - offset + page.y))
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        for component in &mut self.sections {
            effects.extend(component.handle_message(app, msg));
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.order.is_some() {
            return self.order.handle_key_events(app, key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('t') if ctrl => return vec![Effect::ToggleTheme],
            KeyCode::Home if ctrl => return vec![Effect::ScrollToTop],
            KeyCode::F(10) => {
                app.nav.toggle_menu();
                app.mark_dirty();
                return Vec::new();
            }
            _ => {}
        }

        if app.nav.is_menu_open() {
            return self.nav_bar.handle_key_events(app, key);
        }

        match key.code {
            KeyCode::Tab => return app.set_focus(app.focus.next()),
            KeyCode::BackTab => return app.set_focus(app.focus.previous()),
            KeyCode::PageUp | KeyCode::PageDown => {
                let pages = if key.code == KeyCode::PageUp { -1 } else { 1 };
                app.nav.scroll.scroll_pages(pages);
                app.mark_dirty();
                return Vec::new();
            }
            KeyCode::Esc if app.focus != Focus::Billing || (app.billing.bill.is_none() && app.billing.customer_id.is_empty()) => {
                return app.set_focus(Focus::Page);
            }
            _ => {}
        }

        match app.focus.section() {
            None => self.handle_page_keys(app, key),
            Some(section) => self
                .section_mut(section)
                .map(|component| component.handle_key_events(app, key))
                .unwrap_or_default(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.order.is_some() {
            return self.order.handle_mouse_events(app, mouse);
        }

        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let rows = if mouse.kind == MouseEventKind::ScrollUp { -WHEEL_ROWS } else { WHEEL_ROWS };
                app.nav.scroll.scroll_lines(rows);
                app.mark_dirty();
                return Vec::new();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let (column, row) = (mouse.column, mouse.row);
                let on_chrome = app.nav.is_menu_open()
                    || contains(app.nav.header_area, column, row)
                    || app.nav.scroll_top_area.is_some_and(|area| contains(area, column, row));
                if on_chrome {
                    return self.nav_bar.handle_mouse_events(app, mouse);
                }
            }
            _ => {}
        }

        let page_row = self.page_row(app, mouse.row);
        // Rows outside the viewport map to a row no section occupies.
        let translated = MouseEvent {
            row: page_row.unwrap_or(u16::MAX),
            ..mouse
        };

        let tracking_carousel = app.track.hovered || app.carousel.is_dragging();
        if tracking_carousel && !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return self
                .section_mut(Section::Testimonials)
                .map(|component| component.handle_mouse_events(app, translated))
                .unwrap_or_default();
        }

        let Some(section) = page_row.and_then(|row| app.nav.section_at_row(row)) else {
            return Vec::new();
        };
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            app.focus = Focus::for_section(section);
            app.mark_dirty();
        }
        self.section_mut(section)
            .map(|component| component.handle_mouse_events(app, translated))
            .unwrap_or_default()
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        if app.order.is_some() {
            return self.order.handle_paste(app, text);
        }
        match app.focus.section() {
            Some(section) => self
                .section_mut(section)
                .map(|component| component.handle_paste(app, text))
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(app.theme.theme().base_style()), area);

        let header_height = NavBarComponent::header_height(app);
        let [header, page] = Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(area);
        self.page_area = page;

        let cursor = self.render_page(frame, page, app);
        self.nav_bar.render(frame, header, app);
        self.nav_bar.render_scroll_top(frame, page, app);
        self.nav_bar.render_menu(frame, area, app);

        if app.order.is_some() {
            render_overlay(frame, app);
            self.order.render(frame, area, app);
        } else if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }

        self.toasts.render(frame, area, app);
    }
}

/// Dims everything behind a modal.
fn render_overlay(frame: &mut Frame, app: &App) {
    frame.render_widget(Block::default().style(app.theme.theme().modal_background_style()).dim(), frame.area());
}
