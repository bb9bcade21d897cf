use beranda_types::{Effect, Section};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::ui::components::{Component, PageSection};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{centered_fixed, contains};
use beranda_util::BRAND_NAME;

const HERO_HEIGHT: u16 = 10;

/// Opening banner with a call to action that jumps to the packages.
#[derive(Debug, Default)]
pub struct HeroComponent {
    cta_area: Rect,
}

impl Component for HeroComponent {
    fn handle_mouse_events(&mut self, _app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && contains(self.cta_area, mouse.column, mouse.row) {
            return vec![Effect::ScrollTo(Section::Packages)];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        self.render_section(frame.buffer_mut(), rect, app);
    }
}

impl PageSection for HeroComponent {
    fn section(&self) -> Section {
        Section::Home
    }

    fn height(&self, _app: &App, _width: u16) -> u16 {
        HERO_HEIGHT
    }

    fn render_section(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) -> Option<Position> {
        let theme = app.theme.theme();
        let [text, cta] = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);
        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                format!("Internet Cepat & Stabil bersama {BRAND_NAME}"),
                theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Fiber optik hingga 30 Mbps untuk rumah dan usaha Anda, dengan teknisi lokal yang siap membantu.",
                theme.text_secondary_style(),
            )),
        ])
        .centered()
        .wrap(Wrap { trim: true })
        .render(text, buf);

        self.cta_area = centered_fixed(22, 3, cta);
        th::render_button(buf, self.cta_area, "Lihat Paket ↓", true, false, theme);
        None
    }
}
