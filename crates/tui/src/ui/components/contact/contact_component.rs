use beranda_types::{Effect, Section};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{ContactField, ContactFormState};
use crate::app::{App, Focus};
use crate::ui::components::common::{FieldView, render_choice_field, render_text_field};
use crate::ui::components::{Component, PageSection};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::contains;

const INTRO_ROWS: u16 = 2;
const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct ContactComponent;

impl ContactComponent {
    fn text_view(form: &ContactFormState, field: ContactField) -> Option<FieldView<'_>> {
        let (label, input, placeholder, required) = match field {
            ContactField::Name => ("Nama", &form.name, "Nama lengkap", true),
            ContactField::Email => ("Email", &form.email, "nama@email.com", true),
            ContactField::Phone => ("Telepon", &form.phone, "08123456789", true),
            ContactField::Message => ("Pesan", &form.message, "Tulis pertanyaan Anda", false),
            ContactField::Package | ContactField::Submit => return None,
        };
        Some(FieldView {
            label,
            value: input.input(),
            placeholder,
            required,
            cursor_column: input.cursor_column(),
        })
    }
}

impl Component for ContactComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let chat_number = app.chat_number.clone();
        let form = &mut app.contact;
        let effects = match (form.field, key.code) {
            (_, KeyCode::Down) => {
                form.focus_next(1);
                Vec::new()
            }
            (_, KeyCode::Up) => {
                form.focus_next(-1);
                Vec::new()
            }
            (ContactField::Package, KeyCode::Left) => {
                form.cycle_package(-1);
                Vec::new()
            }
            (ContactField::Package, KeyCode::Right | KeyCode::Char(' ')) => {
                form.cycle_package(1);
                Vec::new()
            }
            (ContactField::Submit, KeyCode::Enter) => form.submit(&chat_number),
            (field, KeyCode::Enter) if field.is_text() => {
                form.focus_next(1);
                Vec::new()
            }
            (field, _) => {
                if !form.input_mut(field).is_some_and(|input| input.handle_key(&key)) {
                    return Vec::new();
                }
                Vec::new()
            }
        };
        app.mark_dirty();
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let chat_number = app.chat_number.clone();
        let form = &mut app.contact;
        let Some(field) = form
            .field_areas
            .iter()
            .find(|(_, area)| contains(*area, mouse.column, mouse.row))
            .map(|(field, _)| *field)
        else {
            return Vec::new();
        };
        form.field = field;
        let effects = match field {
            ContactField::Package => {
                form.cycle_package(1);
                Vec::new()
            }
            ContactField::Submit => form.submit(&chat_number),
            _ => Vec::new(),
        };
        app.mark_dirty();
        effects
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        let field = app.contact.field;
        if let Some(input) = app.contact.input_mut(field) {
            input.insert_str(text);
            app.mark_dirty();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        if let Some(position) = self.render_section(frame.buffer_mut(), rect, app) {
            frame.set_cursor_position(position);
        }
    }
}

impl PageSection for ContactComponent {
    fn section(&self) -> Section {
        Section::Contact
    }

    fn height(&self, _app: &App, _width: u16) -> u16 {
        let field_rows = (ContactField::ALL.len() as u16 - 1) * 2;
        2 + INTRO_ROWS + field_rows + BUTTON_HEIGHT
    }

    fn render_section(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) -> Option<Position> {
        let theme = app.theme.theme();
        let focused = app.focus == Focus::Contact;
        let number = app.chat_number.as_str();
        let form = &mut app.contact;

        let block = th::block(theme, Some(" Hubungi Kami "), focused)
            .title_bottom(Line::from(Span::styled(" ↑/↓ pindah · ←/→ paket · Enter kirim ", theme.text_muted_style())));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Pesan dikirim lewat WhatsApp ke ", theme.text_secondary_style()),
            Span::styled(format!("+{number}"), theme.accent_primary_style()),
        ]))
        .render(Rect { height: 1, ..inner }, buf);

        form.field_areas.clear();
        let mut cursor = None;
        let mut y = inner.y + INTRO_ROWS;
        for field in ContactField::ALL {
            let field_focused = focused && form.field == field;
            if field == ContactField::Submit {
                let button = Rect::new(inner.x, y, 24.min(inner.width), BUTTON_HEIGHT);
                th::render_button(buf, button, "Kirim via WhatsApp", true, field_focused, theme);
                form.field_areas.push((field, button));
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            if y >= inner.bottom() {
                break;
            }
            match Self::text_view(form, field) {
                Some(view) => {
                    if let Some(position) = render_text_field(buf, row, &view, field_focused, theme) {
                        cursor = Some(position);
                    }
                }
                None => render_choice_field(buf, row, "Paket", &form.package_label(), field_focused, theme),
            }
            form.field_areas.push((field, row));
            y += 2;
        }
        cursor
    }
}
