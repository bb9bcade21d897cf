use beranda_types::Effect;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::{OrderField, OrderFormState};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::{FieldView, KeyEntry, render_choice_field, render_text_field};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{centered_fixed, contains};

const MODAL_WIDTH: u16 = 68;
const BUTTON_HEIGHT: u16 = 3;

/// Order form shown as a modal over the page.
#[derive(Debug, Default)]
pub struct OrderComponent;

impl OrderComponent {
    fn modal_height() -> u16 {
        2 + 2 + OrderField::INPUTS.len() as u16 * 2 + BUTTON_HEIGHT
    }

    fn text_view(form: &OrderFormState, field: OrderField) -> Option<FieldView<'_>> {
        let (label, input, placeholder, required) = match field {
            OrderField::Name => ("Nama Lengkap", &form.name, "Sesuai KTP", true),
            OrderField::Phone => ("WhatsApp", &form.phone, "08123456789", true),
            OrderField::Email => ("Email", &form.email, "opsional", false),
            OrderField::Address => ("Alamat", &form.address, "Alamat pemasangan", true),
            OrderField::Notes => ("Catatan", &form.notes, "opsional", false),
            OrderField::IdNumber => {
                return Some(FieldView {
                    label: "Nomor KTP",
                    value: form.id_number.current_display_text(),
                    placeholder: "1234 5678 9012 3456",
                    required: true,
                    cursor_column: form.id_number.caret() as u16,
                });
            }
            _ => return None,
        };
        Some(FieldView {
            label,
            value: input.input(),
            placeholder,
            required,
            cursor_column: input.cursor_column(),
        })
    }

    fn activate(form: &mut OrderFormState, chat_number: &str) -> Vec<Effect> {
        match form.field {
            OrderField::Submit => form.submit(chat_number),
            OrderField::Cancel => vec![Effect::CloseModal],
            OrderField::Installation => {
                form.cycle_installation(1);
                Vec::new()
            }
            _ => {
                form.focus_next(1);
                Vec::new()
            }
        }
    }
}

impl Component for OrderComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let chat_number = app.chat_number.clone();
        let Some(form) = app.order.as_mut() else {
            return Vec::new();
        };
        let effects = match (form.field, key.code) {
            (_, KeyCode::Esc) => vec![Effect::CloseModal],
            (_, KeyCode::Tab | KeyCode::Down) => {
                form.focus_next(1);
                Vec::new()
            }
            (_, KeyCode::BackTab | KeyCode::Up) => {
                form.focus_next(-1);
                Vec::new()
            }
            (_, KeyCode::Enter) => Self::activate(form, &chat_number),
            (OrderField::Installation, KeyCode::Left) => {
                form.cycle_installation(-1);
                Vec::new()
            }
            (OrderField::Installation, KeyCode::Right | KeyCode::Char(' ')) => {
                form.cycle_installation(1);
                Vec::new()
            }
            (OrderField::Submit | OrderField::Cancel, KeyCode::Left | KeyCode::Right) => {
                form.field = if form.field == OrderField::Submit {
                    OrderField::Cancel
                } else {
                    OrderField::Submit
                };
                Vec::new()
            }
            (OrderField::IdNumber, _) => {
                if !KeyEntry::from_key_event(&key).is_some_and(|entry| form.id_number_key(entry)) {
                    return Vec::new();
                }
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
        let Some(form) = app.order.as_mut() else {
            return Vec::new();
        };
        if !contains(form.area, mouse.column, mouse.row) {
            return vec![Effect::CloseModal];
        }
        let hit = form
            .field_areas
            .iter()
            .find(|(_, area)| contains(*area, mouse.column, mouse.row))
            .map(|(field, _)| *field);
        let Some(field) = hit else {
            return Vec::new();
        };
        form.field = field;
        let effects = match field {
            OrderField::Submit | OrderField::Cancel | OrderField::Installation => Self::activate(form, &chat_number),
            _ => Vec::new(),
        };
        app.mark_dirty();
        effects
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        let Some(form) = app.order.as_mut() else {
            return Vec::new();
        };
        match form.field {
            OrderField::IdNumber => form.id_number.on_paste(text),
            field => match form.input_mut(field) {
                Some(input) => input.insert_str(text),
                None => return Vec::new(),
            },
        }
        app.mark_dirty();
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let Some(form) = app.order.as_mut() else {
            return;
        };

        let area = centered_fixed(MODAL_WIDTH, Self::modal_height(), rect);
        form.area = area;
        frame.render_widget(Clear, area);

        let title = format!(" Pesan {} ", form.package.name);
        let block = th::block(theme, Some(title.as_str()), true)
            .title_bottom(Line::from(Span::styled(" Tab pindah · Enter pilih · Esc tutup ", theme.text_muted_style())));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [summary, _, fields, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} · ", form.package.speed), theme.text_secondary_style()),
                Span::styled(format!("{}/bulan", form.package.price), theme.accent_emphasis_style()),
            ])),
            summary,
        );

        form.field_areas.clear();
        let mut cursor = None;
        let buf = frame.buffer_mut();
        for (index, field) in OrderField::INPUTS.into_iter().enumerate() {
            let y = fields.y + index as u16 * 2;
            if y >= fields.bottom() {
                break;
            }
            let row = Rect::new(fields.x, y, fields.width, 1);
            let focused = form.field == field;
            match Self::text_view(form, field) {
                Some(view) => {
                    if let Some(position) = render_text_field(buf, row, &view, focused, theme) {
                        cursor = Some(position);
                    }
                }
                None => render_choice_field(buf, row, "Waktu Instalasi", form.installation_label(), focused, theme),
            }
            form.field_areas.push((field, row));
        }

        let [submit, cancel] = Layout::horizontal([Constraint::Length(24), Constraint::Length(14)])
            .spacing(2)
            .areas(buttons);
        th::render_button(buf, submit, "Kirim via WhatsApp", true, form.field == OrderField::Submit, theme);
        th::render_button(buf, cancel, "Batal", false, form.field == OrderField::Cancel, theme);
        form.field_areas.push((OrderField::Submit, submit));
        form.field_areas.push((OrderField::Cancel, cancel));

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}
