use beranda_types::{Effect, NoticeLevel, Section};
use beranda_util::{BillStatus, PaymentMethod};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{BillingField, BillingState};
use crate::app::{App, Focus};
use crate::ui::components::common::{FieldView, cycle, render_text_field};
use crate::ui::components::{Component, PageSection};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::contains;

const DETAIL_ROWS: u16 = 7;

/// Bill lookup and payment-instruction section.
#[derive(Debug, Default)]
pub struct BillingComponent;

impl BillingComponent {
    fn pay(state: &mut BillingState) -> Vec<Effect> {
        match state.pay(&mut rand::rng()) {
            Ok(effects) => effects,
            Err(error) => vec![Effect::Notify {
                message: error.to_string(),
                level: NoticeLevel::Error,
            }],
        }
    }

    fn instruction_rows(state: &BillingState, width: u16) -> u16 {
        let width = usize::from(width.max(1));
        state
            .instructions
            .as_deref()
            .map(|text| text.lines().map(|line| textwrap::wrap(line, width).len().max(1) as u16).sum::<u16>() + 1)
            .unwrap_or(0)
    }
}

impl Component for BillingComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.billing;
        let has_bill = state.bill.is_some();
        let effects = match (state.field, key.code) {
            (_, KeyCode::Esc) => {
                state.reset();
                Vec::new()
            }
            (_, KeyCode::Down) if has_bill => {
                state.field = cycle(&BillingField::ALL, state.field, 1);
                Vec::new()
            }
            (_, KeyCode::Up) if has_bill => {
                state.field = cycle(&BillingField::ALL, state.field, -1);
                Vec::new()
            }
            (BillingField::CustomerId, KeyCode::Enter) => state.lookup(),
            (BillingField::CustomerId, _) => {
                state.customer_id.handle_key(&key);
                Vec::new()
            }
            (BillingField::Method, KeyCode::Left) => {
                state.cycle_method(-1);
                Vec::new()
            }
            (BillingField::Method, KeyCode::Right) => {
                state.cycle_method(1);
                Vec::new()
            }
            (BillingField::Method, KeyCode::Enter | KeyCode::Char(' ')) => {
                state.choose_method(state.method_cursor);
                state.field = BillingField::Pay;
                Vec::new()
            }
            (BillingField::Pay, KeyCode::Enter) => Self::pay(state),
            _ => return Vec::new(),
        };
        app.mark_dirty();
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (column, row) = (mouse.column, mouse.row);
        let state = &mut app.billing;
        let effects = if contains(state.areas.customer_id, column, row) {
            state.field = BillingField::CustomerId;
            Vec::new()
        } else if contains(state.areas.search_button, column, row) {
            state.lookup()
        } else if let Some(method) = state.areas.methods.iter().find(|(_, area)| contains(*area, column, row)).map(|(m, _)| *m) {
            state.choose_method(method);
            state.field = BillingField::Pay;
            Vec::new()
        } else if contains(state.areas.pay_button, column, row) {
            state.field = BillingField::Pay;
            Self::pay(state)
        } else {
            return Vec::new();
        };
        app.mark_dirty();
        effects
    }

    fn handle_paste(&mut self, app: &mut App, text: &str) -> Vec<Effect> {
        if app.billing.field == BillingField::CustomerId {
            app.billing.customer_id.insert_str(text.trim());
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

impl PageSection for BillingComponent {
    fn section(&self) -> Section {
        Section::Billing
    }

    fn height(&self, app: &App, width: u16) -> u16 {
        let state = &app.billing;
        let mut rows = 2 + 3 + 1;
        if state.error.is_some() {
            rows += 2;
        }
        if state.bill.is_some() {
            rows += DETAIL_ROWS + 1 + 1 + 3;
            rows += Self::instruction_rows(state, width.saturating_sub(2));
        }
        rows
    }

    fn render_section(&mut self, buf: &mut Buffer, area: Rect, app: &mut App) -> Option<Position> {
        let theme = app.theme.theme();
        let focused = app.focus == Focus::Billing;
        let state = &mut app.billing;

        let block = th::block(theme, Some(" Bayar Tagihan "), focused)
            .title_bottom(Line::from(Span::styled(" Enter cek/bayar · ↑/↓ pindah · Esc ulang ", theme.text_muted_style())));
        let inner = block.inner(area);
        block.render(area, buf);

        let [hint, input, _, rest] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            format!("Masukkan ID Pelanggan Anda. Contoh: {}", state.example_ids()),
            theme.text_muted_style(),
        )))
        .render(hint, buf);

        let [input_row, button_row] = Layout::horizontal([Constraint::Min(20), Constraint::Length(14)]).spacing(1).areas(input);
        let field = FieldView {
            label: "ID Pelanggan",
            value: state.customer_id.input(),
            placeholder: "INT001",
            required: true,
            cursor_column: state.customer_id.cursor_column(),
        };
        let cursor = render_text_field(buf, input_row, &field, focused && state.field == BillingField::CustomerId, theme);
        buf.set_string(button_row.x, button_row.y, "[ Cek Tagihan ]", th::button_primary_style(theme, true));
        state.areas.customer_id = input_row;
        state.areas.search_button = button_row;

        let mut y = rest.y;
        if let Some(error) = state.error.as_deref() {
            Paragraph::new(Span::styled(format!("⚠ {error}"), theme.status_error()))
                .wrap(Wrap { trim: true })
                .render(Rect::new(rest.x, y, rest.width, 2), buf);
            y += 2;
        }

        state.areas.methods.clear();
        state.areas.pay_button = Rect::default();
        let Some(bill) = state.bill.as_ref() else {
            return cursor;
        };

        let status = match bill.status {
            BillStatus::Unpaid => Span::styled("Belum Dibayar", theme.status_error()),
            BillStatus::Paid => Span::styled("Lunas", theme.status_success()),
        };
        let detail = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<16}"), theme.text_secondary_style()),
                Span::styled(value, theme.text_primary_style()),
            ])
        };
        let details = vec![
            detail("Nama", bill.name.clone()),
            detail("Paket", bill.package.clone()),
            detail("Telepon", bill.phone.clone()),
            detail("Periode", bill.period_label()),
            detail("Jatuh Tempo", bill.due_date_label()),
            Line::from(vec![
                Span::styled(format!("{:<16}", "Total Tagihan"), theme.text_secondary_style()),
                Span::styled(bill.amount_label(), theme.accent_emphasis_style()),
            ]),
            Line::from(vec![Span::styled(format!("{:<16}", "Status"), theme.text_secondary_style()), status]),
        ];
        Paragraph::new(details).render(Rect::new(rest.x, y, rest.width, DETAIL_ROWS), buf);
        y += DETAIL_ROWS + 1;

        let method_focused = focused && state.field == BillingField::Method;
        let mut x = rest.x;
        for method in PaymentMethod::ALL {
            let marker = if state.method == Some(method) { "(•) " } else { "( ) " };
            let label = format!("{marker}{}", method.label());
            let width = label.chars().count() as u16;
            let style = if method_focused && state.method_cursor == method {
                theme.selection_style().add_modifier(Modifier::BOLD)
            } else {
                theme.text_primary_style()
            };
            if x + width > rest.right() {
                break;
            }
            buf.set_string(x, y, &label, style);
            state.areas.methods.push((method, Rect::new(x, y, width, 1)));
            x += width + 2;
        }
        y += 1;

        let pay_area = Rect::new(rest.x, y, 22.min(rest.width), 3);
        let pay_focused = focused && state.field == BillingField::Pay;
        th::render_button(buf, pay_area, "Bayar Sekarang", state.method.is_some(), pay_focused, theme);
        state.areas.pay_button = pay_area;
        y += 3;

        if let Some(instructions) = state.instructions.as_deref() {
            let lines: Vec<Line> = instructions.lines().map(|line| Line::from(line.to_string())).collect();
            let height = rest.bottom().saturating_sub(y + 1);
            Paragraph::new(lines)
                .style(theme.text_primary_style())
                .wrap(Wrap { trim: false })
                .render(Rect::new(rest.x, y + 1, rest.width, height), buf);
        }
        cursor
    }
}
