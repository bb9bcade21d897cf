use beranda_types::{Effect, InstallationWindow, InternetPackage, NoticeLevel, find_package};
use beranda_util::{OrderDraft, chat_link};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::ui::components::common::{ControlKey, KeyEntry, MaskedDigitInput, TextInputState, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderField {
    #[default]
    Name,
    Phone,
    IdNumber,
    Email,
    Address,
    Installation,
    Notes,
    Submit,
    Cancel,
}

impl OrderField {
    pub const ALL: [OrderField; 9] = [
        OrderField::Name,
        OrderField::Phone,
        OrderField::IdNumber,
        OrderField::Email,
        OrderField::Address,
        OrderField::Installation,
        OrderField::Notes,
        OrderField::Submit,
        OrderField::Cancel,
    ];

    /// Fields that are drawn as one-row inputs.
    pub const INPUTS: [OrderField; 7] = [
        OrderField::Name,
        OrderField::Phone,
        OrderField::IdNumber,
        OrderField::Email,
        OrderField::Address,
        OrderField::Installation,
        OrderField::Notes,
    ];

    pub fn is_text(self) -> bool {
        !matches!(self, OrderField::Installation | OrderField::Submit | OrderField::Cancel)
    }
}

/// Installation slot choices; `None` means no preference.
const INSTALLATION_CHOICES: [Option<InstallationWindow>; 5] = [
    None,
    Some(InstallationWindow::Morning),
    Some(InstallationWindow::Midday),
    Some(InstallationWindow::Afternoon),
    Some(InstallationWindow::Flexible),
];

/// Subscription order modal for one package.
#[derive(Debug)]
pub struct OrderFormState {
    pub package: &'static InternetPackage,
    pub name: TextInputState,
    pub phone: TextInputState,
    /// Identity number, grouped in fours as it is typed.
    pub id_number: MaskedDigitInput,
    pub email: TextInputState,
    pub address: TextInputState,
    pub notes: TextInputState,
    pub installation: Option<InstallationWindow>,
    pub field: OrderField,
    pub field_areas: Vec<(OrderField, Rect)>,
    /// Whole modal, for backdrop clicks.
    pub area: Rect,
}

impl OrderFormState {
    /// Opens the form for `package_id`; unknown ids yield `None`.
    pub fn open(package_id: &str) -> Option<Self> {
        let package = find_package(package_id)?;
        Some(Self {
            package,
            name: TextInputState::with_limit(60),
            phone: TextInputState::with_limit(20),
            id_number: MaskedDigitInput::default(),
            email: TextInputState::with_limit(80),
            address: TextInputState::with_limit(160),
            notes: TextInputState::with_limit(280),
            installation: None,
            field: OrderField::Name,
            field_areas: Vec::new(),
            area: Rect::default(),
        })
    }

    pub fn input_mut(&mut self, field: OrderField) -> Option<&mut TextInputState> {
        match field {
            OrderField::Name => Some(&mut self.name),
            OrderField::Phone => Some(&mut self.phone),
            OrderField::Email => Some(&mut self.email),
            OrderField::Address => Some(&mut self.address),
            OrderField::Notes => Some(&mut self.notes),
            _ => None,
        }
    }

    pub fn focus_next(&mut self, delta: isize) {
        self.field = cycle(&OrderField::ALL, self.field, delta);
    }

    pub fn cycle_installation(&mut self, delta: isize) {
        self.installation = cycle(&INSTALLATION_CHOICES, self.installation, delta);
    }

    pub fn installation_label(&self) -> &'static str {
        self.installation.map(InstallationWindow::label).unwrap_or("Pilih waktu instalasi")
    }

    /// Feeds a keystroke to the identity-number field, subject to its
    /// digit filter. Returns whether the keystroke was accepted.
    pub fn id_number_key(&mut self, entry: KeyEntry) -> bool {
        if !self.id_number.on_key_entry(entry) {
            return false;
        }
        match entry {
            KeyEntry::Char { ch, ctrl: false } => {
                self.id_number.insert_char(ch);
            }
            KeyEntry::Control(key) => {
                match key {
                    ControlKey::Backspace => self.id_number.backspace(),
                    ControlKey::Delete => self.id_number.delete(),
                    ControlKey::Left => self.id_number.move_left(),
                    ControlKey::Right => self.id_number.move_right(),
                    ControlKey::Home => self.id_number.move_home(),
                    ControlKey::End => self.id_number.move_end(),
                    _ => return false,
                }
            }
            KeyEntry::Char { .. } => return false,
        }
        true
    }

    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            name: self.name.input().to_string(),
            phone: self.phone.input().to_string(),
            id_number: self.id_number.current_display_text().to_string(),
            email: self.email.input().to_string(),
            address: self.address.input().to_string(),
            installation: self.installation,
            notes: self.notes.input().to_string(),
        }
    }

    /// Validates the order and prepares the hand-off. The modal closes only
    /// when the link was built.
    pub fn submit(&self, chat_number: &str) -> Vec<Effect> {
        let order = match self.draft().validate(self.package) {
            Ok(order) => order,
            Err(error) => {
                return vec![Effect::Notify {
                    message: error.to_string(),
                    level: NoticeLevel::Error,
                }];
            }
        };
        match chat_link(chat_number, &order.to_message()) {
            Ok(url) => {
                info!(package = self.package.id, "order prepared");
                vec![
                    Effect::CopyToClipboard(url.to_string()),
                    Effect::Notify {
                        message: format!("Pesanan {} siap dikirim via WhatsApp: {url}", self.package.name),
                        level: NoticeLevel::Success,
                    },
                    Effect::CloseModal,
                ]
            }
            Err(error) => {
                warn!(%error, "could not build chat link");
                vec![Effect::Notify {
                    message: "Gagal membuat tautan WhatsApp.".to_string(),
                    level: NoticeLevel::Error,
                }]
            }
        }
    }
}
