use beranda_types::{Effect, NoticeLevel, PACKAGES};
use beranda_util::{ContactRequest, chat_link};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::ui::components::common::{TextInputState, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Phone,
    Package,
    Message,
    Submit,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Package,
        ContactField::Message,
        ContactField::Submit,
    ];

    pub fn is_text(self) -> bool {
        !matches!(self, ContactField::Package | ContactField::Submit)
    }
}

/// General enquiry form that hands its message off to the chat app.
#[derive(Debug)]
pub struct ContactFormState {
    pub name: TextInputState,
    pub email: TextInputState,
    pub phone: TextInputState,
    pub message: TextInputState,
    /// Index into the package catalog.
    pub package_index: usize,
    pub field: ContactField,
    /// Row of each field, recorded during render for mouse focus.
    pub field_areas: Vec<(ContactField, Rect)>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            name: TextInputState::with_limit(60),
            email: TextInputState::with_limit(80),
            phone: TextInputState::with_limit(20),
            message: TextInputState::with_limit(280),
            package_index: PACKAGES.iter().position(|p| p.featured).unwrap_or(0),
            field: ContactField::Name,
            field_areas: Vec::new(),
        }
    }
}

impl ContactFormState {
    pub fn input_mut(&mut self, field: ContactField) -> Option<&mut TextInputState> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Message => Some(&mut self.message),
            ContactField::Package | ContactField::Submit => None,
        }
    }

    pub fn focus_next(&mut self, delta: isize) {
        self.field = cycle(&ContactField::ALL, self.field, delta);
    }

    pub fn cycle_package(&mut self, delta: isize) {
        let len = PACKAGES.len() as isize;
        self.package_index = (self.package_index as isize + delta).rem_euclid(len) as usize;
    }

    pub fn package_label(&self) -> String {
        PACKAGES.get(self.package_index).map(|p| p.contact_label()).unwrap_or_default()
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.input().to_string(),
            email: self.email.input().to_string(),
            phone: self.phone.input().to_string(),
            package_id: PACKAGES.get(self.package_index).map(|p| p.id.to_string()).unwrap_or_default(),
            message: self.message.input().to_string(),
        }
    }

    /// Validates the form and builds the chat link. On success the link is
    /// copied and announced, and the form is cleared.
    pub fn submit(&mut self, chat_number: &str) -> Vec<Effect> {
        let request = self.to_request();
        if let Err(error) = request.validate() {
            return vec![Effect::Notify {
                message: error.to_string(),
                level: NoticeLevel::Error,
            }];
        }
        match chat_link(chat_number, &request.to_message()) {
            Ok(url) => {
                info!(package = %request.package_id, "contact message prepared");
                self.reset();
                vec![
                    Effect::CopyToClipboard(url.to_string()),
                    Effect::Notify {
                        message: format!("Pesan siap dikirim via WhatsApp: {url}"),
                        level: NoticeLevel::Success,
                    },
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

    pub fn reset(&mut self) {
        let areas = std::mem::take(&mut self.field_areas);
        *self = Self {
            field_areas: areas,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.name.set_input("Siti Aminah");
        form.email.set_input("siti@example.com");
        form.phone.set_input("082345678901");
        form.message.set_input("Apakah tersedia di Ubud?");
        form
    }

    #[test]
    fn missing_fields_are_reported_and_input_kept() {
        let mut form = ContactFormState::default();
        form.name.set_input("Siti");
        let effects = form.submit("6281246015380");
        match effects.as_slice() {
            [Effect::Notify { message, level }] => {
                assert_eq!(*level, NoticeLevel::Error);
                assert!(message.ends_with("Email, Telepon"));
            }
            other => panic!("unexpected effects: {other:?}"),
        }
        assert_eq!(form.name.input(), "Siti");
    }

    #[test]
    fn submit_copies_link_and_resets() {
        let mut form = filled();
        let effects = form.submit("6281246015380");
        let [Effect::CopyToClipboard(url), Effect::Notify { level, .. }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        assert_eq!(*level, NoticeLevel::Success);
        assert!(url.starts_with("https://wa.me/6281246015380?text="));
        assert!(url.contains("Siti%20Aminah"));
        assert!(form.name.input().is_empty());
    }

    #[test]
    fn package_defaults_to_featured_and_wraps() {
        let mut form = ContactFormState::default();
        assert!(PACKAGES[form.package_index].featured);
        form.package_index = 0;
        form.cycle_package(-1);
        assert_eq!(form.package_index, PACKAGES.len() - 1);
        assert_eq!(form.to_request().package_id, PACKAGES[PACKAGES.len() - 1].id);
    }

    #[test]
    fn only_text_fields_have_inputs() {
        let mut form = ContactFormState::default();
        assert!(form.input_mut(ContactField::Package).is_none());
        assert!(form.input_mut(ContactField::Message).is_some());
        form.field = ContactField::Submit;
        form.focus_next(1);
        assert_eq!(form.field, ContactField::Name);
    }
}
