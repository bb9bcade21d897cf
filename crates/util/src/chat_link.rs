//! Chat-app hand-off: message templates for the contact and order forms and
//! the `wa.me` link that carries them.
//!
//! The link is only assembled here; opening it is left to the caller.

use beranda_types::{InstallationWindow, InternetPackage, find_package};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::validation::{FormError, is_valid_id_number, is_valid_phone, require};

/// Business number that receives the hand-off messages.
pub const DEFAULT_CHAT_NUMBER: &str = "6281246015380";

pub const BRAND_NAME: &str = "Bule Network";

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `input` the way browsers encode a URI component.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds `https://wa.me/<number>?text=<message>`.
pub fn chat_link(number: &str, message: &str) -> Result<Url, url::ParseError> {
    let number: String = number.chars().filter(char::is_ascii_digit).collect();
    Url::parse(&format!("https://wa.me/{number}?text={}", encode_uri_component(message)))
}

/// Submission of the general contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Package id from the catalog; unknown ids are echoed as-is.
    pub package_id: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&[
            ("Nama", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Telepon", self.phone.as_str()),
        ])
    }

    pub fn to_message(&self) -> String {
        let package = find_package(&self.package_id)
            .map(InternetPackage::contact_label)
            .unwrap_or_else(|| self.package_id.clone());

        let mut message = format!("*{BRAND_NAME} - Formulir Kontak*\n\n");
        message.push_str(&format!("📝 *Nama:* {}\n", self.name.trim()));
        message.push_str(&format!("📧 *Email:* {}\n", self.email.trim()));
        message.push_str(&format!("📱 *Telepon:* {}\n", self.phone.trim()));
        message.push_str(&format!("📦 *Paket:* {package}\n"));
        let note = self.message.trim();
        if !note.is_empty() {
            message.push_str(&format!("💬 *Pesan:* {note}\n"));
        }
        message.push_str(&format!("\n⚡ *Salam dari {BRAND_NAME}!*"));
        message
    }
}

/// Raw order-form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    pub id_number: String,
    pub email: String,
    pub address: String,
    pub installation: Option<InstallationWindow>,
    pub notes: String,
}

impl OrderDraft {
    /// Checks required fields, then the phone and identity-number formats.
    pub fn validate(&self, package: &'static InternetPackage) -> Result<OrderRequest, FormError> {
        require(&[
            ("Nama", self.name.as_str()),
            ("WhatsApp", self.phone.as_str()),
            ("Nomor KTP", self.id_number.as_str()),
            ("Alamat", self.address.as_str()),
        ])?;
        if !is_valid_phone(&self.phone) {
            return Err(FormError::InvalidPhone);
        }
        if !is_valid_id_number(&self.id_number) {
            return Err(FormError::InvalidIdNumber);
        }
        let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());
        Ok(OrderRequest {
            package,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            id_number: self.id_number.trim().to_string(),
            email: optional(&self.email),
            address: self.address.trim().to_string(),
            installation: self.installation,
            notes: optional(&self.notes),
        })
    }
}

/// A validated subscription order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub package: &'static InternetPackage,
    pub name: String,
    pub phone: String,
    pub id_number: String,
    pub email: Option<String>,
    pub address: String,
    pub installation: Option<InstallationWindow>,
    pub notes: Option<String>,
}

impl OrderRequest {
    pub fn to_message(&self) -> String {
        let mut message = format!("*{} - BERLANGGANAN PAKET INTERNET*\n\n", BRAND_NAME.to_uppercase());
        message.push_str("📦 *Paket yang Dipilih:*\n");
        message.push_str(&format!("• {}\n", self.package.name));
        message.push_str(&format!("• Kecepatan: {}\n", self.package.speed));
        message.push_str(&format!("• Harga: {}\n\n", self.package.price));

        message.push_str("👤 *Data Pelanggan:*\n");
        message.push_str(&format!("• Nama: {}\n", self.name));
        message.push_str(&format!("• WhatsApp: {}\n", self.phone));
        message.push_str(&format!("• Nomor KTP: {}\n", self.id_number));
        if let Some(email) = &self.email {
            message.push_str(&format!("• Email: {email}\n"));
        }
        message.push_str(&format!("• Alamat: {}\n\n", self.address));

        if let Some(window) = self.installation {
            message.push_str("🔧 *Waktu Instalasi:*\n");
            message.push_str(&format!("• {}\n\n", window.label()));
        }

        if let Some(notes) = &self.notes {
            message.push_str("📝 *Catatan:*\n");
            message.push_str(&format!("{notes}\n\n"));
        }

        message.push_str(&format!("⚡ *Terima kasih telah memilih {BRAND_NAME}!*\n"));
        message.push_str("Tim kami akan segera menghubungi Anda untuk proses selanjutnya.");
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            name: " Budi Santoso ".into(),
            phone: "0812-3456-7890".into(),
            id_number: "3201 2345 6789 0123".into(),
            email: String::new(),
            address: "Jl. Melati No. 5".into(),
            installation: Some(InstallationWindow::Morning),
            notes: "  ".into(),
        }
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_uri_component("*Hi!* (ok) ~_-."), "*Hi!*%20(ok)%20~_-.");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn chat_link_targets_number_with_encoded_text() {
        let link = chat_link("+62 812-4601-5380", "Halo, Bule Network").unwrap();
        assert_eq!(link.as_str(), "https://wa.me/6281246015380?text=Halo%2C%20Bule%20Network");
        assert_eq!(link.host_str(), Some("wa.me"));
    }

    #[test]
    fn contact_message_uses_package_label_and_skips_empty_note() {
        let request = ContactRequest {
            name: "Siti".into(),
            email: "siti@example.com".into(),
            phone: "082345678901".into(),
            package_id: "20mbps".into(),
            message: String::new(),
        };
        let message = request.to_message();
        assert!(message.starts_with("*Bule Network - Formulir Kontak*\n\n"));
        assert!(message.contains("📦 *Paket:* Paket 20 Mbps - Rp 200.000 (Terpopuler)\n"));
        assert!(!message.contains("Pesan"));
        assert!(message.ends_with("⚡ *Salam dari Bule Network!*"));
    }

    #[test]
    fn contact_requires_name_email_and_phone() {
        let request = ContactRequest {
            name: "Siti".into(),
            ..ContactRequest::default()
        };
        assert_eq!(request.validate(), Err(FormError::MissingFields(vec!["Email", "Telepon"])));
    }

    #[test]
    fn order_validation_trims_and_drops_blank_optionals() {
        let package = find_package("30mbps").unwrap();
        let order = draft().validate(package).unwrap();
        assert_eq!(order.name, "Budi Santoso");
        assert_eq!(order.email, None);
        assert_eq!(order.notes, None);

        let message = order.to_message();
        assert!(message.starts_with("*BULE NETWORK - BERLANGGANAN PAKET INTERNET*"));
        assert!(message.contains("• Kecepatan: 30 Mbps\n"));
        assert!(message.contains("• Pagi (08:00 - 12:00)\n\n"));
        assert!(!message.contains("Email"));
        assert!(!message.contains("Catatan"));
    }

    #[test]
    fn order_validation_reports_first_failing_rule() {
        let package = find_package("15mbps").unwrap();

        let mut missing = draft();
        missing.address.clear();
        assert_eq!(missing.validate(package), Err(FormError::MissingFields(vec!["Alamat"])));

        let mut bad_phone = draft();
        bad_phone.phone = "12345".into();
        assert_eq!(bad_phone.validate(package), Err(FormError::InvalidPhone));

        let mut short_id = draft();
        short_id.id_number = "3201 2345".into();
        assert_eq!(short_id.validate(package), Err(FormError::InvalidIdNumber));
    }
}
