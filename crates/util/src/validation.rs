//! Field validation for the contact and order forms.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Indonesian mobile numbers: `+62`, `62` or `0` prefix followed by 8–13 digits.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+62|62|0)[0-9]{8,13}$").expect("phone pattern compiles"));

/// National identity number (KTP): exactly 16 digits.
static ID_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{16}$").expect("id pattern compiles"));

/// Validation failures surfaced to the user. Messages are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Mohon lengkapi semua field yang wajib diisi (*): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Nomor WhatsApp tidak valid. Gunakan format: 08123456789")]
    InvalidPhone,
    #[error("Nomor KTP tidak valid. Nomor KTP harus 16 digit angka.")]
    InvalidIdNumber,
}

/// Removes whitespace and hyphens, the separators users type into numbers.
pub fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

/// Keeps only ASCII decimal digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_phone(input: &str) -> bool {
    PHONE_PATTERN.is_match(&strip_separators(input))
}

pub fn is_valid_id_number(input: &str) -> bool {
    ID_NUMBER_PATTERN.is_match(&strip_separators(input))
}

/// Fails with every blank field label, in the order given.
pub fn require(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() { Ok(()) } else { Err(FormError::MissingFields(missing)) }
}
