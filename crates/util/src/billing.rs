//! Bill lookup demo.
//!
//! A fixed, in-memory directory of customer bills plus the instruction text
//! shown for each payment method. Nothing here moves money; the "payment" is a
//! set of instructions and, for cards, a status flip on the in-memory bill.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Bank prefix of generated virtual-account numbers.
pub const VIRTUAL_ACCOUNT_PREFIX: &str = "70012";

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("ID Pelanggan '{id}' tidak ditemukan. Contoh ID yang tersedia: {}", .available.join(", "))]
    UnknownCustomer { id: String, available: Vec<String> },
    #[error("metode pembayaran tidak dikenal: {0}")]
    UnknownPaymentMethod(String),
    #[error("Silakan pilih metode pembayaran terlebih dahulu.")]
    NoPaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Unpaid,
    Paid,
}

/// Outstanding bill for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub customer_id: String,
    pub name: String,
    pub package: String,
    pub phone: String,
    /// Amount due, in rupiah.
    pub amount: u64,
    /// First day of the billed month.
    pub period: NaiveDate,
    pub due_date: NaiveDate,
    pub status: BillStatus,
}

impl Bill {
    pub fn amount_label(&self) -> String {
        format_rupiah(self.amount)
    }

    /// `September 2024`
    pub fn period_label(&self) -> String {
        format!("{} {}", month_name(self.period), self.period.year())
    }

    /// `15 Oktober 2024`
    pub fn due_date_label(&self) -> String {
        format!("{} {} {}", self.due_date.day(), month_name(self.due_date), self.due_date.year())
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Formats an amount with Indonesian thousands separators: `Rp 499.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Bills keyed by customer id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    bills: IndexMap<String, Bill>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory with the three demo customers.
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        let seeds = [
            ("INT001", "Budi Santoso", "Paket Premium", "081234567890", 499_000, 15),
            ("INT002", "Siti Nurhaliza", "Paket Basic", "082345678901", 299_000, 20),
            ("INT003", "Ahmad Rahman", "Paket Ultra", "083456789012", 799_000, 10),
        ];
        for (id, name, package, phone, amount, due_day) in seeds {
            directory.insert(Bill {
                customer_id: id.to_string(),
                name: name.to_string(),
                package: package.to_string(),
                phone: phone.to_string(),
                amount,
                period: date(2024, 9, 1),
                due_date: date(2024, 10, due_day),
                status: BillStatus::Unpaid,
            });
        }
        directory
    }

    pub fn insert(&mut self, bill: Bill) {
        self.bills.insert(bill.customer_id.clone(), bill);
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bills.keys().map(String::as_str)
    }

    /// Looks up a bill; the id is trimmed and upper-cased first.
    pub fn lookup(&self, raw_id: &str) -> Result<&Bill, BillingError> {
        let id = normalize_id(raw_id);
        debug!(customer_id = %id, "looking up bill");
        self.bills.get(&id).ok_or_else(|| self.unknown(id))
    }

    pub fn mark_paid(&mut self, raw_id: &str) -> Result<&Bill, BillingError> {
        let id = normalize_id(raw_id);
        let error = self.unknown(id.clone());
        let bill = self.bills.get_mut(&id).ok_or(error)?;
        bill.status = BillStatus::Paid;
        Ok(bill)
    }

    fn unknown(&self, id: String) -> BillingError {
        BillingError::UnknownCustomer {
            id,
            available: self.ids().map(str::to_string).collect(),
        }
    }
}

fn normalize_id(raw_id: &str) -> String {
    raw_id.trim().to_uppercase()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentMethod {
    BankTransfer,
    EWallet,
    CreditCard,
    VirtualAccount,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::BankTransfer,
        PaymentMethod::EWallet,
        PaymentMethod::CreditCard,
        PaymentMethod::VirtualAccount,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "bank-transfer",
            PaymentMethod::EWallet => "e-wallet",
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::VirtualAccount => "virtual-account",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Transfer Bank",
            PaymentMethod::EWallet => "E-Wallet",
            PaymentMethod::CreditCard => "Kartu Kredit",
            PaymentMethod::VirtualAccount => "Virtual Account",
        }
    }

    /// Whether choosing this method settles the bill immediately.
    pub const fn settles_immediately(self) -> bool {
        matches!(self, PaymentMethod::CreditCard)
    }

    /// Instruction text shown after the user confirms payment.
    pub fn instructions<R: Rng + ?Sized>(self, bill: &Bill, rng: &mut R) -> String {
        let amount = bill.amount_label();
        match self {
            PaymentMethod::BankTransfer => format!(
                "🏦 Silakan transfer ke rekening berikut:\n\nBank BCA: 123-456-789\nAtas Nama: PT InternetKu\nJumlah: {amount}\n\n✅ Setelah transfer, tagihan akan otomatis terbayar dalam 1x24 jam."
            ),
            PaymentMethod::EWallet => format!(
                "📱 Scan QR code dengan aplikasi e-wallet Anda:\n\nAtau gunakan nomor virtual: 08123456789\nJumlah: {amount}\n\n💡 Pembayaran akan langsung terverifikasi"
            ),
            PaymentMethod::CreditCard => {
                "💳 Pembayaran Berhasil!\n\nTerima kasih! Tagihan Anda telah berhasil dibayar.".to_string()
            }
            PaymentMethod::VirtualAccount => format!(
                "🏧 Nomor Virtual Account Anda:\n\n{}\n\nJumlah: {amount}\nBerlaku hingga: {}\n\n💳 Bayar melalui ATM, internet banking, atau mobile banking.",
                virtual_account_number(rng),
                bill.due_date_label()
            ),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|method| method.id() == wanted)
            .ok_or_else(|| BillingError::UnknownPaymentMethod(s.to_string()))
    }
}

/// `70012` followed by a zero-padded random 9-digit customer code.
pub fn virtual_account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let customer_code: u32 = rng.random_range(0..1_000_000_000);
    format!("{VIRTUAL_ACCOUNT_PREFIX}{customer_code:09}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn lookup_normalizes_the_id() {
        let directory = CustomerDirectory::seeded();
        let bill = directory.lookup("  int002 ").unwrap();
        assert_eq!(bill.name, "Siti Nurhaliza");
        assert_eq!(bill.amount_label(), "Rp 299.000");
        assert_eq!(bill.period_label(), "September 2024");
        assert_eq!(bill.due_date_label(), "20 Oktober 2024");
    }

    #[test]
    fn unknown_id_lists_available_ids() {
        let directory = CustomerDirectory::seeded();
        let error = directory.lookup("INT404").unwrap_err();
        assert_eq!(
            error.to_string(),
            "ID Pelanggan 'INT404' tidak ditemukan. Contoh ID yang tersedia: INT001, INT002, INT003"
        );
    }

    #[test]
    fn rupiah_grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(1_500), "Rp 1.500");
        assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
    }

    #[test]
    fn virtual_account_number_is_prefixed_and_padded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let number = virtual_account_number(&mut rng);
            assert_eq!(number.len(), 14);
            assert!(number.starts_with(VIRTUAL_ACCOUNT_PREFIX));
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn instructions_mention_amount_and_due_date() {
        let directory = CustomerDirectory::seeded();
        let bill = directory.lookup("INT003").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let transfer = PaymentMethod::BankTransfer.instructions(bill, &mut rng);
        assert!(transfer.contains("Jumlah: Rp 799.000"));

        let virtual_account = PaymentMethod::VirtualAccount.instructions(bill, &mut rng);
        assert!(virtual_account.contains("Berlaku hingga: 10 Oktober 2024"));
        assert!(virtual_account.contains(VIRTUAL_ACCOUNT_PREFIX));
    }

    #[test]
    fn card_payment_marks_bill_paid() {
        let mut directory = CustomerDirectory::seeded();
        assert!(PaymentMethod::CreditCard.settles_immediately());
        let bill = directory.mark_paid("int001").unwrap();
        assert_eq!(bill.status, BillStatus::Paid);
        assert!(directory.mark_paid("INT999").is_err());
    }

    #[test]
    fn payment_method_parses_from_id() {
        assert_eq!("E-Wallet".parse::<PaymentMethod>().unwrap(), PaymentMethod::EWallet);
        assert!(matches!("cash".parse::<PaymentMethod>(), Err(BillingError::UnknownPaymentMethod(_))));
    }
}
