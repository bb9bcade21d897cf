use beranda_types::{Effect, NoticeLevel};
use beranda_util::{Bill, BillingError, CustomerDirectory, PaymentMethod};
use rand::Rng;
use ratatui::layout::Rect;
use tracing::info;

use crate::ui::components::common::{TextInputState, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingField {
    #[default]
    CustomerId,
    Method,
    Pay,
}

impl BillingField {
    pub const ALL: [BillingField; 3] = [BillingField::CustomerId, BillingField::Method, BillingField::Pay];
}

/// Clickable regions recorded during the last render, in page coordinates.
#[derive(Debug, Clone, Default)]
pub struct BillingAreas {
    pub customer_id: Rect,
    pub search_button: Rect,
    pub methods: Vec<(PaymentMethod, Rect)>,
    pub pay_button: Rect,
}

/// Bill lookup form: customer id entry, the bill found, the chosen payment
/// method, and the resulting instructions.
#[derive(Debug)]
pub struct BillingState {
    directory: CustomerDirectory,
    pub customer_id: TextInputState,
    pub bill: Option<Bill>,
    /// Method highlighted by the keyboard cursor.
    pub method_cursor: PaymentMethod,
    /// Method the user committed to.
    pub method: Option<PaymentMethod>,
    pub instructions: Option<String>,
    pub error: Option<String>,
    pub field: BillingField,
    pub areas: BillingAreas,
}

impl Default for BillingState {
    fn default() -> Self {
        Self::new(CustomerDirectory::seeded())
    }
}

impl BillingState {
    pub fn new(directory: CustomerDirectory) -> Self {
        Self {
            directory,
            customer_id: TextInputState::with_limit(12),
            bill: None,
            method_cursor: PaymentMethod::BankTransfer,
            method: None,
            instructions: None,
            error: None,
            field: BillingField::CustomerId,
            areas: BillingAreas::default(),
        }
    }

    pub fn example_ids(&self) -> String {
        self.directory.ids().collect::<Vec<_>>().join(", ")
    }

    /// Looks up the typed customer id. A new lookup discards any previous
    /// method choice and instructions.
    pub fn lookup(&mut self) -> Vec<Effect> {
        self.method = None;
        self.instructions = None;
        if self.customer_id.is_empty() {
            self.bill = None;
            self.error = Some("Silakan masukkan ID Pelanggan.".to_string());
            return Vec::new();
        }
        match self.directory.lookup(self.customer_id.input()) {
            Ok(bill) => {
                self.bill = Some(bill.clone());
                self.error = None;
                self.field = BillingField::Method;
                Vec::new()
            }
            Err(error) => {
                self.bill = None;
                let message = error.to_string();
                self.error = Some(message.clone());
                vec![Effect::Notify {
                    message,
                    level: NoticeLevel::Error,
                }]
            }
        }
    }

    pub fn cycle_method(&mut self, delta: isize) {
        self.method_cursor = cycle(&PaymentMethod::ALL, self.method_cursor, delta);
    }

    pub fn choose_method(&mut self, method: PaymentMethod) {
        self.method_cursor = method;
        self.method = Some(method);
        self.instructions = None;
    }

    /// Produces payment instructions for the chosen method. Fails when no
    /// method has been chosen. Card payments settle the bill immediately.
    pub fn pay<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Effect>, BillingError> {
        let Some(bill) = self.bill.as_ref() else {
            return Ok(Vec::new());
        };
        let method = self.method.ok_or(BillingError::NoPaymentMethod)?;
        let instructions = method.instructions(bill, rng);
        info!(customer_id = %bill.customer_id, method = method.id(), "payment instructions issued");

        let mut effects = Vec::new();
        if method.settles_immediately() {
            let paid = self.directory.mark_paid(&bill.customer_id)?.clone();
            self.bill = Some(paid);
            effects.push(Effect::Notify {
                message: "Pembayaran berhasil! Terima kasih.".to_string(),
                level: NoticeLevel::Success,
            });
        }
        self.instructions = Some(instructions);
        Ok(effects)
    }

    /// Clears the form but keeps the directory, including paid bills.
    pub fn reset(&mut self) {
        self.customer_id.clear();
        self.bill = None;
        self.method = None;
        self.instructions = None;
        self.error = None;
        self.field = BillingField::CustomerId;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beranda_util::BillStatus;
    use rand::{SeedableRng, rngs::StdRng};

    fn looked_up(id: &str) -> BillingState {
        let mut state = BillingState::default();
        state.customer_id.set_input(id);
        state.lookup();
        state
    }

    #[test]
    fn lookup_finds_bill_and_moves_to_methods() {
        let state = looked_up(" int001 ");
        assert_eq!(state.bill.as_ref().map(|b| b.name.as_str()), Some("Budi Santoso"));
        assert_eq!(state.field, BillingField::Method);
        assert!(state.error.is_none());
    }

    #[test]
    fn unknown_id_reports_error() {
        let mut state = BillingState::default();
        state.customer_id.set_input("ABC");
        let effects = state.lookup();
        assert!(state.bill.is_none());
        assert!(state.error.as_deref().unwrap().contains("INT001, INT002, INT003"));
        assert!(matches!(effects.as_slice(), [Effect::Notify { level: NoticeLevel::Error, .. }]));
    }

    #[test]
    fn blank_id_asks_for_input() {
        let mut state = BillingState::default();
        assert!(state.lookup().is_empty());
        assert_eq!(state.error.as_deref(), Some("Silakan masukkan ID Pelanggan."));
    }

    #[test]
    fn paying_requires_a_method() {
        let mut state = looked_up("INT002");
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(state.pay(&mut rng).unwrap_err(), BillingError::NoPaymentMethod);

        state.cycle_method(3);
        state.choose_method(state.method_cursor);
        assert_eq!(state.method, Some(PaymentMethod::VirtualAccount));
        assert!(state.pay(&mut rng).unwrap().is_empty());
        assert!(state.instructions.as_deref().unwrap().contains("70012"));
    }

    #[test]
    fn card_payment_settles_and_survives_reset() {
        let mut state = looked_up("INT003");
        state.choose_method(PaymentMethod::CreditCard);
        let effects = state.pay(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(effects.len(), 1);
        assert_eq!(state.bill.as_ref().map(|b| b.status), Some(BillStatus::Paid));

        state.reset();
        state.customer_id.set_input("INT003");
        state.lookup();
        assert_eq!(state.bill.as_ref().map(|b| b.status), Some(BillStatus::Paid));
        assert!(state.method.is_none());
    }
}
