//! Payment setup modal state.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::data::{BillPayment, Biller, PaymentMethod};
use crate::state::form::TextField;
use crate::state::list::cycle;
use crate::status::PaymentStatus;
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    Amount,
    Date,
    Method,
}

impl SetupField {
    const ORDER: [SetupField; 3] = [SetupField::Amount, SetupField::Date, SetupField::Method];

    pub fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[cycle(idx, Self::ORDER.len(), forward)]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentSetupState {
    pub biller: Option<Biller>,
    pub methods: Vec<PaymentMethod>,
    pub amount: TextField,
    pub date: TextField,
    pub method_index: usize,
    pub focus: SetupField,
}

impl PaymentSetupState {
    pub fn new(methods: Vec<PaymentMethod>) -> Self {
        Self {
            methods,
            ..Default::default()
        }
    }

    /// Clears every field for a new payment to `biller`, defaulting the date
    /// to a week from `today`.
    pub fn reset(&mut self, biller: Biller, today: NaiveDate) {
        let default_date = today.checked_add_days(Days::new(7)).unwrap_or(today);
        self.biller = Some(biller);
        self.amount = TextField::with_max_len(14);
        self.date = TextField::with_value(&default_date.format("%Y-%m-%d").to_string());
        self.date.max_len = Some(10);
        self.method_index = 0;
        self.focus = SetupField::Amount;
    }

    pub fn method(&self) -> Option<&PaymentMethod> {
        self.methods.get(self.method_index)
    }

    pub fn cycle_method(&mut self, forward: bool) {
        self.method_index = cycle(self.method_index, self.methods.len(), forward);
    }

    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SetupField::Amount => Some(&mut self.amount),
            SetupField::Date => Some(&mut self.date),
            SetupField::Method => None,
        }
    }

    /// Validates every field and builds the payment, or records the errors.
    pub fn submit(&mut self, today: NaiveDate) -> Option<BillPayment> {
        let amount = self.amount.check(validation::amount);
        let due_date = self.date.check(|v| validation::future_date(v, today));
        let biller = self.biller.as_ref()?;
        let method = self.method()?;
        Some(BillPayment {
            id: Uuid::new_v4(),
            biller: biller.name.clone(),
            amount: amount?,
            due_date: due_date?,
            method: method.label.clone(),
            status: PaymentStatus::Scheduled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Amount, FakeStore};
    use crate::validation::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn opened() -> PaymentSetupState {
        let store = FakeStore::new();
        let mut s = PaymentSetupState::new(store.payment_methods);
        s.reset(store.billers[0].clone(), today());
        s
    }

    #[test]
    fn test_reset_prefills_date() {
        let s = opened();
        assert_eq!(s.date.value, "2026-10-23");
        assert!(s.amount.value.is_empty());
        assert_eq!(s.focus, SetupField::Amount);
    }

    #[test]
    fn test_submit_builds_scheduled_payment() {
        let mut s = opened();
        s.amount = TextField::with_value("842.17");
        s.cycle_method(true);
        let payment = s.submit(today()).unwrap();
        assert_eq!(payment.amount, Amount::from_cents(842_17));
        assert_eq!(payment.status, PaymentStatus::Scheduled);
        assert_eq!(payment.biller, "Pacific Gas & Electric");
        assert_eq!(payment.method, "Business Visa ••8890");
    }

    #[test]
    fn test_submit_reports_each_bad_field() {
        let mut s = opened();
        s.amount = TextField::with_value("abc");
        s.date = TextField::with_value("2026-01-01");
        assert!(s.submit(today()).is_none());
        assert_eq!(s.amount.error, Some(ValidationError::AmountFormat));
        assert_eq!(s.date.error, Some(ValidationError::DateInPast));
    }

    #[test]
    fn test_field_focus_wraps() {
        assert_eq!(SetupField::Method.step(true), SetupField::Amount);
        assert_eq!(SetupField::Amount.step(false), SetupField::Method);
    }

    #[test]
    fn test_method_field_has_no_text_input() {
        let mut s = opened();
        s.focus = SetupField::Method;
        assert!(s.focused_field().is_none());
    }
}
