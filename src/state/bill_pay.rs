//! Bill pay page state.
//!
//! Owns the local payments list, the status tab, both modal states and the
//! simulated scheduling task. The modals are opened and closed only through
//! this struct; each open resets the modal's fields.

use std::time::Duration;

use chrono::NaiveDate;

use crate::async_task::{spawn_delayed, take_ready, PendingTask};
use crate::data::{BillPayment, Biller, PaymentMethod};
use crate::state::biller_search::BillerSearchState;
use crate::state::list::{cycle, ListCursor};
use crate::state::payment_setup::PaymentSetupState;
use crate::status::{PaymentStatus, StatusStyle};

/// Tab filters in display order; `None` is "All".
pub const BILL_PAY_TABS: [Option<PaymentStatus>; 5] = [
    None,
    Some(PaymentStatus::Scheduled),
    Some(PaymentStatus::Paid),
    Some(PaymentStatus::Pending),
    Some(PaymentStatus::Failed),
];

/// Payments with the given status, or all of them for `None`.
pub fn filter_payments(
    payments: &[BillPayment],
    status: Option<PaymentStatus>,
) -> Vec<&BillPayment> {
    payments
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .collect()
}

pub fn tab_label(payments: &[BillPayment], status: Option<PaymentStatus>) -> String {
    let name = status.map_or("All", |s| s.label());
    format!("{} ({})", name, filter_payments(payments, status).len())
}

#[derive(Debug)]
pub struct BillPayState {
    pub payments: Vec<BillPayment>,
    pub tab: usize,
    pub cursor: ListCursor,
    pub biller_search_open: bool,
    pub payment_setup_open: bool,
    pub biller_search: BillerSearchState,
    pub payment_setup: PaymentSetupState,
    pub pending: Option<PendingTask<BillPayment>>,
    delay: Duration,
}

impl BillPayState {
    pub fn new(
        payments: Vec<BillPayment>,
        billers: Vec<Biller>,
        methods: Vec<PaymentMethod>,
        delay: Duration,
    ) -> Self {
        Self {
            payments,
            tab: 0,
            cursor: ListCursor::new(),
            biller_search_open: false,
            payment_setup_open: false,
            biller_search: BillerSearchState::new(billers),
            payment_setup: PaymentSetupState::new(methods),
            pending: None,
            delay,
        }
    }

    pub fn tab_status(&self) -> Option<PaymentStatus> {
        BILL_PAY_TABS.get(self.tab).copied().flatten()
    }

    pub fn filtered(&self) -> Vec<&BillPayment> {
        filter_payments(&self.payments, self.tab_status())
    }

    pub fn tab_labels(&self) -> Vec<String> {
        BILL_PAY_TABS
            .iter()
            .map(|status| tab_label(&self.payments, *status))
            .collect()
    }

    pub fn next_tab(&mut self, forward: bool) {
        self.tab = cycle(self.tab, BILL_PAY_TABS.len(), forward);
        self.cursor.reset();
    }

    pub fn navigate_down(&mut self) -> bool {
        let len = self.filtered().len();
        self.cursor.navigate_down(len)
    }

    pub fn any_modal_open(&self) -> bool {
        self.biller_search_open || self.payment_setup_open
    }

    pub fn open_biller_search(&mut self) {
        self.biller_search.reset();
        self.payment_setup_open = false;
        self.biller_search_open = true;
    }

    /// Moves from biller search to payment setup for the chosen biller.
    pub fn choose_biller(&mut self, biller: Biller, today: NaiveDate) {
        self.biller_search_open = false;
        self.payment_setup.reset(biller, today);
        self.payment_setup_open = true;
    }

    pub fn close_modals(&mut self) {
        self.biller_search_open = false;
        self.payment_setup_open = false;
    }

    pub fn is_scheduling(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the simulated scheduling call for a payment built by the setup modal.
    pub fn schedule(&mut self, payment: BillPayment) {
        self.close_modals();
        tracing::info!(
            biller = %payment.biller,
            amount = %payment.amount,
            "scheduling bill payment"
        );
        self.pending = Some(spawn_delayed("schedule bill payment", self.delay, move || payment));
    }

    /// Appends the payment once the simulated call finishes.
    pub fn tick(&mut self) -> Option<&BillPayment> {
        let payment = take_ready(&mut self.pending)?;
        self.payments.push(payment);
        self.payments.last()
    }
}
