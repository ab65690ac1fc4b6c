//! P2P / A2A transfer page state.
//!
//! Two independent forms behind a tab switch and one shared history list.
//! A submission is validated synchronously; only a fully valid form starts the
//! simulated send, and only a finished send appends to the history.

use std::time::Duration;

use chrono::Local;
use uuid::Uuid;

use crate::async_task::{spawn_delayed, take_ready, PendingTask};
use crate::data::{Amount, Transaction, TransferKind};
use crate::state::form::TextField;
use crate::state::list::cycle;
use crate::status::PaymentStatus;
use crate::validation;

/// Per-transfer ceiling for instant payments.
pub const TRANSFER_LIMIT: Amount = Amount::from_dollars(25_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferTab {
    #[default]
    P2p,
    A2a,
}

impl TransferTab {
    pub fn kind(self) -> TransferKind {
        match self {
            TransferTab::P2p => TransferKind::P2P,
            TransferTab::A2a => TransferKind::A2A,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TransferTab::P2p => TransferTab::A2a,
            TransferTab::A2a => TransferTab::P2p,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct P2pForm {
    pub phone: TextField,
    pub amount: TextField,
    pub note: TextField,
    pub focus: usize,
}

impl P2pForm {
    pub const FIELDS: [&'static str; 3] = ["Phone number", "Amount", "Note"];

    pub fn new() -> Self {
        Self {
            phone: TextField::with_max_len(20),
            amount: TextField::with_max_len(14),
            note: TextField::with_max_len(60),
            focus: 0,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.phone,
            1 => &mut self.amount,
            _ => &mut self.note,
        }
    }

    pub fn fields(&self) -> [&TextField; 3] {
        [&self.phone, &self.amount, &self.note]
    }

    /// Validates every field; on success returns the transaction to send.
    fn validate(&mut self) -> Option<Transaction> {
        let phone = self.phone.check(validation::phone);
        let amount = self.amount.check(|v| validation::amount_within(v, TRANSFER_LIMIT));
        Some(new_transaction(TransferKind::P2P, phone?, amount?, &self.note.value))
    }
}

#[derive(Debug, Clone, Default)]
pub struct A2aForm {
    pub routing: TextField,
    pub account: TextField,
    pub amount: TextField,
    pub note: TextField,
    pub focus: usize,
}

impl A2aForm {
    pub const FIELDS: [&'static str; 4] = ["Routing number", "Account number", "Amount", "Note"];

    pub fn new() -> Self {
        Self {
            routing: TextField::with_max_len(9),
            account: TextField::with_max_len(12),
            amount: TextField::with_max_len(14),
            note: TextField::with_max_len(60),
            focus: 0,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.routing,
            1 => &mut self.account,
            2 => &mut self.amount,
            _ => &mut self.note,
        }
    }

    pub fn fields(&self) -> [&TextField; 4] {
        [&self.routing, &self.account, &self.amount, &self.note]
    }

    fn validate(&mut self) -> Option<Transaction> {
        let routing = self.routing.check(validation::routing_number);
        let account = self.account.check(validation::account_number);
        let amount = self.amount.check(|v| validation::amount_within(v, TRANSFER_LIMIT));
        routing?;
        let account = account?;
        let skip = account.chars().count().saturating_sub(4);
        let last4: String = account.chars().skip(skip).collect();
        let masked = format!("Account ••{}", last4);
        Some(new_transaction(TransferKind::A2A, masked, amount?, &self.note.value))
    }
}

fn new_transaction(
    kind: TransferKind,
    counterparty: String,
    amount: Amount,
    note: &str,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        kind,
        counterparty,
        amount,
        note: note.trim().to_string(),
        created: Local::now().naive_local(),
        status: PaymentStatus::Completed,
    }
}

/// Result of pressing submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Sending,
    Invalid,
    Busy,
}

#[derive(Debug)]
pub struct TransfersState {
    pub tab: TransferTab,
    pub p2p: P2pForm,
    pub a2a: A2aForm,
    /// Newest first.
    pub history: Vec<Transaction>,
    pub pending: Option<PendingTask<Transaction>>,
    delay: Duration,
}

impl TransfersState {
    pub fn new(mut history: Vec<Transaction>, delay: Duration) -> Self {
        history.sort_by(|a, b| b.created.cmp(&a.created));
        Self {
            tab: TransferTab::P2p,
            p2p: P2pForm::new(),
            a2a: A2aForm::new(),
            history,
            pending: None,
            delay,
        }
    }

    pub fn switch_tab(&mut self) {
        self.tab = self.tab.toggled();
    }

    pub fn field_count(&self) -> usize {
        match self.tab {
            TransferTab::P2p => P2pForm::FIELDS.len(),
            TransferTab::A2a => A2aForm::FIELDS.len(),
        }
    }

    pub fn focus(&self) -> usize {
        match self.tab {
            TransferTab::P2p => self.p2p.focus,
            TransferTab::A2a => self.a2a.focus,
        }
    }

    pub fn move_focus(&mut self, forward: bool) {
        let count = self.field_count();
        match self.tab {
            TransferTab::P2p => self.p2p.focus = cycle(self.p2p.focus, count, forward),
            TransferTab::A2a => self.a2a.focus = cycle(self.a2a.focus, count, forward),
        }
    }

    pub fn focused_field(&mut self) -> &mut TextField {
        match self.tab {
            TransferTab::P2p => {
                let idx = self.p2p.focus;
                self.p2p.field_mut(idx)
            }
            TransferTab::A2a => {
                let idx = self.a2a.focus;
                self.a2a.field_mut(idx)
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates the active form and, if valid, starts the simulated send.
    pub fn submit(&mut self) -> SubmitResult {
        if self.is_sending() {
            return SubmitResult::Busy;
        }
        let draft = match self.tab {
            TransferTab::P2p => self.p2p.validate(),
            TransferTab::A2a => self.a2a.validate(),
        };
        let Some(transaction) = draft else {
            tracing::debug!(tab = ?self.tab, "transfer form invalid");
            return SubmitResult::Invalid;
        };
        tracing::info!(
            kind = transaction.kind.label(),
            amount = %transaction.amount,
            "sending transfer"
        );
        self.pending = Some(spawn_delayed("send transfer", self.delay, move || transaction));
        SubmitResult::Sending
    }

    /// Appends the transaction once the simulated send finishes and clears the form.
    pub fn tick(&mut self) -> Option<&Transaction> {
        let transaction = take_ready(&mut self.pending)?;
        match transaction.kind {
            TransferKind::P2P => self.p2p = P2pForm::new(),
            TransferKind::A2A => self.a2a = A2aForm::new(),
        }
        self.history.insert(0, transaction);
        self.history.first()
    }
}
