//! Cross-border transfer page state.

use std::time::Duration;

use chrono::Local;
use uuid::Uuid;

use crate::async_task::{spawn_delayed, take_ready, PendingTask};
use crate::data::{Amount, CrossBorderTransfer, Currency};
use crate::state::form::TextField;
use crate::state::list::cycle;
use crate::status::PaymentStatus;
use crate::validation;

/// Fee in basis points of the send amount.
pub const FEE_BPS: i64 = 100;
pub const MIN_FEE: Amount = Amount::from_cents(299);
pub const SEND_LIMIT: Amount = Amount::from_dollars(50_000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub currency: Currency,
    pub rate: f64,
    pub send: Amount,
    pub fee: Amount,
    /// Amount delivered, in minor units of `currency`.
    pub receive: Amount,
}

/// Prices a transfer of `send` US dollars into `currency`.
pub fn quote(send: Amount, currency: Currency) -> Quote {
    let fee = send.basis_points(FEE_BPS).max(MIN_FEE);
    let rate = currency.usd_rate();
    let net = if send > fee { send - fee } else { Amount::ZERO };
    Quote {
        currency,
        rate,
        send,
        fee,
        receive: net.convert(rate),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossBorderField {
    #[default]
    Recipient,
    Currency,
    Amount,
}

impl CrossBorderField {
    const ORDER: [CrossBorderField; 3] = [
        CrossBorderField::Recipient,
        CrossBorderField::Currency,
        CrossBorderField::Amount,
    ];

    pub fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[cycle(idx, Self::ORDER.len(), forward)]
    }
}

#[derive(Debug)]
pub struct CrossBorderState {
    pub recipient: TextField,
    pub amount: TextField,
    pub currency_index: usize,
    pub focus: CrossBorderField,
    /// Newest first.
    pub history: Vec<CrossBorderTransfer>,
    pub pending: Option<PendingTask<CrossBorderTransfer>>,
    delay: Duration,
}

impl CrossBorderState {
    pub fn new(mut history: Vec<CrossBorderTransfer>, delay: Duration) -> Self {
        history.sort_by(|a, b| b.created.cmp(&a.created));
        Self {
            recipient: TextField::with_max_len(40),
            amount: TextField::with_max_len(14),
            currency_index: 0,
            focus: CrossBorderField::Recipient,
            history,
            pending: None,
            delay,
        }
    }

    pub fn currency(&self) -> Currency {
        Currency::DESTINATIONS[self.currency_index % Currency::DESTINATIONS.len()]
    }

    pub fn cycle_currency(&mut self, forward: bool) {
        self.currency_index = cycle(self.currency_index, Currency::DESTINATIONS.len(), forward);
    }

    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            CrossBorderField::Recipient => Some(&mut self.recipient),
            CrossBorderField::Amount => Some(&mut self.amount),
            CrossBorderField::Currency => None,
        }
    }

    /// Live quote for the amount typed so far, if it parses.
    pub fn live_quote(&self) -> Option<Quote> {
        validation::amount(&self.amount.value)
            .ok()
            .map(|send| quote(send, self.currency()))
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates the form and starts the simulated send.
    ///
    /// Returns `false` if the form is invalid or a send is already running.
    pub fn submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        let recipient = self.recipient.check(|v| validation::required(v, "Recipient"));
        let send = self.amount.check(|v| validation::amount_within(v, SEND_LIMIT));
        let (Some(recipient), Some(send)) = (recipient, send) else {
            return false;
        };

        let q = quote(send, self.currency());
        let transfer = CrossBorderTransfer {
            id: Uuid::new_v4(),
            recipient,
            currency: q.currency,
            send_amount: q.send,
            fee: q.fee,
            receive_amount: q.receive,
            created: Local::now().naive_local(),
            status: PaymentStatus::Pending,
        };
        tracing::info!(
            currency = q.currency.code(),
            send = %q.send,
            "sending cross-border transfer"
        );
        self.pending = Some(spawn_delayed("cross-border transfer", self.delay, move || transfer));
        true
    }

    pub fn tick(&mut self) -> Option<&CrossBorderTransfer> {
        let transfer = take_ready(&mut self.pending)?;
        self.recipient.clear();
        self.amount.clear();
        self.history.insert(0, transfer);
        self.history.first()
    }
}
