//! Page views.
//!
//! Every content page implements [`Page`]. The app mounts exactly one page at a
//! time through [`mount`] and drops it when the router resolves to something
//! else, which also cancels any simulated call the page still has in flight.

use std::time::Duration;

use chrono::NaiveDate;
use ratatui::{layout::Rect, Frame};

use crate::data::{FakeStore, Invoice};
use crate::key_handler::KeyAction;
use crate::render_context::RenderContext;
use crate::router::{NavRequest, PageId};

pub mod ask_penny;
pub mod bill_pay;
pub mod biller_search;
pub mod cross_border;
pub mod customers;
pub mod dashboard;
pub mod help;
pub mod integrations;
pub mod invoice_activity;
pub mod invoices;
pub mod main_menu;
pub mod p2p_a2a;
pub mod payment_setup;
pub mod reporting;
pub mod security;
pub mod settings;

/// What a page did with a key action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Not consumed; the app may apply its own handling.
    Ignored,
    Handled,
    /// Consumed, with a message for the status bar.
    Status(String),
    Navigate(NavRequest),
}

/// Result of routing a key to an open modal.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome<T> {
    Ignored,
    Handled,
    Cancelled,
    Done(T),
}

pub trait Page {
    fn id(&self) -> PageId;

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext);

    fn handle_action(&mut self, action: &KeyAction) -> Outcome;

    /// Polls simulated calls and advances spinners. Returns a status message
    /// when something finished.
    fn tick(&mut self) -> Option<String> {
        None
    }

    /// Key help for the status bar.
    fn hints(&self) -> &'static str;
}

/// Everything a page may copy out of the app when it is mounted.
#[derive(Debug, Clone, Copy)]
pub struct MountContext<'a> {
    pub store: &'a FakeStore,
    pub record: Option<&'a Invoice>,
    pub delay: Duration,
    pub today: NaiveDate,
}

/// Builds the view for `page`.
///
/// The invoice detail page needs a record; without one this falls back to the
/// dashboard, the same way the router resolves it.
pub fn mount(page: PageId, ctx: MountContext) -> Box<dyn Page> {
    tracing::debug!(page = %page, "mounting page");
    match page {
        PageId::Dashboard => Box::new(dashboard::DashboardPage::new(ctx.store)),
        PageId::Invoices => Box::new(invoices::InvoicesPage::new(ctx.store)),
        PageId::InvoiceActivity => match ctx.record {
            Some(invoice) => Box::new(invoice_activity::InvoiceActivityPage::new(invoice.clone())),
            None => Box::new(dashboard::DashboardPage::new(ctx.store)),
        },
        PageId::Customers => Box::new(customers::CustomersPage::new(ctx.store)),
        PageId::BillPay => Box::new(bill_pay::BillPayPage::new(ctx.store, ctx.delay, ctx.today)),
        PageId::CrossBorder => Box::new(cross_border::CrossBorderPage::new(ctx.store, ctx.delay)),
        PageId::P2pA2a => Box::new(p2p_a2a::TransfersPage::new(ctx.store, ctx.delay)),
        PageId::Integrations => Box::new(integrations::IntegrationsPage::new(ctx.store, ctx.delay)),
        PageId::Reporting => Box::new(reporting::ReportingPage::new(ctx.store)),
        PageId::AskPenny => Box::new(ask_penny::AskPennyPage::new(ctx.delay)),
        PageId::Settings => Box::new(settings::SettingsPage::new()),
        PageId::Security => Box::new(security::SecurityPage::new(ctx.store)),
    }
}
