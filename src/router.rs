//! Navigation state for the root composition.
//!
//! The [`Router`] is the only owner of "which page is active" and "which
//! record is selected for drill-down". Page views never mutate it directly;
//! they hand [`NavRequest`] values back to the `App`, which applies them here
//! in a single `&mut self` call so the next frame always sees both fields
//! updated together.

use std::fmt;

use crate::data::Invoice;

/// Identifier of a top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Dashboard,
    Invoices,
    Customers,
    BillPay,
    CrossBorder,
    P2pA2a,
    Integrations,
    Reporting,
    AskPenny,
    Settings,
    Security,
    InvoiceActivity,
}

impl PageId {
    pub const ALL: [PageId; 12] = [
        PageId::Dashboard,
        PageId::Invoices,
        PageId::Customers,
        PageId::BillPay,
        PageId::CrossBorder,
        PageId::P2pA2a,
        PageId::Integrations,
        PageId::Reporting,
        PageId::AskPenny,
        PageId::Settings,
        PageId::Security,
        PageId::InvoiceActivity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Invoices => "invoices",
            PageId::Customers => "customers",
            PageId::BillPay => "billpay",
            PageId::CrossBorder => "crossborder",
            PageId::P2pA2a => "p2pa2a",
            PageId::Integrations => "integrations",
            PageId::Reporting => "reporting",
            PageId::AskPenny => "askpenny",
            PageId::Settings => "settings",
            PageId::Security => "security",
            PageId::InvoiceActivity => "invoice-activity",
        }
    }

    pub fn lookup(id: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|p| p.as_str() == id)
    }

    /// Parses a page identifier, falling back to the default page.
    pub fn parse_or_default(id: &str) -> PageId {
        PageId::lookup(id).unwrap_or_else(|| {
            tracing::warn!(id, "unknown page identifier, using default page");
            PageId::default()
        })
    }

    /// Whether this page only makes sense with a selected record.
    pub fn requires_selection(self) -> bool {
        matches!(self, PageId::InvoiceActivity)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigation change requested by a page view.
#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
    Navigate(PageId),
    SelectAndNavigate(Invoice, PageId),
    ClearAndNavigate(PageId),
}

/// The page to draw this frame, after the fallback rule is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub page: PageId,
    pub record: Option<&'a Invoice>,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    active_page: PageId,
    selected_record: Option<Invoice>,
}

impl Router {
    pub fn new(start: PageId) -> Self {
        let mut router = Self::default();
        router.navigate(start);
        router
    }

    pub fn active_page(&self) -> PageId {
        self.active_page
    }

    pub fn selected_record(&self) -> Option<&Invoice> {
        self.selected_record.as_ref()
    }

    pub fn navigate(&mut self, page: PageId) {
        if !page.requires_selection() {
            self.selected_record = None;
        }
        tracing::debug!(from = %self.active_page, to = %page, "navigate");
        self.active_page = page;
    }

    /// Navigates using a string identifier; unknown identifiers land on the default page.
    pub fn navigate_to_id(&mut self, id: &str) {
        self.navigate(PageId::parse_or_default(id));
    }

    pub fn select_record_and_navigate(&mut self, record: Invoice, page: PageId) {
        tracing::debug!(record = %record.number, to = %page, "select and navigate");
        self.selected_record = page.requires_selection().then_some(record);
        self.active_page = page;
    }

    pub fn clear_selection_and_navigate(&mut self, page: PageId) {
        tracing::debug!(to = %page, "clear selection and navigate");
        self.selected_record = None;
        self.active_page = page;
    }

    pub fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Navigate(page) => self.navigate(page),
            NavRequest::SelectAndNavigate(record, page) => {
                self.select_record_and_navigate(record, page)
            }
            NavRequest::ClearAndNavigate(page) => self.clear_selection_and_navigate(page),
        }
    }

    /// Picks exactly one page to render.
    pub fn resolve(&self) -> Resolved<'_> {
        if self.active_page.requires_selection() && self.selected_record.is_none() {
            return Resolved {
                page: PageId::default(),
                record: None,
            };
        }
        Resolved {
            page: self.active_page,
            record: self.selected_record.as_ref(),
        }
    }

    /// The selection may only be set while its detail page is active.
    pub fn invariant_holds(&self) -> bool {
        self.selected_record.is_none() || self.active_page.requires_selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FakeStore;

    fn invoice() -> Invoice {
        FakeStore::new().invoices.remove(0)
    }

    #[test]
    fn test_default_page_is_dashboard() {
        let router = Router::default();
        assert_eq!(router.active_page(), PageId::Dashboard);
        assert!(router.selected_record().is_none());
    }

    #[test]
    fn test_navigate_every_page() {
        for page in PageId::ALL {
            let mut router = Router::default();
            router.select_record_and_navigate(invoice(), PageId::InvoiceActivity);
            router.navigate(page);
            assert_eq!(router.active_page(), page);
            assert!(router.invariant_holds(), "invariant broken after navigating to {page}");
        }
    }

    #[test]
    fn test_select_record_and_navigate() {
        let mut router = Router::default();
        let record = invoice();
        router.select_record_and_navigate(record.clone(), PageId::InvoiceActivity);
        assert_eq!(router.active_page(), PageId::InvoiceActivity);
        assert_eq!(router.selected_record(), Some(&record));

        let resolved = router.resolve();
        assert_eq!(resolved.page, PageId::InvoiceActivity);
        assert_eq!(resolved.record, Some(&record));
    }

    #[test]
    fn test_select_for_non_detail_page_drops_record() {
        let mut router = Router::default();
        router.select_record_and_navigate(invoice(), PageId::Invoices);
        assert_eq!(router.active_page(), PageId::Invoices);
        assert!(router.selected_record().is_none());
    }

    #[test]
    fn test_clear_selection_and_navigate() {
        let mut router = Router::default();
        router.select_record_and_navigate(invoice(), PageId::InvoiceActivity);
        router.clear_selection_and_navigate(PageId::Invoices);
        assert_eq!(router.active_page(), PageId::Invoices);
        assert!(router.selected_record().is_none());
    }

    #[test]
    fn test_detail_page_without_record_resolves_to_default() {
        let mut router = Router::default();
        router.navigate(PageId::InvoiceActivity);
        assert_eq!(router.active_page(), PageId::InvoiceActivity);
        let resolved = router.resolve();
        assert_eq!(resolved.page, PageId::Dashboard);
        assert!(resolved.record.is_none());
    }

    #[test]
    fn test_unknown_identifier_falls_back() {
        let mut router = Router::new(PageId::Reporting);
        router.navigate_to_id("wire-transfers");
        assert_eq!(router.active_page(), PageId::Dashboard);

        router.navigate_to_id("billpay");
        assert_eq!(router.active_page(), PageId::BillPay);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::lookup(page.as_str()), Some(page));
        }
    }

    #[test]
    fn test_apply_requests() {
        let mut router = Router::default();
        let record = invoice();
        router.apply(NavRequest::SelectAndNavigate(record.clone(), PageId::InvoiceActivity));
        assert_eq!(router.resolve().record, Some(&record));
        router.apply(NavRequest::ClearAndNavigate(PageId::Invoices));
        assert_eq!(router.resolve().page, PageId::Invoices);
        router.apply(NavRequest::Navigate(PageId::Security));
        assert_eq!(router.active_page(), PageId::Security);
    }
}
