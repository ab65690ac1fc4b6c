//! Invoices page state.
//!
//! Status tabs, free-text search and table selection over a local copy of the
//! invoice fixtures.

use crate::data::Invoice;
use crate::state::form::TextField;
use crate::state::list::{cycle, ListCursor};
use crate::status::{InvoiceStatus, StatusStyle};

/// Tab filters in display order; `None` is "All".
pub const INVOICE_TABS: [Option<InvoiceStatus>; 6] = [
    None,
    Some(InvoiceStatus::Draft),
    Some(InvoiceStatus::Sent),
    Some(InvoiceStatus::Viewed),
    Some(InvoiceStatus::Paid),
    Some(InvoiceStatus::Overdue),
];

#[derive(Debug, Clone, Default)]
pub struct InvoicesState {
    pub invoices: Vec<Invoice>,
    pub tab: usize,
    pub search: TextField,
    /// Whether typed characters go to the search box.
    pub searching: bool,
    pub cursor: ListCursor,
}

impl InvoicesState {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        Self {
            invoices,
            search: TextField::with_max_len(40),
            ..Default::default()
        }
    }

    pub fn tab_status(&self) -> Option<InvoiceStatus> {
        INVOICE_TABS.get(self.tab).copied().flatten()
    }

    fn matches_search(&self, invoice: &Invoice) -> bool {
        let query = self.search.value.trim().to_lowercase();
        query.is_empty()
            || invoice.number.to_lowercase().contains(&query)
            || invoice.customer.to_lowercase().contains(&query)
    }

    fn in_tab(&self, invoice: &Invoice, status: Option<InvoiceStatus>) -> bool {
        status.is_none_or(|s| invoice.status == s) && self.matches_search(invoice)
    }

    /// Invoices visible under the current tab and search.
    pub fn filtered(&self) -> Vec<&Invoice> {
        let status = self.tab_status();
        self.invoices.iter().filter(|i| self.in_tab(i, status)).collect()
    }

    /// Tab labels with the number of invoices each would show.
    pub fn tab_labels(&self) -> Vec<String> {
        INVOICE_TABS
            .iter()
            .map(|status| {
                let count = self.invoices.iter().filter(|i| self.in_tab(i, *status)).count();
                let name = status.map_or("All", |s| s.label());
                format!("{} ({})", name, count)
            })
            .collect()
    }

    pub fn selected_invoice(&self) -> Option<&Invoice> {
        self.filtered().get(self.cursor.selected).copied()
    }

    pub fn next_tab(&mut self, forward: bool) {
        self.tab = cycle(self.tab, INVOICE_TABS.len(), forward);
        self.cursor.reset();
    }

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    pub fn stop_search(&mut self) {
        self.searching = false;
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.cursor.reset();
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.cursor.reset();
    }

    pub fn navigate_down(&mut self) -> bool {
        let len = self.filtered().len();
        self.cursor.navigate_down(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FakeStore;

    fn state() -> InvoicesState {
        InvoicesState::new(FakeStore::new().invoices)
    }

    #[test]
    fn test_all_tab_shows_everything() {
        let s = state();
        assert_eq!(s.filtered().len(), s.invoices.len());
        assert!(s.tab_status().is_none());
    }

    #[test]
    fn test_status_tab_filters() {
        let mut s = state();
        s.tab = 5;
        assert_eq!(s.tab_status(), Some(InvoiceStatus::Overdue));
        assert!(s.filtered().iter().all(|i| i.status == InvoiceStatus::Overdue));
    }

    #[test]
    fn test_tab_label_counts_match_filter() {
        let mut s = state();
        let labels = s.tab_labels();
        for (idx, label) in labels.iter().enumerate() {
            s.tab = idx;
            assert!(label.ends_with(&format!("({})", s.filtered().len())), "{label}");
        }
    }

    #[test]
    fn test_search_by_customer_and_number() {
        let mut s = state();
        for c in "acme".chars() {
            s.push_search(c);
        }
        assert_eq!(s.filtered().len(), 2);

        s.search.clear();
        for c in "1044".chars() {
            s.push_search(c);
        }
        let hits = s.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, "INV-1044");
    }

    #[test]
    fn test_switching_tab_resets_selection() {
        let mut s = state();
        s.navigate_down();
        assert_eq!(s.cursor.selected, 1);
        s.next_tab(true);
        assert_eq!(s.cursor.selected, 0);
    }

    #[test]
    fn test_selected_invoice_follows_filter() {
        let mut s = state();
        s.tab = 4;
        let selected = s.selected_invoice().unwrap();
        assert_eq!(selected.status, InvoiceStatus::Paid);
    }
}
