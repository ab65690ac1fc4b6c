use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table, Tabs},
    Frame,
};

use crate::data::FakeStore;
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::{NavRequest, PageId};
use crate::state::InvoicesState;
use crate::ui_utils::{create_table_state, focused_block, render_text_field, status_span};

#[derive(Debug)]
pub struct InvoicesPage {
    state: InvoicesState,
}

impl InvoicesPage {
    pub fn new(store: &FakeStore) -> Self {
        Self {
            state: InvoicesState::new(store.invoices.clone()),
        }
    }

    fn handle_search(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::InputChar(c) => self.state.push_search(*c),
            KeyAction::Backspace => self.state.pop_search(),
            KeyAction::Select | KeyAction::Back => self.state.stop_search(),
            KeyAction::NavigateDown => {
                self.state.stop_search();
                self.state.navigate_down();
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }
}

impl Page for InvoicesPage {
    fn id(&self) -> PageId {
        PageId::Invoices
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let tabs = Tabs::new(self.state.tab_labels())
            .select(self.state.tab)
            .block(focused_block("Invoices", ctx.focused && !self.state.searching, ctx.palette))
            .highlight_style(Style::new().fg(ctx.palette.accent).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, rows[0]);

        render_text_field(
            frame,
            rows[1],
            "Search (/)",
            &self.state.search,
            ctx.focused && self.state.searching,
            ctx.palette,
        );

        let filtered = self.state.filtered();
        let table_rows: Vec<Row> = filtered
            .iter()
            .map(|invoice| {
                Row::new(vec![
                    Cell::from(invoice.number.clone()),
                    Cell::from(invoice.customer.clone()),
                    Cell::from(invoice.issued.format("%Y-%m-%d").to_string()),
                    Cell::from(invoice.due.format("%Y-%m-%d").to_string()),
                    Cell::from(invoice.amount().to_string()),
                    Cell::from(status_span(invoice.status, ctx.palette)),
                ])
            })
            .collect();
        let count = table_rows.len();
        let title = if count == 0 { "No matching invoices" } else { "Enter to view activity" };
        let table = Table::new(
            table_rows,
            [
                Constraint::Length(10),
                Constraint::Min(18),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(13),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(["Number", "Customer", "Issued", "Due", "Amount", "Status"])
                .style(Style::new().fg(ctx.palette.muted)),
        )
        .block(focused_block(title, ctx.focused && !self.state.searching, ctx.palette))
        .row_highlight_style(ctx.palette.highlight())
        .highlight_symbol(">> ");
        let mut table_state =
            create_table_state(self.state.cursor.selected, self.state.cursor.scroll, count);
        frame.render_stateful_widget(table, rows[2], &mut table_state);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        if self.state.searching {
            return self.handle_search(action);
        }
        match action {
            KeyAction::NavigateLeft => self.state.next_tab(false),
            KeyAction::NavigateRight => self.state.next_tab(true),
            KeyAction::NavigateUp => {
                self.state.cursor.navigate_up();
            }
            KeyAction::NavigateDown => {
                self.state.navigate_down();
            }
            KeyAction::ScrollPageUp => self.state.cursor.page_up(),
            KeyAction::ScrollPageDown => {
                let len = self.state.filtered().len();
                self.state.cursor.page_down(len);
            }
            KeyAction::InputChar('/') => self.state.start_search(),
            KeyAction::Select => {
                return match self.state.selected_invoice() {
                    Some(invoice) => Outcome::Navigate(NavRequest::SelectAndNavigate(
                        invoice.clone(),
                        PageId::InvoiceActivity,
                    )),
                    None => Outcome::Ignored,
                };
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn hints(&self) -> &'static str {
        if self.state.searching {
            "Type to filter | Enter/Esc Done"
        } else {
            "←→ Status | ↑↓ Select | / Search | Enter Activity | Esc Menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::InvoiceStatus;

    fn page() -> InvoicesPage {
        InvoicesPage::new(&FakeStore::new())
    }

    #[test]
    fn test_enter_selects_invoice_for_activity() {
        let mut page = page();
        let first = page.state.invoices[0].clone();
        assert_eq!(
            page.handle_action(&KeyAction::Select),
            Outcome::Navigate(NavRequest::SelectAndNavigate(first, PageId::InvoiceActivity))
        );
    }

    #[test]
    fn test_search_captures_characters() {
        let mut page = page();
        page.handle_action(&KeyAction::InputChar('/'));
        assert!(page.state.searching);
        for c in "globex".chars() {
            page.handle_action(&KeyAction::InputChar(c));
        }
        assert_eq!(page.state.search.value, "globex");
        assert_eq!(page.handle_action(&KeyAction::Back), Outcome::Handled);
        assert!(!page.state.searching);
        assert!(page.state.filtered().iter().all(|i| i.customer.contains("Globex")));
    }

    #[test]
    fn test_tab_keys_switch_status() {
        let mut page = page();
        page.handle_action(&KeyAction::NavigateLeft);
        assert_eq!(page.state.tab_status(), Some(InvoiceStatus::Overdue));
    }

    #[test]
    fn test_select_on_empty_filter_is_ignored() {
        let mut page = page();
        page.handle_action(&KeyAction::InputChar('/'));
        for c in "zzz".chars() {
            page.handle_action(&KeyAction::InputChar(c));
        }
        page.handle_action(&KeyAction::Select);
        assert_eq!(page.handle_action(&KeyAction::Select), Outcome::Ignored);
    }
}
