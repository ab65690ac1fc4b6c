use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};

use crate::data::{Amount, Customer, FakeStore, Invoice};
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::CustomersState;
use crate::ui_utils::{create_list_state, focused_block, render_text_field, status_span};

#[derive(Debug)]
pub struct CustomersPage {
    state: CustomersState,
    invoices: Vec<Invoice>,
}

impl CustomersPage {
    pub fn new(store: &FakeStore) -> Self {
        Self {
            state: CustomersState::new(store.customers.clone()),
            invoices: store.invoices.clone(),
        }
    }

    fn invoices_for<'a>(
        &'a self,
        customer: &'a Customer,
    ) -> impl Iterator<Item = &'a Invoice> + 'a {
        self.invoices.iter().filter(move |i| i.customer == customer.name)
    }

    /// Outstanding balance: open invoices only.
    pub fn balance(&self, customer: &Customer) -> Amount {
        self.invoices_for(customer)
            .filter(|i| i.status.is_open())
            .map(Invoice::amount)
            .sum()
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let block = Block::bordered()
            .title("Customer")
            .border_style(Style::new().fg(palette.border));
        let Some(customer) = self.state.selected() else {
            frame.render_widget(Paragraph::new("No customer selected").block(block), area);
            return;
        };

        let label = Style::new().fg(palette.muted);
        let mut lines = vec![
            Line::from(Span::styled(
                customer.name.as_str(),
                Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Company  ", label),
                Span::raw(customer.company.as_str()),
            ]),
            Line::from(vec![Span::styled("Email    ", label), Span::raw(customer.email.as_str())]),
            Line::from(vec![Span::styled("Phone    ", label), Span::raw(customer.phone.as_str())]),
            Line::from(vec![
                Span::styled("Balance  ", label),
                Span::styled(
                    self.balance(customer).to_string(),
                    Style::new().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled("Invoices", label)),
        ];
        lines.extend(self.invoices_for(customer).map(|invoice| {
            Line::from(vec![
                Span::raw(format!("  {}  {:>12}  ", invoice.number, invoice.amount().to_string())),
                status_span(invoice.status, palette),
            ])
        }));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Page for CustomersPage {
    fn id(&self) -> PageId {
        PageId::Customers
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(cols[0]);

        render_text_field(frame, left[0], "Search", &self.state.query, ctx.focused, ctx.palette);

        let filtered = self.state.filtered();
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::raw(c.name.as_str()),
                    Span::styled(format!("  {}", c.company), Style::new().fg(ctx.palette.muted)),
                ]))
            })
            .collect();
        let title = format!("Customers ({})", items.len());
        let cursor = self.state.cursor;
        let mut state = create_list_state(cursor.selected, cursor.scroll, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block(&title, ctx.focused, ctx.palette))
                .highlight_style(ctx.palette.highlight())
                .highlight_symbol(">> "),
            left[1],
            &mut state,
        );

        self.render_detail(frame, cols[1], ctx);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::InputChar(c) => self.state.push_query(*c),
            KeyAction::Backspace => self.state.pop_query(),
            KeyAction::NavigateUp => {
                self.state.cursor.navigate_up();
            }
            KeyAction::NavigateDown => {
                self.state.navigate_down();
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn hints(&self) -> &'static str {
        "Type to search | ↑↓ Select | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_filters_customers() {
        let mut page = CustomersPage::new(&FakeStore::new());
        for c in "globex".chars() {
            page.handle_action(&KeyAction::InputChar(c));
        }
        let filtered = page.state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].email, "ap@globex.example");
    }

    #[test]
    fn test_balance_counts_open_invoices_only() {
        let store = FakeStore::new();
        let page = CustomersPage::new(&store);
        for customer in &store.customers {
            let expected: Amount = store
                .invoices_for(&customer.name)
                .filter(|i| i.status.is_open())
                .map(Invoice::amount)
                .sum();
            assert_eq!(page.balance(customer), expected);
        }
    }
}
