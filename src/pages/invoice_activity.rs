use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::data::Invoice;
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::{NavRequest, PageId};
use crate::ui_utils::status_span;

/// Read-only detail view of the invoice chosen on the invoices page.
#[derive(Debug)]
pub struct InvoiceActivityPage {
    invoice: Invoice,
}

impl InvoiceActivityPage {
    pub fn new(invoice: Invoice) -> Self {
        Self { invoice }
    }
}

impl Page for InvoiceActivityPage {
    fn id(&self) -> PageId {
        PageId::InvoiceActivity
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let invoice = &self.invoice;
        let palette = ctx.palette;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(6), Constraint::Length(8)])
            .split(area);

        let label = Style::new().fg(palette.muted);
        let summary = vec![
            Line::from(vec![
                Span::styled(
                    invoice.number.as_str(),
                    Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                status_span(invoice.status, palette),
            ]),
            Line::from(vec![
                Span::styled("Customer  ", label),
                Span::raw(invoice.customer.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Issued    ", label),
                Span::raw(invoice.issued.format("%b %d, %Y").to_string()),
                Span::styled("   Due ", label),
                Span::raw(invoice.due.format("%b %d, %Y").to_string()),
            ]),
            Line::from(vec![
                Span::styled("Total     ", label),
                Span::styled(
                    invoice.amount().to_string(),
                    Style::new().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        let block = Block::bordered()
            .title("Invoice")
            .border_style(Style::new().fg(palette.border));
        frame.render_widget(Paragraph::new(summary).block(block), rows[0]);

        let items: Vec<Row> = invoice
            .items
            .iter()
            .map(|item| {
                Row::new(vec![
                    Cell::from(item.description.clone()),
                    Cell::from(item.quantity.to_string()),
                    Cell::from(item.unit_price.to_string()),
                    Cell::from(item.total().to_string()),
                ])
            })
            .collect();
        let table = Table::new(
            items,
            [
                Constraint::Min(20),
                Constraint::Length(5),
                Constraint::Length(13),
                Constraint::Length(13),
            ],
        )
        .header(Row::new(["Item", "Qty", "Unit", "Total"]).style(label))
        .block(Block::bordered().title("Line items").border_style(Style::new().fg(palette.border)));
        frame.render_widget(table, rows[1]);

        let events: Vec<ListItem> = invoice
            .activity
            .iter()
            .rev()
            .map(|e| {
                ListItem::new(Line::from(vec![
                    Span::styled(e.date.format("%b %d  ").to_string(), label),
                    Span::raw(e.description.as_str()),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(events).block(
                Block::bordered()
                    .title("Activity")
                    .border_style(Style::new().fg(palette.border)),
            ),
            rows[2],
        );
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::Back | KeyAction::Backspace => {
                Outcome::Navigate(NavRequest::ClearAndNavigate(PageId::Invoices))
            }
            _ => Outcome::Ignored,
        }
    }

    fn hints(&self) -> &'static str {
        "Esc/Backspace Back to invoices"
    }
}
