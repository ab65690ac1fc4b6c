use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, List, ListItem, Paragraph, Row, Sparkline, Table},
    Frame,
};

use crate::data::{Amount, FakeStore, Transaction};
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::{NavRequest, PageId};
use crate::state::list::ListCursor;
use crate::ui_utils::{create_list_state, focused_block, status_span};

const RECENT_LIMIT: usize = 5;

/// Shortcuts shown on the dashboard; Enter navigates to the page.
pub const QUICK_LINKS: [(&str, PageId); 5] = [
    ("Review invoices", PageId::Invoices),
    ("Pay a bill", PageId::BillPay),
    ("Send money", PageId::P2pA2a),
    ("International transfer", PageId::CrossBorder),
    ("Ask Penny", PageId::AskPenny),
];

#[derive(Debug, Clone, PartialEq)]
struct Kpi {
    title: &'static str,
    value: String,
    detail: &'static str,
}

#[derive(Debug)]
pub struct DashboardPage {
    kpis: Vec<Kpi>,
    cash_flow: Vec<u64>,
    recent: Vec<Transaction>,
    links: ListCursor,
}

impl DashboardPage {
    pub fn new(store: &FakeStore) -> Self {
        let mut recent = store.transactions.clone();
        recent.sort_by(|a, b| b.created.cmp(&a.created));
        recent.truncate(RECENT_LIMIT);

        Self {
            kpis: vec![
                Kpi {
                    title: "Receivables",
                    value: store.receivables().to_string(),
                    detail: "open invoices",
                },
                Kpi {
                    title: "Overdue",
                    value: store.overdue_count().to_string(),
                    detail: "invoices past due",
                },
                Kpi {
                    title: "Scheduled bills",
                    value: store.scheduled_bills().to_string(),
                    detail: "next 30 days",
                },
                Kpi {
                    title: "Cash balance",
                    value: store.cash_balance.to_string(),
                    detail: "all accounts",
                },
            ],
            cash_flow: store.cash_flow.clone(),
            recent,
            links: ListCursor::new(),
        }
    }

    pub fn selected_link(&self) -> Option<PageId> {
        QUICK_LINKS.get(self.links.selected).map(|(_, page)| *page)
    }

    fn render_kpis(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        for (kpi, card) in self.kpis.iter().zip(cards.iter()) {
            let text = vec![
                Line::from(Span::styled(
                    kpi.value.as_str(),
                    Style::new().fg(ctx.palette.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(kpi.detail, Style::new().fg(ctx.palette.muted))),
            ];
            let block = Block::bordered()
                .title(kpi.title)
                .border_style(Style::new().fg(ctx.palette.border));
            frame.render_widget(Paragraph::new(text).block(block), *card);
        }
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let rows: Vec<Row> = self
            .recent
            .iter()
            .map(|t| {
                Row::new(vec![
                    Cell::from(t.created.format("%b %d").to_string()),
                    Cell::from(t.kind.label()),
                    Cell::from(t.counterparty.clone()),
                    Cell::from(t.amount.to_string()),
                    Cell::from(status_span(t.status, ctx.palette)),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(5),
                Constraint::Min(16),
                Constraint::Length(14),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(["Date", "Type", "Counterparty", "Amount", "Status"])
                .style(Style::new().fg(ctx.palette.muted)),
        )
        .block(
            Block::bordered()
                .title("Recent transactions")
                .border_style(Style::new().fg(ctx.palette.border)),
        );
        frame.render_widget(table, area);
    }
}

impl Page for DashboardPage {
    fn id(&self) -> PageId {
        PageId::Dashboard
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(9), Constraint::Min(0)])
            .split(area);
        self.render_kpis(frame, rows[0], ctx);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(rows[1]);

        let total: u64 = self.cash_flow.iter().sum();
        let sparkline = Sparkline::default()
            .block(
                Block::bordered()
                    .title(format!(
                        "Cash flow, 12 months ({} in)",
                        Amount::from_dollars(total as i64)
                    ))
                    .border_style(Style::new().fg(ctx.palette.border)),
            )
            .data(self.cash_flow.iter().copied())
            .style(Style::new().fg(ctx.palette.positive));
        frame.render_widget(sparkline, middle[0]);

        let items: Vec<ListItem> =
            QUICK_LINKS.iter().map(|(label, _)| ListItem::new(*label)).collect();
        let mut state = create_list_state(self.links.selected, self.links.scroll, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block("Quick links", ctx.focused, ctx.palette))
                .highlight_style(ctx.palette.highlight())
                .highlight_symbol(">> "),
            middle[1],
            &mut state,
        );

        self.render_recent(frame, rows[2], ctx);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::NavigateUp => {
                self.links.navigate_up();
                Outcome::Handled
            }
            KeyAction::NavigateDown => {
                self.links.navigate_down(QUICK_LINKS.len());
                Outcome::Handled
            }
            KeyAction::Select => match self.selected_link() {
                Some(page) => Outcome::Navigate(NavRequest::Navigate(page)),
                None => Outcome::Ignored,
            },
            _ => Outcome::Ignored,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ Quick links | Enter Open | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpis_come_from_store() {
        let store = FakeStore::new();
        let page = DashboardPage::new(&store);
        assert_eq!(page.kpis[0].value, store.receivables().to_string());
        assert_eq!(page.kpis[1].value, store.overdue_count().to_string());
        assert_eq!(page.kpis[3].value, store.cash_balance.to_string());
    }

    #[test]
    fn test_recent_is_newest_first() {
        let page = DashboardPage::new(&FakeStore::new());
        assert!(page.recent.len() <= RECENT_LIMIT);
        assert!(page.recent.windows(2).all(|w| w[0].created >= w[1].created));
    }

    #[test]
    fn test_quick_link_requests_navigation() {
        let mut page = DashboardPage::new(&FakeStore::new());
        page.handle_action(&KeyAction::NavigateDown);
        assert_eq!(
            page.handle_action(&KeyAction::Select),
            Outcome::Navigate(NavRequest::Navigate(PageId::BillPay))
        );
    }

    #[test]
    fn test_unrelated_key_is_ignored() {
        let mut page = DashboardPage::new(&FakeStore::new());
        assert_eq!(page.handle_action(&KeyAction::InputChar('x')), Outcome::Ignored);
    }
}
