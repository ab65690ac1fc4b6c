use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::data::FakeStore;
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::cross_border::{CrossBorderField, Quote};
use crate::state::CrossBorderState;
use crate::status;
use crate::ui_utils::{render_choice, render_pending, render_text_field, status_span};

#[derive(Debug)]
pub struct CrossBorderPage {
    state: CrossBorderState,
    spinner: ThrobberState,
}

impl CrossBorderPage {
    pub fn new(store: &FakeStore, delay: Duration) -> Self {
        Self {
            state: CrossBorderState::new(store.transfers.clone(), delay),
            spinner: ThrobberState::default(),
        }
    }

    fn quote_lines(quote: Option<Quote>, ctx: &RenderContext) -> Vec<Line<'static>> {
        let label = Style::new().fg(ctx.palette.muted);
        let Some(q) = quote else {
            return vec![Line::from(Span::styled("Enter an amount to see a quote", label))];
        };
        vec![
            Line::from(vec![
                Span::styled("Exchange rate    ", label),
                Span::raw(format!("1 USD = {:.4} {}", q.rate, q.currency.code())),
            ]),
            Line::from(vec![
                Span::styled("You send         ", label),
                Span::raw(q.send.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Transfer fee     ", label),
                Span::raw(q.fee.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Recipient gets   ", label),
                Span::styled(
                    format!("{} {}", q.receive.plain(), q.currency.code()),
                    Style::new().fg(ctx.palette.positive).add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    }
}

impl Page for CrossBorderPage {
    fn id(&self) -> PageId {
        PageId::CrossBorder
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let form = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(cols[0]);

        let focus = self.state.focus;
        render_text_field(
            frame,
            form[0],
            "Recipient",
            &self.state.recipient,
            ctx.focused && focus == CrossBorderField::Recipient,
            palette,
        );
        let currency = self.state.currency();
        render_choice(
            frame,
            form[1],
            "Destination currency",
            &format!("{} · {}", currency.code(), currency.country()),
            ctx.focused && focus == CrossBorderField::Currency,
            palette,
        );
        render_text_field(
            frame,
            form[2],
            "Amount (USD)",
            &self.state.amount,
            ctx.focused && focus == CrossBorderField::Amount,
            palette,
        );
        let quote = Paragraph::new(Self::quote_lines(self.state.live_quote(), ctx)).block(
            Block::bordered()
                .title("Quote")
                .border_style(Style::new().fg(palette.border)),
        );
        frame.render_widget(quote, form[3]);
        if self.state.is_sending() {
            render_pending(frame, form[4], "Sending transfer...", &mut self.spinner, palette);
        }

        let rows: Vec<Row> = self
            .state
            .history
            .iter()
            .map(|t| {
                Row::new(vec![
                    Cell::from(t.recipient.clone()),
                    Cell::from(t.send_amount.to_string()),
                    Cell::from(format!("{} {}", t.receive_amount.plain(), t.currency.code())),
                    Cell::from(status_span(t.status, palette)),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Min(14),
                Constraint::Length(12),
                Constraint::Length(16),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(["Recipient", "Sent", "Received", "Status"])
                .style(Style::new().fg(palette.muted)),
        )
        .block(
            Block::bordered()
                .title("Recent transfers")
                .border_style(Style::new().fg(palette.border)),
        );
        frame.render_widget(table, cols[1]);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::NextField | KeyAction::NavigateDown => {
                self.state.focus = self.state.focus.step(true)
            }
            KeyAction::PrevField | KeyAction::NavigateUp => {
                self.state.focus = self.state.focus.step(false)
            }
            KeyAction::NavigateLeft if self.state.focus == CrossBorderField::Currency => {
                self.state.cycle_currency(false)
            }
            KeyAction::NavigateRight if self.state.focus == CrossBorderField::Currency => {
                self.state.cycle_currency(true)
            }
            KeyAction::InputChar(c) => match self.state.focused_field() {
                Some(field) => field.push(*c),
                None => return Outcome::Ignored,
            },
            KeyAction::Backspace => match self.state.focused_field() {
                Some(field) => {
                    field.pop();
                }
                None => return Outcome::Ignored,
            },
            KeyAction::Select => {
                if self.state.is_sending() {
                    return Outcome::Status(status::info("A transfer is already in progress"));
                }
                if self.state.submit() {
                    return Outcome::Status(status::progress("Sending transfer"));
                }
                return Outcome::Status(status::error("Fix the highlighted fields"));
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn tick(&mut self) -> Option<String> {
        if self.state.is_sending() {
            self.spinner.calc_next();
        }
        let transfer = self.state.tick()?;
        Some(status::success(&format!(
            "Sent {} to {}",
            transfer.send_amount, transfer.recipient
        )))
    }

    fn hints(&self) -> &'static str {
        "Tab/↑↓ Field | ←→ Currency | Enter Send | Esc Menu"
    }
}
