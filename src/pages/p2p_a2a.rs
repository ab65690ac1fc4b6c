use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Row, Table, Tabs},
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::data::FakeStore;
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::form::TextField;
use crate::state::transfers::{A2aForm, P2pForm, SubmitResult, TransferTab};
use crate::state::TransfersState;
use crate::status;
use crate::ui_utils::{focused_block, render_pending, render_text_field, status_span};

#[derive(Debug)]
pub struct TransfersPage {
    state: TransfersState,
    spinner: ThrobberState,
}

impl TransfersPage {
    pub fn new(store: &FakeStore, delay: Duration) -> Self {
        Self {
            state: TransfersState::new(store.transactions.clone(), delay),
            spinner: ThrobberState::default(),
        }
    }

    fn render_fields(
        &self,
        frame: &mut Frame,
        area: Rect,
        labels: &[&str],
        fields: &[&TextField],
        ctx: &RenderContext,
    ) {
        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints(labels.iter().map(|_| Constraint::Length(3)).chain([Constraint::Min(0)]))
            .split(area);
        let focus = self.state.focus();
        for (idx, (label, field)) in labels.iter().zip(fields).enumerate() {
            let focused = ctx.focused && idx == focus;
            render_text_field(frame, slots[idx], label, field, focused, ctx.palette);
        }
    }
}

impl Page for TransfersPage {
    fn id(&self) -> PageId {
        PageId::P2pA2a
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(12), Constraint::Length(1)])
            .split(cols[0]);

        let selected = match self.state.tab {
            TransferTab::P2p => 0,
            TransferTab::A2a => 1,
        };
        let tabs = Tabs::new(["P2P · pay a person", "A2A · bank account"])
            .select(selected)
            .block(focused_block("Send money", ctx.focused, palette))
            .highlight_style(Style::new().fg(palette.accent).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, left[0]);

        match self.state.tab {
            TransferTab::P2p => {
                let fields = self.state.p2p.fields();
                self.render_fields(frame, left[1], &P2pForm::FIELDS, &fields, ctx);
            }
            TransferTab::A2a => {
                let fields = self.state.a2a.fields();
                self.render_fields(frame, left[1], &A2aForm::FIELDS, &fields, ctx);
            }
        }
        if self.state.is_sending() {
            render_pending(frame, left[2], "Sending...", &mut self.spinner, palette);
        }

        let rows: Vec<Row> = self
            .state
            .history
            .iter()
            .map(|t| {
                Row::new(vec![
                    Cell::from(t.created.format("%b %d %H:%M").to_string()),
                    Cell::from(t.kind.label()),
                    Cell::from(t.counterparty.clone()),
                    Cell::from(t.amount.to_string()),
                    Cell::from(status_span(t.status, palette)),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(13),
                Constraint::Length(4),
                Constraint::Min(14),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(["When", "Type", "To", "Amount", "Status"])
                .style(Style::new().fg(palette.muted)),
        )
        .block(
            Block::bordered()
                .title("History")
                .border_style(Style::new().fg(palette.border)),
        );
        frame.render_widget(table, cols[1]);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::NavigateLeft | KeyAction::NavigateRight => self.state.switch_tab(),
            KeyAction::NextField | KeyAction::NavigateDown => self.state.move_focus(true),
            KeyAction::PrevField | KeyAction::NavigateUp => self.state.move_focus(false),
            KeyAction::InputChar(c) => self.state.focused_field().push(*c),
            KeyAction::Backspace => {
                self.state.focused_field().pop();
            }
            KeyAction::Select => {
                return Outcome::Status(match self.state.submit() {
                    SubmitResult::Sending => status::progress("Sending transfer"),
                    SubmitResult::Invalid => status::error("Fix the highlighted fields"),
                    SubmitResult::Busy => status::info("A transfer is already in progress"),
                });
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn tick(&mut self) -> Option<String> {
        if self.state.is_sending() {
            self.spinner.calc_next();
        }
        let transaction = self.state.tick()?;
        Some(status::success(&format!(
            "{} transfer of {} to {} completed",
            transaction.kind.label(),
            transaction.amount,
            transaction.counterparty
        )))
    }

    fn hints(&self) -> &'static str {
        "←→ P2P/A2A | Tab Field | Enter Send | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TransferKind;
    use crate::status::PaymentStatus;
    use crate::validation::ValidationError;
    use std::thread;
    use std::time::Instant;

    fn type_text(page: &mut TransfersPage, text: &str) {
        for c in text.chars() {
            page.handle_action(&KeyAction::InputChar(c));
        }
    }

    #[test]
    fn test_bad_phone_blocks_send() {
        let mut page = TransfersPage::new(&FakeStore::new(), Duration::ZERO);
        let before = page.state.history.len();
        type_text(&mut page, "555-1234");
        page.handle_action(&KeyAction::NextField);
        type_text(&mut page, "25.00");
        page.handle_action(&KeyAction::Select);
        assert_eq!(page.state.p2p.phone.error, Some(ValidationError::Phone));
        assert!(!page.state.is_sending());
        assert_eq!(page.state.history.len(), before);
    }

    #[test]
    fn test_valid_p2p_lands_in_history() {
        let mut page = TransfersPage::new(&FakeStore::new(), Duration::from_millis(5));
        let before = page.state.history.len();
        type_text(&mut page, "+1 (555) 123-4567");
        page.handle_action(&KeyAction::NextField);
        type_text(&mut page, "25.00");
        page.handle_action(&KeyAction::Select);

        let start = Instant::now();
        while page.tick().is_none() && start.elapsed() < Duration::from_secs(2) {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(page.state.history.len(), before + 1);
        let newest = &page.state.history[0];
        assert_eq!(newest.kind, TransferKind::P2P);
        assert_eq!(newest.amount.cents(), 2_500);
        assert_eq!(newest.status, PaymentStatus::Completed);
        assert!(page.state.p2p.phone.value.is_empty());
    }

    #[test]
    fn test_switching_tab_keeps_other_form() {
        let mut page = TransfersPage::new(&FakeStore::new(), Duration::ZERO);
        type_text(&mut page, "212");
        page.handle_action(&KeyAction::NavigateRight);
        assert_eq!(page.state.tab, TransferTab::A2a);
        type_text(&mut page, "021000021");
        page.handle_action(&KeyAction::NavigateLeft);
        assert_eq!(page.state.p2p.phone.value, "212");
        assert_eq!(page.state.a2a.routing.value, "021000021");
    }
}
