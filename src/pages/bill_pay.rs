use std::time::Duration;

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table, Tabs},
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::data::FakeStore;
use crate::key_handler::KeyAction;
use crate::pages::{biller_search, payment_setup, ModalOutcome, Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::BillPayState;
use crate::status;
use crate::ui_utils::{create_table_state, focused_block, render_pending, status_span};

#[derive(Debug)]
pub struct BillPayPage {
    state: BillPayState,
    today: NaiveDate,
    spinner: ThrobberState,
}

impl BillPayPage {
    pub fn new(store: &FakeStore, delay: Duration, today: NaiveDate) -> Self {
        Self {
            state: BillPayState::new(
                store.bill_payments.clone(),
                store.billers.clone(),
                store.payment_methods.clone(),
                delay,
            ),
            today,
            spinner: ThrobberState::default(),
        }
    }

    fn handle_modal(&mut self, action: &KeyAction) -> Outcome {
        if self.state.biller_search_open {
            match biller_search::handle_action(&mut self.state.biller_search, action) {
                ModalOutcome::Done(biller) => self.state.choose_biller(biller, self.today),
                ModalOutcome::Cancelled => self.state.close_modals(),
                ModalOutcome::Handled | ModalOutcome::Ignored => {}
            }
            return Outcome::Handled;
        }
        match payment_setup::handle_action(&mut self.state.payment_setup, action, self.today) {
            ModalOutcome::Done(payment) => {
                let what = format!("Scheduling {} to {}", payment.amount, payment.biller);
                let message = status::progress(&what);
                self.state.schedule(payment);
                Outcome::Status(message)
            }
            ModalOutcome::Cancelled => {
                self.state.close_modals();
                Outcome::Handled
            }
            ModalOutcome::Handled | ModalOutcome::Ignored => Outcome::Handled,
        }
    }
}

impl Page for BillPayPage {
    fn id(&self) -> PageId {
        PageId::BillPay
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let tabs = Tabs::new(self.state.tab_labels())
            .select(self.state.tab)
            .block(focused_block("Bill pay", ctx.focused, palette))
            .highlight_style(Style::new().fg(palette.accent).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, rows[0]);

        let filtered = self.state.filtered();
        let table_rows: Vec<Row> = filtered
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(p.biller.clone()),
                    Cell::from(p.amount.to_string()),
                    Cell::from(p.due_date.format("%Y-%m-%d").to_string()),
                    Cell::from(p.method.clone()),
                    Cell::from(status_span(p.status, palette)),
                ])
            })
            .collect();
        let count = table_rows.len();
        let table = Table::new(
            table_rows,
            [
                Constraint::Min(20),
                Constraint::Length(13),
                Constraint::Length(11),
                Constraint::Length(22),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(["Biller", "Amount", "Date", "Method", "Status"])
                .style(Style::new().fg(palette.muted)),
        )
        .block(focused_block("Payments", ctx.focused, palette))
        .row_highlight_style(palette.highlight())
        .highlight_symbol(">> ");
        let mut table_state =
            create_table_state(self.state.cursor.selected, self.state.cursor.scroll, count);
        frame.render_stateful_widget(table, rows[1], &mut table_state);

        if self.state.is_scheduling() {
            render_pending(frame, rows[2], "Scheduling payment...", &mut self.spinner, palette);
        }

        if self.state.biller_search_open {
            biller_search::render(frame, area, &self.state.biller_search, ctx);
        } else if self.state.payment_setup_open {
            payment_setup::render(frame, area, &self.state.payment_setup, ctx);
        }
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        if self.state.any_modal_open() {
            return self.handle_modal(action);
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
            KeyAction::InputChar('n') => {
                if self.state.is_scheduling() {
                    return Outcome::Status(status::info("A payment is already being scheduled"));
                }
                self.state.open_biller_search();
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn tick(&mut self) -> Option<String> {
        if self.state.is_scheduling() {
            self.spinner.calc_next();
        }
        let payment = self.state.tick()?;
        Some(status::success(&format!(
            "Scheduled {} to {} on {}",
            payment.amount, payment.biller, payment.due_date
        )))
    }

    fn hints(&self) -> &'static str {
        if self.state.biller_search_open {
            "Type to search | ↑↓ Select | Enter Choose | Esc Cancel"
        } else if self.state.payment_setup_open {
            "Tab Next field | ←→ Method | Enter Schedule | Esc Cancel"
        } else {
            "←→ Status | ↑↓ Select | n New payment | Esc Menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::PaymentStatus;
    use std::thread;
    use std::time::Instant;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn page(delay: Duration) -> BillPayPage {
        BillPayPage::new(&FakeStore::new(), delay, today())
    }

    fn press(page: &mut BillPayPage, actions: &[KeyAction]) {
        for action in actions {
            page.handle_action(action);
        }
    }

    #[test]
    fn test_new_payment_flow_appends_scheduled() {
        let mut page = page(Duration::from_millis(5));
        let before = page.state.payments.len();

        page.handle_action(&KeyAction::InputChar('n'));
        assert!(page.state.biller_search_open);
        page.handle_action(&KeyAction::Select);
        assert!(page.state.payment_setup_open);
        press(&mut page, &[KeyAction::InputChar('9'), KeyAction::InputChar('9')]);
        assert!(matches!(page.handle_action(&KeyAction::Select), Outcome::Status(_)));
        assert!(!page.state.any_modal_open());

        let start = Instant::now();
        let mut message = None;
        while message.is_none() && start.elapsed() < Duration::from_secs(2) {
            message = page.tick();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(message.is_some());
        assert_eq!(page.state.payments.len(), before + 1);
        let added = page.state.payments.last().unwrap();
        assert_eq!(added.status, PaymentStatus::Scheduled);
        assert_eq!(added.amount.cents(), 9_900);
    }

    #[test]
    fn test_escape_closes_modal_without_leaving_page() {
        let mut page = page(Duration::ZERO);
        page.handle_action(&KeyAction::InputChar('n'));
        assert_eq!(page.handle_action(&KeyAction::Back), Outcome::Handled);
        assert!(!page.state.any_modal_open());
        assert_eq!(page.handle_action(&KeyAction::Back), Outcome::Ignored);
    }

    #[test]
    fn test_reopening_resets_search() {
        let mut page = page(Duration::ZERO);
        press(&mut page, &[KeyAction::InputChar('n'), KeyAction::InputChar('x'), KeyAction::Back]);
        page.handle_action(&KeyAction::InputChar('n'));
        assert!(page.state.biller_search.query.value.is_empty());
    }

    #[test]
    fn test_cancelled_schedule_never_lands() {
        let mut page = page(Duration::from_millis(20));
        let before = page.state.payments.len();
        page.handle_action(&KeyAction::InputChar('n'));
        page.handle_action(&KeyAction::Select);
        press(&mut page, &[KeyAction::InputChar('5'), KeyAction::Select]);
        assert!(page.state.is_scheduling());

        let task = page.state.pending.take().unwrap();
        task.cancel();
        thread::sleep(Duration::from_millis(60));
        assert!(page.tick().is_none());
        assert_eq!(page.state.payments.len(), before);
    }
}
