use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::data::BillPayment;
use crate::key_handler::KeyAction;
use crate::pages::ModalOutcome;
use crate::render_context::RenderContext;
use crate::state::payment_setup::SetupField;
use crate::state::PaymentSetupState;
use crate::ui_utils::{centered_rect, render_choice, render_text_field};

pub fn render(frame: &mut Frame, area: Rect, state: &PaymentSetupState, ctx: &RenderContext) {
    let palette = ctx.palette;
    let popup = centered_rect(56, 80, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title("Schedule payment")
        .title_bottom(" Tab Next field | Enter Schedule | Esc Cancel ")
        .border_style(Style::new().fg(palette.focus))
        .style(palette.base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let biller = state.biller.as_ref().map_or("", |b| b.name.as_str());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Pay ", Style::new().fg(palette.muted)),
            Span::styled(biller, Style::new().fg(palette.accent).add_modifier(Modifier::BOLD)),
        ])),
        rows[0],
    );
    render_text_field(
        frame,
        rows[1],
        "Amount",
        &state.amount,
        state.focus == SetupField::Amount,
        palette,
    );
    render_text_field(
        frame,
        rows[2],
        "Payment date (YYYY-MM-DD)",
        &state.date,
        state.focus == SetupField::Date,
        palette,
    );
    let method = state.method().map_or("No payment methods", |m| m.label.as_str());
    render_choice(
        frame,
        rows[3],
        "Pay from",
        method,
        state.focus == SetupField::Method,
        palette,
    );
}

pub fn handle_action(
    state: &mut PaymentSetupState,
    action: &KeyAction,
    today: NaiveDate,
) -> ModalOutcome<BillPayment> {
    match action {
        KeyAction::Back => return ModalOutcome::Cancelled,
        KeyAction::Select => {
            return match state.submit(today) {
                Some(payment) => ModalOutcome::Done(payment),
                None => ModalOutcome::Handled,
            };
        }
        KeyAction::NextField | KeyAction::NavigateDown => state.focus = state.focus.step(true),
        KeyAction::PrevField | KeyAction::NavigateUp => state.focus = state.focus.step(false),
        KeyAction::NavigateLeft if state.focus == SetupField::Method => state.cycle_method(false),
        KeyAction::NavigateRight if state.focus == SetupField::Method => state.cycle_method(true),
        KeyAction::InputChar(c) => match state.focused_field() {
            Some(field) => field.push(*c),
            None => return ModalOutcome::Ignored,
        },
        KeyAction::Backspace => match state.focused_field() {
            Some(field) => {
                field.pop();
            }
            None => return ModalOutcome::Ignored,
        },
        _ => return ModalOutcome::Ignored,
    }
    ModalOutcome::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FakeStore;
    use crate::status::PaymentStatus;
    use crate::validation::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn state() -> PaymentSetupState {
        let store = FakeStore::new();
        let mut state = PaymentSetupState::new(store.payment_methods);
        state.reset(store.billers[0].clone(), today());
        state
    }

    fn type_text(state: &mut PaymentSetupState, text: &str) {
        for c in text.chars() {
            handle_action(state, &KeyAction::InputChar(c), today());
        }
    }

    #[test]
    fn test_submit_builds_scheduled_payment() {
        let mut s = state();
        type_text(&mut s, "120.50");
        handle_action(&mut s, &KeyAction::NextField, today());
        handle_action(&mut s, &KeyAction::NextField, today());
        handle_action(&mut s, &KeyAction::NavigateRight, today());
        match handle_action(&mut s, &KeyAction::Select, today()) {
            ModalOutcome::Done(payment) => {
                assert_eq!(payment.amount.cents(), 12_050);
                assert_eq!(payment.biller, "Pacific Gas & Electric");
                assert_eq!(payment.method, "Business Visa ••8890");
                assert_eq!(payment.status, PaymentStatus::Scheduled);
                assert_eq!(payment.due_date, NaiveDate::from_ymd_opt(2025, 3, 8).unwrap());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_amount_stays_open() {
        let mut s = state();
        assert_eq!(handle_action(&mut s, &KeyAction::Select, today()), ModalOutcome::Handled);
        assert_eq!(s.amount.error, Some(ValidationError::Required("Amount")));
    }

    #[test]
    fn test_typing_on_method_is_ignored() {
        let mut s = state();
        handle_action(&mut s, &KeyAction::PrevField, today());
        assert_eq!(s.focus, SetupField::Method);
        assert_eq!(
            handle_action(&mut s, &KeyAction::InputChar('x'), today()),
            ModalOutcome::Ignored
        );
    }
}
