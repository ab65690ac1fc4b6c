use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::ask_penny::Speaker;
use crate::state::AskPennyState;
use crate::status;
use crate::ui_utils::{create_list_state, render_pending, render_text_field};

#[derive(Debug)]
pub struct AskPennyPage {
    state: AskPennyState,
    spinner: ThrobberState,
}

impl AskPennyPage {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: AskPennyState::new(delay),
            spinner: ThrobberState::default(),
        }
    }

    fn transcript(&self, ctx: &RenderContext) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for message in &self.state.messages {
            let (who, style) = match message.speaker {
                Speaker::User => ("You", Style::new().fg(ctx.palette.info)),
                Speaker::Penny => ("Penny", Style::new().fg(ctx.palette.accent)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", who), style.add_modifier(Modifier::BOLD)),
                Span::raw(message.text.as_str()),
            ]));
            lines.push(Line::default());
        }
        lines
    }
}

/// Rows needed to show `lines` wrapped at `width`.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|l| l.width().max(1).div_ceil(width)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

impl Page for AskPennyPage {
    fn id(&self) -> PageId {
        PageId::AskPenny
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(38)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1), Constraint::Length(3)])
            .split(cols[0]);

        let block = Block::bordered()
            .title("Ask Penny")
            .border_style(Style::new().fg(palette.border));
        let inner = block.inner(left[0]);
        let lines = self.transcript(ctx);
        let overflow = wrapped_height(&lines, inner.width).saturating_sub(inner.height);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .scroll((overflow, 0)),
            left[0],
        );

        if self.state.is_thinking() {
            render_pending(frame, left[1], "Penny is thinking...", &mut self.spinner, palette);
        }
        render_text_field(frame, left[2], "Your question", &self.state.input, ctx.focused, palette);

        let items: Vec<ListItem> =
            self.state.suggestions.iter().map(|s| ListItem::new(*s)).collect();
        let mut list_state = create_list_state(
            self.state.suggestion_cursor.selected,
            self.state.suggestion_cursor.scroll,
            items.len(),
        );
        frame.render_stateful_widget(
            List::new(items)
                .block(
                    Block::bordered()
                        .title("Suggestions (↑↓, Enter on empty input)")
                        .border_style(Style::new().fg(palette.border)),
                )
                .highlight_style(palette.highlight())
                .highlight_symbol("› "),
            cols[1],
            &mut list_state,
        );
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::InputChar(c) => self.state.input.push(*c),
            KeyAction::Backspace => {
                self.state.input.pop();
            }
            KeyAction::NavigateUp => {
                self.state.suggestion_cursor.navigate_up();
            }
            KeyAction::NavigateDown => {
                let len = self.state.suggestions.len();
                self.state.suggestion_cursor.navigate_down(len);
            }
            KeyAction::Select => {
                if self.state.is_thinking() {
                    return Outcome::Status(status::info("Penny is still answering"));
                }
                if !self.state.ask() {
                    return Outcome::Ignored;
                }
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn tick(&mut self) -> Option<String> {
        if self.state.is_thinking() {
            self.spinner.calc_next();
        }
        self.state.tick().map(|_| status::info("Penny replied"))
    }

    fn hints(&self) -> &'static str {
        "Type a question | ↑↓ Suggestions | Enter Ask | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_question_gets_answer() {
        let mut page = AskPennyPage::new(Duration::from_millis(5));
        for c in "how do I pay a bill".chars() {
            page.handle_action(&KeyAction::InputChar(c));
        }
        assert_eq!(page.handle_action(&KeyAction::Select), Outcome::Handled);
        assert!(page.state.is_thinking());

        let start = Instant::now();
        while page.tick().is_none() && start.elapsed() < Duration::from_secs(2) {
            thread::sleep(Duration::from_millis(5));
        }
        let reply = page.state.messages.last().unwrap();
        assert_eq!(reply.speaker, Speaker::Penny);
        assert_eq!(reply.text, faq::answer("how do I pay a bill"));
    }

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::from("abcdefghij"), Line::default()];
        assert_eq!(wrapped_height(&lines, 4), 4);
    }
}
