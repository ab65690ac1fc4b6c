use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem},
    Frame,
};

use crate::data::Biller;
use crate::key_handler::KeyAction;
use crate::pages::ModalOutcome;
use crate::render_context::RenderContext;
use crate::state::BillerSearchState;
use crate::ui_utils::{centered_rect, create_list_state, render_text_field};

/// Draws the biller picker over `area`. Only called while the modal is open.
pub fn render(frame: &mut Frame, area: Rect, state: &BillerSearchState, ctx: &RenderContext) {
    let palette = ctx.palette;
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title("Choose a biller")
        .title_bottom(" Enter Select | Esc Cancel ")
        .border_style(Style::new().fg(palette.focus))
        .style(palette.base());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);
    render_text_field(frame, rows[0], "Search billers", &state.query, true, palette);

    let items: Vec<ListItem> = state
        .filtered()
        .iter()
        .map(|b| {
            ListItem::new(Line::from(vec![
                Span::raw(b.name.as_str()),
                Span::styled(
                    format!("  {} · {}", b.category, b.account_hint),
                    Style::new().fg(palette.muted),
                ),
            ]))
        })
        .collect();
    let empty = items.is_empty();
    let mut list_state = create_list_state(state.cursor.selected, state.cursor.scroll, items.len());
    let list = List::new(items)
        .highlight_style(palette.highlight())
        .highlight_symbol(">> ");
    if empty {
        let none = Span::styled("  No billers match", Style::new().fg(palette.muted));
        frame.render_widget(Line::from(none), rows[1]);
    } else {
        frame.render_stateful_widget(list, rows[1], &mut list_state);
    }
}

pub fn handle_action(state: &mut BillerSearchState, action: &KeyAction) -> ModalOutcome<Biller> {
    match action {
        KeyAction::Back => return ModalOutcome::Cancelled,
        KeyAction::Select => {
            return match state.selected() {
                Some(biller) => ModalOutcome::Done(biller.clone()),
                None => ModalOutcome::Handled,
            };
        }
        KeyAction::InputChar(c) => state.push_query(*c),
        KeyAction::Backspace => state.pop_query(),
        KeyAction::NavigateUp => {
            state.cursor.navigate_up();
        }
        KeyAction::NavigateDown => {
            state.navigate_down();
        }
        _ => return ModalOutcome::Ignored,
    }
    ModalOutcome::Handled
}
