use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, ListState, Paragraph, TableState},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::state::form::TextField;
use crate::status::StatusStyle;
use crate::theme::Palette;

/// Creates a ListState with proper bounds checking and scrolling
pub fn create_list_state(selected: usize, scroll: usize, item_count: usize) -> ListState {
    ListState::default()
        .with_selected(Some(selected.min(item_count.saturating_sub(1))))
        .with_offset(scroll)
}

pub fn create_table_state(selected: usize, scroll: usize, row_count: usize) -> TableState {
    let selected = (row_count > 0).then(|| selected.min(row_count - 1));
    TableState::default().with_selected(selected).with_offset(scroll)
}

/// Creates a block with conditional focus styling
pub fn focused_block<'a>(title: &'a str, is_focused: bool, palette: &Palette) -> Block<'a> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().fg(palette.focus))
    } else {
        block.border_style(Style::new().fg(palette.border))
    }
}

/// Renders a one-line text input with its validation message in the bottom border.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    is_focused: bool,
    palette: &Palette,
) {
    let mut block = focused_block(label, is_focused, palette);
    if let Some(err) = &field.error {
        block = block
            .border_style(Style::new().fg(palette.negative))
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", err),
                Style::new().fg(palette.negative),
            )));
    }
    let cursor = if is_focused { "▏" } else { "" };
    let text = Line::from(vec![
        Span::styled(field.value.as_str(), Style::new().fg(palette.text)),
        Span::styled(cursor, Style::new().fg(palette.focus)),
    ]);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Renders a selector row such as a currency or payment-method picker.
pub fn render_choice(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_focused: bool,
    palette: &Palette,
) {
    let arrows = if is_focused { ("◀ ", " ▶") } else { ("", "") };
    let text = Line::from(vec![
        Span::styled(arrows.0, Style::new().fg(palette.focus)),
        Span::styled(value, Style::new().fg(palette.text).add_modifier(Modifier::BOLD)),
        Span::styled(arrows.1, Style::new().fg(palette.focus)),
    ]);
    frame.render_widget(
        Paragraph::new(text).block(focused_block(label, is_focused, palette)),
        area,
    );
}

/// Status glyph and label colored by the status tone.
pub fn status_span<S: StatusStyle>(status: S, palette: &Palette) -> Span<'static> {
    Span::styled(format!("{} {}", status.symbol(), status.label()), palette.status(status))
}

/// Spinner shown while a simulated call is in flight.
pub fn render_pending(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    state: &mut ThrobberState,
    palette: &Palette,
) {
    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::new().fg(palette.warning))
        .throbber_style(Style::new().fg(palette.warning).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(throbber, area, state);
}

/// Rect of the given percentage size centered in `area`, for modal overlays
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Change vs. previous period, e.g. `▲ 7.2%`.
pub fn format_change(percent: Option<f64>) -> String {
    match percent {
        Some(p) if p > 0.0 => format!("▲ {:.1}%", p),
        Some(p) if p < 0.0 => format!("▼ {:.1}%", p.abs()),
        Some(_) => "0.0%".to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_clamps_selection() {
        let state = create_list_state(10, 0, 3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_table_state_empty() {
        let state = create_table_state(4, 0, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, area);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(7.25)), "▲ 7.2%");
        assert_eq!(format_change(Some(-12.0)), "▼ 12.0%");
        assert_eq!(format_change(None), "—");
    }
}
