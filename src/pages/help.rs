use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::render_context::RenderContext;
use crate::ui_utils::centered_rect;

const GLOBAL_KEYS: [(&str, &str); 6] = [
    ("Ctrl+C / Ctrl+Q", "Quit (q also quits from the menu)"),
    ("F1", "Toggle this help"),
    ("F2 / Ctrl+T", "Switch light / dark theme"),
    ("Esc", "Close a dialog, go back, or return to the menu"),
    ("Enter / →", "Open the highlighted menu entry"),
    ("↑ ↓", "Move the selection"),
];

const VIEW_KEYS: [(&str, &str); 7] = [
    ("Invoices", "←→ status tabs, / search, Enter opens activity"),
    ("Bill Pay", "n new payment, ←→ status tabs"),
    ("Cross-Border", "Tab fields, ←→ currency, Enter send"),
    ("P2P / A2A", "←→ switch form, Tab fields, Enter send"),
    ("Integrations", "Enter connect/disconnect, s sync"),
    ("Ask Penny", "Type a question or pick a suggestion"),
    ("Settings", "Enter or Space toggles a switch"),
];

#[derive(Debug, Default)]
pub struct HelpPage;

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    fn section<'a>(rows: &[(&'a str, &'a str)], key_style: Style) -> Vec<Line<'a>> {
        rows.iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(format!("{:<16}", key), key_style),
                    Span::raw(*what),
                ])
            })
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let popup = centered_rect(70, 80, area);
        // Clear so the page underneath does not bleed through
        frame.render_widget(Clear, popup);
        let outer = Block::bordered()
            .title("Help")
            .title_bottom(" F1 or Esc to close ")
            .border_style(Style::new().fg(palette.focus))
            .style(palette.base());
        let inner = outer.inner(popup);
        frame.render_widget(outer, popup);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(GLOBAL_KEYS.len() as u16 + 2),
                Constraint::Length(VIEW_KEYS.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(inner);

        let key_style = Style::new().fg(palette.accent).add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Self::section(&GLOBAL_KEYS, key_style))
                .block(Block::bordered().title("Global")),
            sections[0],
        );
        frame.render_widget(
            Paragraph::new(Self::section(&VIEW_KEYS, key_style.fg(palette.warning)))
                .block(Block::bordered().title("Views")),
            sections[1],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "The status bar always shows the keys for the current view.",
                Style::new().fg(palette.muted),
            ))),
            sections[2],
        );
    }
}
