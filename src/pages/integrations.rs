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
use crate::state::IntegrationsState;
use crate::status::{self, IntegrationStatus, StatusStyle};
use crate::ui_utils::{create_table_state, focused_block, render_pending, status_span};

#[derive(Debug)]
pub struct IntegrationsPage {
    state: IntegrationsState,
    spinner: ThrobberState,
}

impl IntegrationsPage {
    pub fn new(store: &FakeStore, delay: Duration) -> Self {
        Self {
            state: IntegrationsState::new(store.integrations.clone(), delay),
            spinner: ThrobberState::default(),
        }
    }
}

impl Page for IntegrationsPage {
    fn id(&self) -> PageId {
        PageId::Integrations
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(5), Constraint::Length(1)])
            .split(area);

        let table_rows: Vec<Row> = self
            .state
            .integrations
            .iter()
            .map(|i| {
                let synced = i
                    .last_synced
                    .map_or_else(|| "never".to_string(), |t| t.format("%b %d %H:%M").to_string());
                Row::new(vec![
                    Cell::from(i.name.clone()),
                    Cell::from(i.category.clone()),
                    Cell::from(status_span(i.status, palette)),
                    Cell::from(synced),
                ])
            })
            .collect();
        let count = table_rows.len();
        let connected = self
            .state
            .integrations
            .iter()
            .filter(|i| i.status == IntegrationStatus::Connected)
            .count();
        let title = format!("Integrations ({} of {} connected)", connected, count);
        let table = Table::new(
            table_rows,
            [
                Constraint::Min(16),
                Constraint::Length(14),
                Constraint::Length(16),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(["Name", "Category", "Status", "Last sync"])
                .style(Style::new().fg(palette.muted)),
        )
        .block(focused_block(&title, ctx.focused, palette))
        .row_highlight_style(palette.highlight())
        .highlight_symbol(">> ");
        let mut table_state =
            create_table_state(self.state.cursor.selected, self.state.cursor.scroll, count);
        frame.render_stateful_widget(table, rows[0], &mut table_state);

        if let Some(selected) = self.state.selected() {
            let action = match selected.status {
                IntegrationStatus::Connected => "Enter disconnects · s syncs now",
                IntegrationStatus::Syncing => "Sync in progress",
                IntegrationStatus::Disconnected | IntegrationStatus::Error => "Enter connects",
            };
            let detail = vec![
                Line::from(Span::styled(
                    selected.name.as_str(),
                    Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(selected.description.as_str()),
                Line::from(Span::styled(action, Style::new().fg(palette.muted))),
            ];
            frame.render_widget(
                Paragraph::new(detail).block(
                    Block::bordered()
                        .title("Details")
                        .border_style(Style::new().fg(palette.border)),
                ),
                rows[1],
            );
        }

        if self.state.syncing_count() > 0 {
            let label = format!("Syncing {} integration(s)...", self.state.syncing_count());
            render_pending(frame, rows[2], &label, &mut self.spinner, palette);
        }
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        let index = self.state.cursor.selected;
        match action {
            KeyAction::NavigateUp => {
                self.state.cursor.navigate_up();
            }
            KeyAction::NavigateDown => {
                self.state.navigate_down();
            }
            KeyAction::Select => {
                let Some(next) = self.state.toggle_connection(index) else {
                    return Outcome::Status(status::info("Wait for the sync to finish"));
                };
                let name = self.state.selected().map_or("", |i| i.name.as_str());
                return Outcome::Status(status::success(&format!("{}: {}", name, next.label())));
            }
            KeyAction::InputChar('s') => {
                if self.state.start_sync(index) {
                    return Outcome::Status(status::progress("Sync started"));
                }
                return Outcome::Status(status::info("Only connected integrations can sync"));
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn tick(&mut self) -> Option<String> {
        if self.state.syncing_count() > 0 {
            self.spinner.calc_next();
        }
        let finished = self.state.tick();
        if finished.is_empty() {
            return None;
        }
        Some(status::success(&format!("Synced {}", finished.join(", "))))
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select | Enter Connect/Disconnect | s Sync | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_toggles_connection() {
        let mut page = IntegrationsPage::new(&FakeStore::new(), Duration::ZERO);
        assert_eq!(page.state.integrations[0].status, IntegrationStatus::Connected);
        let outcome = page.handle_action(&KeyAction::Select);
        assert!(matches!(outcome, Outcome::Status(ref m) if m.ends_with("Not connected")));
        assert_eq!(page.state.integrations[0].status, IntegrationStatus::Disconnected);
    }

    #[test]
    fn test_sync_requires_connection() {
        let mut page = IntegrationsPage::new(&FakeStore::new(), Duration::from_millis(50));
        page.handle_action(&KeyAction::Select);
        let outcome = page.handle_action(&KeyAction::InputChar('s'));
        assert!(matches!(outcome, Outcome::Status(ref m) if m.starts_with(status::INFO)));
        assert_eq!(page.state.syncing_count(), 0);
    }

    #[test]
    fn test_sync_marks_syncing() {
        let mut page = IntegrationsPage::new(&FakeStore::new(), Duration::from_millis(50));
        page.handle_action(&KeyAction::InputChar('s'));
        assert_eq!(page.state.integrations[0].status, IntegrationStatus::Syncing);
        assert_eq!(page.state.syncing_count(), 1);
    }
}
