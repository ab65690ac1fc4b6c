use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use crate::data::FakeStore;
use crate::key_handler::KeyAction;
use crate::pages::settings::toggle_item;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::security::SecurityPane;
use crate::state::SecurityState;
use crate::status;
use crate::ui_utils::{create_list_state, focused_block};

#[derive(Debug)]
pub struct SecurityPage {
    state: SecurityState,
}

impl SecurityPage {
    pub fn new(store: &FakeStore) -> Self {
        Self {
            state: SecurityState::new(store.sessions.clone()),
        }
    }

    fn activate(&mut self) -> Outcome {
        match self.state.pane {
            SecurityPane::Toggles => match self.state.toggles.toggle_selected() {
                Some(t) => Outcome::Status(status::success(&format!(
                    "{} {}",
                    t.label,
                    if t.enabled { "enabled" } else { "disabled" }
                ))),
                None => Outcome::Ignored,
            },
            SecurityPane::Sessions => match self.state.revoke_selected() {
                Some(session) => {
                    Outcome::Status(status::success(&format!("Signed out {}", session.device)))
                }
                None => Outcome::Status(status::info("The current session cannot be revoked")),
            },
        }
    }
}

impl Page for SecurityPage {
    fn id(&self) -> PageId {
        PageId::Security
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let toggles_focused = ctx.focused && self.state.pane == SecurityPane::Toggles;
        let items: Vec<ListItem> =
            self.state.toggles.items.iter().map(|t| toggle_item(t, ctx)).collect();
        let cursor = self.state.toggles.cursor;
        let mut toggle_state = create_list_state(cursor.selected, cursor.scroll, items.len());
        let mut toggles =
            List::new(items).block(focused_block("Security", toggles_focused, palette));
        if toggles_focused {
            toggles = toggles.highlight_style(palette.highlight());
        }
        frame.render_stateful_widget(toggles, rows[0], &mut toggle_state);

        let sessions_focused = ctx.focused && self.state.pane == SecurityPane::Sessions;
        let sessions: Vec<ListItem> = self
            .state
            .sessions
            .iter()
            .map(|s| {
                let mut spans = vec![
                    Span::styled(s.device.as_str(), Style::new().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {} · {}", s.location, s.last_active),
                        Style::new().fg(palette.muted),
                    ),
                ];
                if s.current {
                    spans.push(Span::styled("  this device", Style::new().fg(palette.positive)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        let cursor = self.state.session_cursor;
        let mut session_state = create_list_state(cursor.selected, cursor.scroll, sessions.len());
        let mut list =
            List::new(sessions).block(focused_block("Active sessions", sessions_focused, palette));
        if sessions_focused {
            list = list.highlight_style(palette.highlight()).highlight_symbol(">> ");
        }
        frame.render_stateful_widget(list, rows[1], &mut session_state);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::NextField | KeyAction::PrevField => self.state.switch_pane(),
            KeyAction::NavigateUp => match self.state.pane {
                SecurityPane::Toggles => {
                    self.state.toggles.cursor.navigate_up();
                }
                SecurityPane::Sessions => {
                    self.state.session_cursor.navigate_up();
                }
            },
            KeyAction::NavigateDown => match self.state.pane {
                SecurityPane::Toggles => {
                    self.state.toggles.navigate_down();
                }
                SecurityPane::Sessions => {
                    let len = self.state.sessions.len();
                    self.state.session_cursor.navigate_down(len);
                }
            },
            KeyAction::Select | KeyAction::InputChar(' ') => return self.activate(),
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn hints(&self) -> &'static str {
        match self.state.pane {
            SecurityPane::Toggles => "Tab Sessions | ↑↓ Select | Enter Toggle | Esc Menu",
            SecurityPane::Sessions => "Tab Switches | ↑↓ Select | Enter Sign out | Esc Menu",
        }
    }
}
