use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};

use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::toggles::{notification_toggles, Toggle, ToggleList};
use crate::status;
use crate::ui_utils::{create_list_state, focused_block};

const PROFILE: [(&str, &str); 4] = [
    ("Name", "Jordan Avery"),
    ("Business", "Avery Design Co."),
    ("Email", "jordan@averydesign.example"),
    ("Plan", "Penny Business"),
];

pub(crate) fn toggle_item<'a>(toggle: &'a Toggle, ctx: &RenderContext) -> ListItem<'a> {
    let (mark, color) = if toggle.enabled {
        ("[on] ", ctx.palette.positive)
    } else {
        ("[off]", ctx.palette.muted)
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(mark, Style::new().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::raw(toggle.label),
        ]),
        Line::from(Span::styled(
            format!("       {}", toggle.description),
            Style::new().fg(ctx.palette.muted),
        )),
    ])
}

#[derive(Debug)]
pub struct SettingsPage {
    notifications: ToggleList,
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPage {
    pub fn new() -> Self {
        Self {
            notifications: notification_toggles(),
        }
    }
}

impl Page for SettingsPage {
    fn id(&self) -> PageId {
        PageId::Settings
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(area);

        let label = Style::new().fg(palette.muted);
        let mut profile: Vec<Line> = PROFILE
            .iter()
            .map(|(k, v)| {
                Line::from(vec![Span::styled(format!("{:<10}", k), label), Span::raw(*v)])
            })
            .collect();
        profile.push(Line::from(vec![
            Span::styled(format!("{:<10}", "Theme"), label),
            Span::raw(ctx.mode.label()),
            Span::styled("  (F2 to switch)", label),
        ]));
        frame.render_widget(
            Paragraph::new(profile).block(
                Block::bordered()
                    .title("Profile")
                    .border_style(Style::new().fg(palette.border)),
            ),
            rows[0],
        );

        let items: Vec<ListItem> =
            self.notifications.items.iter().map(|t| toggle_item(t, ctx)).collect();
        let cursor = self.notifications.cursor;
        let mut state = create_list_state(cursor.selected, cursor.scroll, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block("Notifications", ctx.focused, palette))
                .highlight_style(palette.highlight()),
            rows[1],
            &mut state,
        );
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::NavigateUp => {
                self.notifications.cursor.navigate_up();
            }
            KeyAction::NavigateDown => {
                self.notifications.navigate_down();
            }
            KeyAction::Select | KeyAction::InputChar(' ') => {
                return match self.notifications.toggle_selected() {
                    Some(t) => Outcome::Status(status::success(&format!(
                        "{} {}",
                        t.label,
                        if t.enabled { "on" } else { "off" }
                    ))),
                    None => Outcome::Ignored,
                };
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select | Enter/Space Toggle | F2 Theme | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_toggles_twice_restores() {
        let mut page = SettingsPage::new();
        let original = page.notifications.items[0].enabled;
        page.handle_action(&KeyAction::Select);
        assert_ne!(page.notifications.items[0].enabled, original);
        page.handle_action(&KeyAction::InputChar(' '));
        assert_eq!(page.notifications.items[0].enabled, original);
    }

    #[test]
    fn test_toggle_reports_new_value() {
        let mut page = SettingsPage::new();
        page.handle_action(&KeyAction::NavigateDown);
        assert_eq!(
            page.handle_action(&KeyAction::Select),
            Outcome::Status(status::success("SMS alerts on"))
        );
    }
}
