use ratatui::{
    layout::Rect,
    widgets::{List, ListItem},
    Frame,
};

use crate::key_handler::KeyAction;
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::ui_utils::{create_list_state, focused_block};

/// Sidebar entries: page, label, icon. The invoice detail page is reached from
/// the invoices table only.
pub const NAV_ITEMS: [(PageId, &str, &str); 11] = [
    (PageId::Dashboard, "Dashboard", "◆"),
    (PageId::Invoices, "Invoices", "▤"),
    (PageId::Customers, "Customers", "☺"),
    (PageId::BillPay, "Bill Pay", "⇄"),
    (PageId::CrossBorder, "Cross-Border", "⊕"),
    (PageId::P2pA2a, "P2P / A2A", "⇆"),
    (PageId::Integrations, "Integrations", "⚙"),
    (PageId::Reporting, "Reporting", "▦"),
    (PageId::AskPenny, "Ask Penny", "✦"),
    (PageId::Settings, "Settings", "≡"),
    (PageId::Security, "Security", "⚿"),
];

#[derive(Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_page(&self) -> PageId {
        NAV_ITEMS.get(self.selected).map_or(PageId::default(), |(page, _, _)| *page)
    }

    /// Moves the highlight to `page`. The detail page highlights its parent.
    pub fn sync_to(&mut self, page: PageId) {
        let target = match page {
            PageId::InvoiceActivity => PageId::Invoices,
            other => other,
        };
        if let Some(idx) = NAV_ITEMS.iter().position(|(p, _, _)| *p == target) {
            self.selected = idx;
        }
    }

    /// Handles a key while the sidebar has focus.
    ///
    /// Returns the page to open when the user confirms a choice.
    pub fn handle_key_action(&mut self, action: &KeyAction) -> Option<PageId> {
        match action {
            KeyAction::NavigateUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyAction::NavigateDown => {
                if self.selected < NAV_ITEMS.len() - 1 {
                    self.selected += 1;
                }
                None
            }
            KeyAction::Select | KeyAction::NavigateRight => Some(self.selected_page()),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, is_focused: bool, ctx: &RenderContext) {
        let items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .map(|(_, label, icon)| ListItem::new(format!("{} {}", icon, label)))
            .collect();
        let mut state = create_list_state(self.selected, 0, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block("Menu", is_focused, ctx.palette))
                .highlight_style(ctx.palette.highlight())
                .highlight_symbol(">> "),
            area,
            &mut state,
        );
    }
}
