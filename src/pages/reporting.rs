use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table, Tabs},
    Frame,
};

use crate::data::{FakeStore, ReportKind, ReportRow};
use crate::key_handler::KeyAction;
use crate::pages::{Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::PageId;
use crate::state::list::cycle;
use crate::ui_utils::{focused_block, format_change};

/// Static financial reports, one tab per report.
#[derive(Debug)]
pub struct ReportingPage {
    reports: Vec<(ReportKind, Vec<ReportRow>)>,
    tab: usize,
}

impl ReportingPage {
    pub fn new(store: &FakeStore) -> Self {
        Self {
            reports: ReportKind::ALL.iter().map(|kind| (*kind, store.report(*kind))).collect(),
            tab: 0,
        }
    }

    pub fn active(&self) -> Option<&(ReportKind, Vec<ReportRow>)> {
        self.reports.get(self.tab)
    }
}

impl Page for ReportingPage {
    fn id(&self) -> PageId {
        PageId::Reporting
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = ctx.palette;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let titles: Vec<&str> = self.reports.iter().map(|(kind, _)| kind.title()).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab)
            .block(focused_block("Reports", ctx.focused, palette))
            .highlight_style(Style::new().fg(palette.accent).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, rows[0]);

        let Some((kind, report)) = self.active() else {
            return;
        };
        let table_rows: Vec<Row> = report
            .iter()
            .map(|row| {
                let change = row.change_percent();
                let tone = match change {
                    Some(p) if p > 0.0 => palette.positive,
                    Some(p) if p < 0.0 => palette.negative,
                    _ => palette.muted,
                };
                Row::new(vec![
                    Cell::from(row.label),
                    Cell::from(row.current.to_string()),
                    Cell::from(row.previous.to_string()),
                    Cell::from(format_change(change)).style(Style::new().fg(tone)),
                ])
            })
            .collect();
        let table = Table::new(
            table_rows,
            [
                Constraint::Min(22),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(["", "This period", "Last period", "Change"])
                .style(Style::new().fg(palette.muted)),
        )
        .block(focused_block(kind.title(), false, palette));
        frame.render_widget(table, rows[1]);
    }

    fn handle_action(&mut self, action: &KeyAction) -> Outcome {
        match action {
            KeyAction::NavigateLeft => self.tab = cycle(self.tab, self.reports.len(), false),
            KeyAction::NavigateRight | KeyAction::NextField => {
                self.tab = cycle(self.tab, self.reports.len(), true)
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Handled
    }

    fn hints(&self) -> &'static str {
        "←→ Report | Esc Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cover_every_report() {
        let page = ReportingPage::new(&FakeStore::new());
        assert_eq!(page.reports.len(), ReportKind::ALL.len());
        assert!(page.reports.iter().all(|(_, rows)| !rows.is_empty()));
    }

    #[test]
    fn test_tab_wraps() {
        let mut page = ReportingPage::new(&FakeStore::new());
        page.handle_action(&KeyAction::NavigateLeft);
        assert_eq!(page.active().map(|(k, _)| *k), Some(ReportKind::ArAging));
        page.handle_action(&KeyAction::NavigateRight);
        assert_eq!(page.active().map(|(k, _)| *k), Some(ReportKind::ProfitAndLoss));
    }
}
