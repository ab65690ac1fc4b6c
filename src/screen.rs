use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Block,
    Frame,
};

use crate::app::Focus;
use crate::pages::help::HelpPage;
use crate::pages::main_menu::MainMenu;
use crate::pages::Page;
use crate::render_context::RenderContext;

const MENU_HINTS: &str = "↑↓ Select | Enter Open | q Quit | F1 Help | F2 Theme";

/// Frame-level inputs that are not owned by the screen.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub focus: Focus,
    pub status: &'a str,
    pub show_help: bool,
}

/// Layout shell: header, sidebar, content area, status bar and help overlay.
#[derive(Debug, Default)]
pub struct Screen {
    main_menu: MainMenu,
    help: HelpPage,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> &MainMenu {
        &self.main_menu
    }

    pub fn menu_mut(&mut self) -> &mut MainMenu {
        &mut self.main_menu
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        page: &mut dyn Page,
        chrome: Chrome,
        ctx: &RenderContext,
    ) {
        let palette = ctx.palette;
        let area = frame.area();
        let title = Line::from(Span::styled(
            " Penny · Financial Operations ",
            Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
        ))
        .left_aligned();
        let theme = Line::from(format!(" {} ", ctx.mode.label())).right_aligned();
        let block = Block::bordered()
            .title(title)
            .title(theme)
            .border_style(Style::new().fg(palette.border))
            .style(palette.base());
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Split into main content and bottom status bar
        let vlayout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(inner_area);

        // Inside main content, split into menu and page area
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(24), Constraint::Min(0)],
        )
        .split(vlayout[0]);

        let menu_focused = chrome.focus == Focus::Menu;
        self.main_menu.render(frame, layout[0], menu_focused, ctx);

        let page_ctx = RenderContext {
            focused: !menu_focused,
            ..*ctx
        };
        page.render(frame, layout[1], &page_ctx);

        let hints = if menu_focused { MENU_HINTS } else { page.hints() };
        let status_line = Line::from(vec![
            Span::styled(format!(" {} ", chrome.status), Style::new().add_modifier(Modifier::BOLD)),
            Span::raw("| "),
            Span::raw(hints),
        ])
        .style(Style::new().fg(palette.background).bg(palette.muted));
        frame.render_widget(status_line, vlayout[1]);

        if chrome.show_help {
            self.help.render(frame, area, ctx);
        }
    }
}
