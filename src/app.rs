//! Root composition: owns the router, theme and mounted page, and routes key
//! actions between the sidebar, the page and the router.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use ratatui::{DefaultTerminal, Frame};
use uuid::Uuid;

use crate::config::Config;
use crate::data::FakeStore;
use crate::key_handler::{KeyAction, KeyHandler};
use crate::pages::{mount, MountContext, Outcome, Page};
use crate::render_context::RenderContext;
use crate::router::{NavRequest, PageId, Router};
use crate::screen::{Chrome, Screen};
use crate::status;
use crate::theme::ThemeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    View,
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    router: Router,
    theme: ThemeStore,
    store: FakeStore,
    config: Config,
    page: Box<dyn Page>,
    /// Resolved page and record the current view was mounted for.
    mounted: (PageId, Option<Uuid>),
    focus: Focus,
    status_message: String,
    show_help: bool,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub fn new(config: Config) -> Self {
        let router = Router::new(config.start_page());
        let store = FakeStore::new();
        let start = router.resolve().page;
        let page = mount(
            start,
            MountContext {
                store: &store,
                record: None,
                delay: config.simulated_delay(),
                today: today(),
            },
        );
        let mut screen = Screen::new();
        screen.menu_mut().sync_to(start);

        Self {
            running: false,
            screen,
            key_handler: KeyHandler::new(),
            router,
            theme: ThemeStore::new(config.theme),
            store,
            config,
            page,
            mounted: (start, None),
            focus: Focus::Menu,
            status_message: String::from("Ready | F1 for help"),
            show_help: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let tick_rate = self.config.tick_rate();
        let mut last_tick = Instant::now();
        tracing::info!(page = %self.router.active_page(), "penny started");
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            let action = self.key_handler.next_action(timeout)?;
            if self.handle_action(action) {
                self.quit();
            }
            if last_tick.elapsed() >= tick_rate {
                self.tick();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let ctx = RenderContext::new(
            self.theme.palette(),
            self.theme.mode(),
            self.focus == Focus::View,
            today(),
        );
        let chrome = Chrome {
            focus: self.focus,
            status: &self.status_message,
            show_help: self.show_help,
        };
        self.screen.render(frame, self.page.as_mut(), chrome, &ctx);
    }

    pub fn active_view(&self) -> PageId {
        self.page.id()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies a navigation request and remounts the view if the resolved
    /// page or record changed.
    pub fn navigate(&mut self, request: NavRequest) {
        self.router.apply(request);
        let resolved = self.router.resolve();
        let key = (resolved.page, resolved.record.map(|r| r.id));
        if key != self.mounted {
            // Replacing the box drops the old view and cancels its pending tasks
            self.page = mount(
                resolved.page,
                MountContext {
                    store: &self.store,
                    record: resolved.record,
                    delay: self.config.simulated_delay(),
                    today: today(),
                },
            );
            self.mounted = key;
        }
        self.screen.menu_mut().sync_to(resolved.page);
    }

    fn tick(&mut self) {
        if let Some(message) = self.page.tick() {
            self.status_message = message;
        }
    }

    /// Handles one key action. Returns `true` when the app should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            // The run loop ticks on its own schedule
            KeyAction::Tick | KeyAction::None => return false,
            KeyAction::Help => {
                self.show_help = !self.show_help;
                return false;
            }
            KeyAction::ToggleTheme => {
                let mode = self.theme.toggle();
                self.status_message = status::info(&format!("Theme: {}", mode.label()));
                return false;
            }
            _ => {}
        }

        if self.show_help {
            if action == KeyAction::Back {
                self.show_help = false;
            }
            return false;
        }

        match self.focus {
            Focus::Menu => self.handle_menu_action(action),
            Focus::View => {
                self.handle_view_action(action);
                false
            }
        }
    }

    fn handle_menu_action(&mut self, action: KeyAction) -> bool {
        if action == KeyAction::InputChar('q') {
            return true;
        }
        if let Some(page) = self.screen.menu_mut().handle_key_action(&action) {
            self.navigate(NavRequest::Navigate(page));
            self.focus = Focus::View;
        }
        false
    }

    fn handle_view_action(&mut self, action: KeyAction) {
        match self.page.handle_action(&action) {
            Outcome::Ignored => {
                if action == KeyAction::Back {
                    self.focus = Focus::Menu;
                }
            }
            Outcome::Handled => {}
            Outcome::Status(message) => self.status_message = message,
            Outcome::Navigate(request) => self.navigate(request),
        }
    }

    fn quit(&mut self) {
        tracing::info!("penny shutting down");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(Config {
            simulated_delay_ms: 5,
            ..Config::default()
        })
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_detail_page_without_record_renders_dashboard() {
        let mut app = app();
        app.navigate(NavRequest::Navigate(PageId::InvoiceActivity));
        assert_eq!(app.router().resolve().page, PageId::Dashboard);
        assert_eq!(app.active_view(), PageId::Dashboard);
        assert!(screen_text(&mut app).contains("Quick links"));
    }

    #[test]
    fn test_menu_enter_opens_page_and_focuses_view() {
        let mut app = app();
        assert_eq!(app.focus(), Focus::Menu);
        app.handle_action(KeyAction::NavigateDown);
        app.handle_action(KeyAction::Select);
        assert_eq!(app.active_view(), PageId::Invoices);
        assert_eq!(app.focus(), Focus::View);
    }

    #[test]
    fn test_invoice_drilldown_and_back() {
        let mut app = app();
        app.navigate(NavRequest::Navigate(PageId::Invoices));
        app.focus = Focus::View;

        app.handle_action(KeyAction::Select);
        assert_eq!(app.active_view(), PageId::InvoiceActivity);
        let number = app.router().selected_record().map(|r| r.number.clone());
        assert_eq!(number.as_deref(), Some("INV-1042"));
        assert!(screen_text(&mut app).contains("Line items"));

        app.handle_action(KeyAction::Back);
        assert_eq!(app.active_view(), PageId::Invoices);
        assert!(app.router().selected_record().is_none());
        assert!(app.router().invariant_holds());
    }

    #[test]
    fn test_escape_from_view_returns_to_menu() {
        let mut app = app();
        app.focus = Focus::View;
        assert!(!app.handle_action(KeyAction::Back));
        assert_eq!(app.focus(), Focus::Menu);
    }

    #[test]
    fn test_q_quits_only_from_menu() {
        let mut app = app();
        app.navigate(NavRequest::Navigate(PageId::Customers));
        app.focus = Focus::View;
        assert!(!app.handle_action(KeyAction::InputChar('q')));
        app.focus = Focus::Menu;
        assert!(app.handle_action(KeyAction::InputChar('q')));
    }

    #[test]
    fn test_theme_toggle_updates_header() {
        let mut app = app();
        assert!(screen_text(&mut app).contains("Dark"));
        app.handle_action(KeyAction::ToggleTheme);
        assert!(screen_text(&mut app).contains("Light"));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        app.handle_action(KeyAction::Help);
        app.handle_action(KeyAction::NavigateDown);
        app.handle_action(KeyAction::Select);
        assert_eq!(app.active_view(), PageId::Dashboard);
        assert!(screen_text(&mut app).contains("Global"));
        app.handle_action(KeyAction::Back);
        app.handle_action(KeyAction::Select);
        assert_eq!(app.active_view(), PageId::Dashboard);
        assert_eq!(app.focus(), Focus::View);
    }

    #[test]
    fn test_unknown_start_page_falls_back() {
        let app = App::new(Config {
            start_page: "ledger".to_string(),
            ..Config::default()
        });
        assert_eq!(app.active_view(), PageId::Dashboard);
    }

    #[test]
    fn test_renavigating_same_page_keeps_view_state() {
        let mut app = app();
        app.navigate(NavRequest::Navigate(PageId::Settings));
        app.focus = Focus::View;
        app.handle_action(KeyAction::NavigateDown);
        app.navigate(NavRequest::Navigate(PageId::Settings));
        app.handle_action(KeyAction::Select);
        assert!(app.status_message().contains("SMS alerts"));
    }
}
