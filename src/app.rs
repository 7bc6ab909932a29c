use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use tracing::{debug, info, warn};

use lazygrid::Theme;
use lazygrid::config::{self, AppConfig, GlobalAction, KeyResolver};
use lazygrid::theme::{next_theme, theme_from_name};
use lazygrid::ui::{Component, Handled, HelpEvent, HelpOverlay, Result, Screen};

use crate::dashboard;
use crate::tui::{Event, Tui};

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 8.0;

pub struct App {
    screens: Vec<Box<dyn Screen>>,
    active: usize,
    help: Option<HelpOverlay>,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    theme_name: String,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(config: &AppConfig, resolver: Arc<KeyResolver>, active: usize) -> Result<Self> {
        let screens = dashboard::screens(&config.grid, &resolver)?;
        let active = active.min(screens.len().saturating_sub(1));
        Ok(Self {
            screens,
            active,
            help: None,
            resolver,
            theme: theme_from_name(&config.theme.name),
            theme_name: config.theme.name.clone(),
            should_quit: false,
            should_suspend: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        while let Some(event) = tui.next_event().await {
            self.handle_event(&mut tui, event)?;
            if self.should_suspend {
                tui.suspend()?;
                self.should_suspend = false;
                tui.resume()?;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) -> Result<()> {
        match event {
            Event::Quit => self.should_quit = true,
            Event::Suspend => self.should_suspend = true,
            Event::Error(err) => warn!(%err, "Terminal event error"),
            Event::Tick => {
                for screen in &mut self.screens {
                    screen.update()?;
                }
                if let Some(screen) = self.screens.get_mut(self.active) {
                    screen.on_tick();
                }
            }
            Event::Render => {
                tui.draw(|frame| self.render(frame))?;
            }
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                tui.draw(|frame| self.render(frame))?;
            }
            Event::Key(key) => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(help) = &mut self.help {
            if let Handled::Event(HelpEvent::Close) = help.handle_key(key)? {
                self.help = None;
            }
            return Ok(());
        }

        if let Some(screen) = self.screens.get_mut(self.active) {
            if screen.handle_key(key)?.is_consumed() {
                return Ok(());
            }
        }

        let r = Arc::clone(&self.resolver);
        if r.matches_global(&key, GlobalAction::Quit) {
            self.should_quit = true;
        } else if r.matches_global(&key, GlobalAction::Help) {
            self.open_help();
        } else if r.matches_global(&key, GlobalAction::Theme) {
            let name = self.cycle_theme().to_string();
            if let Err(err) = config::save_theme(&name) {
                warn!(%err, "Failed to save theme");
            }
        } else if r.matches_global(&key, GlobalAction::NextTab) {
            self.select_tab(self.active + 1);
        } else if r.matches_global(&key, GlobalAction::PreviousTab) {
            self.select_tab(self.active + self.screens.len().saturating_sub(1));
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.help.is_some() {
            return Ok(());
        }
        if let Some(screen) = self.screens.get_mut(self.active) {
            screen.handle_mouse(mouse)?;
        }
        Ok(())
    }

    fn open_help(&mut self) {
        let screen = self
            .screens
            .get(self.active)
            .map(|screen| screen.keybindings())
            .unwrap_or_default();
        self.help = Some(HelpOverlay::new(&self.resolver, screen));
    }

    fn select_tab(&mut self, index: usize) {
        if self.screens.is_empty() {
            return;
        }
        self.active = index % self.screens.len();
        debug!(tab = self.active, "Tab selected");
    }

    /// Switch to the next built-in theme and return its name.
    fn cycle_theme(&mut self) -> &str {
        let next = next_theme(&self.theme_name);
        info!(theme = next.name, "Theme changed");
        self.theme = next.theme;
        self.theme_name = next.name.to_string();
        &self.theme_name
    }

    fn render(&mut self, frame: &mut Frame) {
        let theme = self.theme;
        let [tabs_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(theme.base())),
            frame.area(),
        );

        let titles: Vec<String> = self
            .screens
            .iter()
            .map(|screen| format!(" {} ", screen.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.active)
            .style(Style::default().fg(theme.subtext0()))
            .highlight_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider(Span::styled("│", Style::default().fg(theme.overlay0())));
        frame.render_widget(tabs, tabs_area);

        if let Some(screen) = self.screens.get_mut(self.active) {
            screen.render(frame, body_area, &theme);
        }

        self.render_status(frame, status_area, &theme);

        if let Some(help) = &mut self.help {
            help.render(frame, frame.area(), &theme);
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.peach());
        let text_style = Style::default().fg(theme.subtext0());
        let hint = |action: GlobalAction, label: &'static str| {
            [
                Span::styled(self.resolver.display_global(action), key_style),
                Span::styled(format!(" {label}  "), text_style),
            ]
        };

        let mut spans: Vec<Span> = Vec::new();
        spans.extend(hint(GlobalAction::Help, "help"));
        spans.extend(hint(GlobalAction::Theme, "theme"));
        spans.extend(hint(GlobalAction::Quit, "quit"));
        spans.push(Span::styled(
            self.theme_name.clone(),
            Style::default().fg(theme.overlay1()),
        ));
        if let Some(status) = self.screens.get(self.active).and_then(|s| s.status()) {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.overlay0())));
            spans.push(Span::styled(status.to_string(), Style::default().fg(theme.text())));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn app(active: usize) -> App {
        App::new(&AppConfig::default(), Arc::new(KeyResolver::default()), active).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[tokio::test]
    async fn test_tabs_wrap_both_ways() {
        let mut app = app(0);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active, 3);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, 0);
    }

    #[tokio::test]
    async fn test_initial_tab_is_clamped() {
        assert_eq!(app(9).active, 3);
    }

    #[tokio::test]
    async fn test_help_captures_keys_until_closed() {
        let mut app = app(0);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help.is_some());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, 0);
        press(&mut app, KeyCode::Esc);
        assert!(app.help.is_none());
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_cycle_theme_updates_palette() {
        let mut app = app(0);
        assert_eq!(app.cycle_theme(), "Catppuccin Macchiato");
        assert_eq!(app.theme, Theme::catppuccin_macchiato());
    }

    #[tokio::test]
    async fn test_first_frame_shows_tabs_and_loading() {
        let mut app = app(1);
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Users"));
        assert!(screen.contains("Orders"));
        assert!(screen.contains("Loading..."));
    }
}
