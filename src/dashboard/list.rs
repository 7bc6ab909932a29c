use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use lazygrid::Theme;
use lazygrid::config::{GridAction, KeyResolver};
use lazygrid::grid::{Column, Grid, GridConfig, PageRequest, PaginationMode};
use lazygrid::ui::{Component, DataGrid, GridEvent, Handled, Keybinding, Result, Screen};

use super::Record;
use super::source::{MockSource, Response};

/// A dashboard tab listing one kind of record in a [`DataGrid`].
///
/// Client and unpaginated grids load the whole record set once; server grids
/// fetch one page per [`PageRequest`] and search query, dropping answers to
/// superseded requests.
pub struct ListScreen<T: Record> {
    title: String,
    dataset: &'static str,
    grid: DataGrid<T>,
    source: MockSource<T>,
    resolver: Arc<KeyResolver>,
    status: Option<String>,
}

impl<T: Record> ListScreen<T> {
    pub fn new(
        title: impl Into<String>,
        dataset: &'static str,
        columns: Vec<Column<T>>,
        config: GridConfig,
        source: MockSource<T>,
        resolver: Arc<KeyResolver>,
    ) -> Result<Self> {
        let title = title.into();
        let grid = DataGrid::new(Grid::new(columns, config)?, Arc::clone(&resolver))
            .with_title(title.clone());
        let mut screen = Self {
            title,
            dataset,
            grid,
            source,
            resolver,
            status: None,
        };
        screen.load();
        Ok(screen)
    }

    fn is_server(&self) -> bool {
        self.grid.grid().mode() == PaginationMode::Server
    }

    fn load(&mut self) {
        if self.is_server() {
            let request = self.grid.grid().page_request();
            self.fetch_page(request);
        } else {
            self.grid.set_loading(true);
            self.source.fetch_all();
        }
    }

    fn fetch_page(&mut self, request: PageRequest) {
        self.grid.set_loading(true);
        let query = self.grid.grid().query().to_string();
        self.source.fetch_page(request, &query);
    }

    fn on_grid_event(&mut self, event: GridEvent<T>) {
        match event {
            GridEvent::RowActivated(record) => {
                info!(screen = %self.title, record = %record.summary(), "Row activated");
                self.status = Some(format!("Opened {}", record.summary()));
            }
            GridEvent::PageRequested(request) => self.fetch_page(request),
            GridEvent::SearchChanged(_) if self.is_server() => {
                let request = self
                    .grid
                    .first_page()
                    .unwrap_or_else(|| self.grid.grid().page_request());
                self.fetch_page(request);
            }
            GridEvent::SearchChanged(_) => {}
        }
    }

    fn apply(&mut self, response: Response<T>) {
        if let Some(request) = response.request {
            let current = self.grid.grid().page_request();
            let query = self.grid.grid().query();
            if request != current || response.query != query {
                debug!(
                    ?request,
                    ?current,
                    stale_query = %response.query,
                    %query,
                    "Discarding stale page"
                );
                return;
            }
        }
        self.grid.set_loading(false);
        match response.result {
            Ok(page) => {
                self.grid.set_error(false);
                if self.is_server() {
                    self.grid.set_page_count(page.page_count);
                }
                if let Some(request) = self.grid.set_rows(self.dataset, page.rows) {
                    self.fetch_page(request);
                }
            }
            Err(err) => {
                warn!(screen = %self.title, %err, "Failed to load records");
                self.grid.set_error(true);
                self.status = Some(format!("Failed to load {}: {err}", self.title));
            }
        }
    }
}

impl<T: Record> Screen for ListScreen<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<()>> {
        match self.grid.handle_key(key)? {
            Handled::Event(event) => {
                self.on_grid_event(event);
                return Ok(Handled::Consumed);
            }
            Handled::Consumed => return Ok(Handled::Consumed),
            Handled::Ignored => {}
        }

        if self.resolver.matches_grid(&key, GridAction::Reload) {
            self.status = Some(format!("Reloading {}", self.title));
            self.load();
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_grid(&key, GridAction::FailNext) {
            self.source.fail_next();
            self.status = Some("Next load will fail".to_string());
            self.load();
            return Ok(Handled::Consumed);
        }
        Ok(Handled::Ignored)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<()>> {
        Ok(match self.grid.handle_mouse(mouse)? {
            Handled::Event(event) => {
                self.on_grid_event(event);
                Handled::Consumed
            }
            other => other.map(|_| ()),
        })
    }

    fn on_tick(&mut self) {
        self.grid.on_tick();
    }

    fn update(&mut self) -> Result<()> {
        while let Some(response) = self.source.try_recv() {
            self.apply(response);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.grid.render(frame, area, theme);
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::new(self.resolver.display_grid(GridAction::Reload), "Reload"),
            Keybinding::new(self.resolver.display_grid(GridAction::FailNext), "Fail next load"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyModifiers};
    use lazygrid::config::KeybindingsConfig;
    use lazygrid::config::key::Key;
    use lazygrid::grid::{RenderState, Value};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Ticket(u32);

    impl Record for Ticket {
        fn summary(&self) -> String {
            format!("ticket #{}", self.0)
        }
    }

    fn screen(mode: PaginationMode, count: u32) -> ListScreen<Ticket> {
        screen_with(mode, count, KeyResolver::default())
    }

    fn screen_with(mode: PaginationMode, count: u32, resolver: KeyResolver) -> ListScreen<Ticket> {
        let columns = vec![Column::new("id", "ID", |t: &Ticket| Value::from(t.0))];
        let source = MockSource::new((1..=count).map(Ticket).collect(), Duration::ZERO);
        ListScreen::new(
            "Tickets",
            "tickets",
            columns,
            GridConfig::default().with_mode(mode),
            source,
            Arc::new(resolver),
        )
        .unwrap()
    }

    fn press(screen: &mut ListScreen<Ticket>, code: KeyCode) {
        screen
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    async fn settle(screen: &mut ListScreen<Ticket>) {
        tokio::time::sleep(Duration::from_millis(20)).await;
        screen.update().unwrap();
    }

    fn ids(screen: &ListScreen<Ticket>) -> Vec<u32> {
        screen.grid.grid().visible_rows().map(|t| t.0).collect()
    }

    #[tokio::test]
    async fn test_client_screen_loads_everything() {
        let mut screen = screen(PaginationMode::Client, 12);
        assert_eq!(screen.grid.grid().render_state(), RenderState::Loading);
        settle(&mut screen).await;
        assert_eq!(screen.grid.grid().total_rows(), 12);
        assert_eq!(ids(&screen), (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_server_screen_discards_stale_pages() {
        let mut screen = screen(PaginationMode::Server, 35);
        settle(&mut screen).await;
        assert_eq!(screen.grid.grid().page_info().page_count, 4);

        press(&mut screen, KeyCode::Char('n'));
        press(&mut screen, KeyCode::Char('n'));
        settle(&mut screen).await;
        assert_eq!(screen.grid.grid().page_info().page_index, 2);
        assert_eq!(ids(&screen), (21..=30).collect::<Vec<_>>());
        assert!(!screen.grid.grid().is_loading());
    }

    #[tokio::test]
    async fn test_server_screen_ignores_pages_for_replaced_query() {
        let mut screen = screen(PaginationMode::Server, 35);
        settle(&mut screen).await;

        // Same page request, different query: the unfiltered answer is stale.
        press(&mut screen, KeyCode::Char('r'));
        press(&mut screen, KeyCode::Char('/'));
        press(&mut screen, KeyCode::Char('7'));
        assert_eq!(screen.grid.grid().query(), "7");
        tokio::time::sleep(Duration::from_millis(20)).await;

        let mut responses: Vec<_> = std::iter::from_fn(|| screen.source.try_recv()).collect();
        assert_eq!(responses.len(), 2);
        responses.sort_by_key(|response| !response.query.is_empty());
        let mut responses = responses.into_iter();

        screen.apply(responses.next().unwrap());
        assert!(screen.grid.grid().is_loading());
        assert_eq!(ids(&screen), (1..=10).collect::<Vec<_>>());

        screen.apply(responses.next().unwrap());
        assert!(!screen.grid.grid().is_loading());
        assert_eq!(ids(&screen), vec![7, 17, 27]);
        assert_eq!(screen.grid.grid().page_info().page_count, 1);
    }

    #[tokio::test]
    async fn test_failed_load_shows_error_then_recovers() {
        let mut screen = screen(PaginationMode::Client, 3);
        settle(&mut screen).await;
        press(&mut screen, KeyCode::Char('x'));
        settle(&mut screen).await;
        assert_eq!(screen.grid.grid().render_state(), RenderState::Error);
        assert!(screen.status().unwrap().starts_with("Failed to load Tickets"));

        press(&mut screen, KeyCode::Char('r'));
        settle(&mut screen).await;
        assert_eq!(screen.grid.grid().render_state(), RenderState::Populated);
    }

    #[tokio::test]
    async fn test_fail_next_follows_configured_key() {
        let mut config = KeybindingsConfig::default();
        config.grid.fail_next = Key::new(KeyCode::Char('e')).into();
        let mut screen = screen_with(
            PaginationMode::Client,
            3,
            KeyResolver::new(Arc::new(config)),
        );
        settle(&mut screen).await;

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(screen.handle_key(x).unwrap(), Handled::Ignored);
        press(&mut screen, KeyCode::Char('e'));
        settle(&mut screen).await;
        assert_eq!(screen.grid.grid().render_state(), RenderState::Error);
        assert!(
            screen
                .keybindings()
                .iter()
                .any(|binding| binding.key == "e" && binding.description == "Fail next load")
        );
    }

    #[tokio::test]
    async fn test_activation_reports_record() {
        let mut screen = screen(PaginationMode::None, 3);
        settle(&mut screen).await;
        press(&mut screen, KeyCode::Char('j'));
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.status(), Some("Opened ticket #2"));
    }
}
