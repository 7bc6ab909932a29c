use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use tracing::debug;

use crate::Theme;
use crate::config::{GridAction, KeyResolver, NavAction, SearchAction};
use crate::grid::{
    DatasetKey, Grid, GridBody, GridView, HeaderCell, PageInfo, PageRequest, RenderState,
    StatusRow,
};
use crate::ui::grid_style;
use crate::ui::{Component, Handled, Result, Spinner};

/// Event emitted by [`DataGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent<T> {
    /// A body row was opened (Enter or click); carries the record itself.
    RowActivated(T),
    /// Server mode: the caller should supply this page.
    PageRequested(PageRequest),
    /// The search query changed.
    SearchChanged(String),
}

/// Interactive terminal rendition of a [`Grid`].
///
/// Keys move the row selection, focus a column for sorting, page through the
/// data and drive the search bar. Loading, error and empty states replace the
/// body with a single line spanning every column.
pub struct DataGrid<T: Clone> {
    grid: Grid<T>,
    state: TableState,
    focused_column: usize,
    searching: bool,
    spinner: Spinner,
    title: Option<String>,
    resolver: Arc<KeyResolver>,
    /// Body area of the last render, used to map clicks to rows.
    body_area: Rect,
}

impl<T: Clone> DataGrid<T> {
    pub fn new(grid: Grid<T>, resolver: Arc<KeyResolver>) -> Self {
        let spinner = Spinner::new(grid.config().loading_text.clone());
        Self {
            grid,
            state: TableState::default(),
            focused_column: 0,
            searching: false,
            spinner,
            title: None,
            resolver,
            body_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub const fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub const fn is_searching(&self) -> bool {
        self.searching
    }

    pub const fn focused_column(&self) -> usize {
        self.focused_column
    }

    /// Hand the grid a fresh row sequence; see [`Grid::set_rows`].
    pub fn set_rows(&mut self, key: impl Into<DatasetKey>, rows: Vec<T>) -> Option<PageRequest> {
        let key = key.into();
        if self.grid.dataset() != Some(&key) {
            self.state.select(None);
            self.searching = false;
        }
        let request = self.grid.set_rows(key, rows);
        self.sync_selection();
        request
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.grid.set_loading(loading);
        self.sync_selection();
    }

    pub fn set_error(&mut self, error: bool) {
        self.grid.set_error(error);
        self.sync_selection();
    }

    pub const fn set_page_count(&mut self, page_count: usize) {
        self.grid.set_page_count(page_count);
    }

    /// Return to the first page, e.g. after a server-side search changed.
    pub fn first_page(&mut self) -> Option<PageRequest> {
        let request = self.grid.first_page();
        self.select_first();
        request
    }

    pub fn selected_row(&self) -> Option<&T> {
        if !self.grid.render_state().is_populated() {
            return None;
        }
        self.state
            .selected()
            .and_then(|position| self.grid.row_on_page(position))
    }

    /// Keep the selection on a real row of the current page.
    fn sync_selection(&mut self) {
        let len = if self.grid.render_state().is_populated() {
            self.grid.visible_len()
        } else {
            0
        };
        match (len, self.state.selected()) {
            (0, _) => self.state.select(None),
            (len, Some(i)) if i >= len => self.state.select(Some(len - 1)),
            (_, None) => self.state.select(Some(0)),
            _ => {}
        }
    }

    fn select_first(&mut self) {
        self.state.select(None);
        *self.state.offset_mut() = 0;
        self.sync_selection();
    }

    fn move_selection(&mut self, target: impl FnOnce(usize, usize) -> usize) {
        let len = self.grid.visible_len();
        if len == 0 || !self.grid.render_state().is_populated() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some(target(current, len).min(len - 1)));
    }

    fn activate(&self, position: usize) -> Handled<GridEvent<T>> {
        if !self.grid.render_state().is_populated() {
            return Handled::Consumed;
        }
        self.grid
            .row_on_page(position)
            .map_or(Handled::Consumed, |row| GridEvent::RowActivated(row.clone()).into())
    }

    fn page_moved(&mut self, request: Option<PageRequest>) -> Handled<GridEvent<T>> {
        self.select_first();
        request.map_or(Handled::Consumed, |request| {
            GridEvent::PageRequested(request).into()
        })
    }

    fn update_query(&mut self, query: String) -> Handled<GridEvent<T>> {
        if self.grid.set_query(&query) {
            self.select_first();
        }
        GridEvent::SearchChanged(query).into()
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Handled<GridEvent<T>> {
        if self.resolver.matches_search(&key, SearchAction::Exit) {
            self.searching = false;
            if self.grid.query().is_empty() {
                return Handled::Consumed;
            }
            return self.update_query(String::new());
        }
        if self.resolver.matches_nav(&key, NavAction::Select) {
            self.searching = false;
            return Handled::Consumed;
        }
        match key.code {
            KeyCode::Backspace => {
                let mut query = self.grid.query().to_string();
                query.pop();
                self.update_query(query)
            }
            KeyCode::Char(c) => {
                let mut query = self.grid.query().to_string();
                query.push(c);
                self.update_query(query)
            }
            _ => Handled::Consumed,
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> Handled<GridEvent<T>> {
        let r = Arc::clone(&self.resolver);

        if r.matches_nav(&key, NavAction::Down) {
            self.move_selection(|i, _| i + 1);
        } else if r.matches_nav(&key, NavAction::Up) {
            self.move_selection(|i, _| i.saturating_sub(1));
        } else if r.matches_nav(&key, NavAction::Home) {
            self.move_selection(|_, _| 0);
        } else if r.matches_nav(&key, NavAction::End) {
            self.move_selection(|_, len| len - 1);
        } else if r.matches_nav(&key, NavAction::Select) {
            return self
                .state
                .selected()
                .map_or(Handled::Ignored, |position| self.activate(position));
        } else if r.matches_grid(&key, GridAction::ColumnLeft) {
            self.focused_column = self.focused_column.saturating_sub(1);
        } else if r.matches_grid(&key, GridAction::ColumnRight) {
            let last = self.grid.columns().len().saturating_sub(1);
            self.focused_column = (self.focused_column + 1).min(last);
        } else if r.matches_grid(&key, GridAction::Sort) {
            let Some(column) = self.grid.columns().get(self.focused_column) else {
                return Handled::Ignored;
            };
            let id = column.id().to_string();
            self.grid.toggle_sort(&id);
            self.select_first();
        } else if r.matches_grid(&key, GridAction::NextPage) {
            let request = self.grid.next_page();
            return self.page_moved(request);
        } else if r.matches_grid(&key, GridAction::PreviousPage) {
            let request = self.grid.previous_page();
            return self.page_moved(request);
        } else if r.matches_grid(&key, GridAction::FirstPage) {
            let request = self.grid.first_page();
            return self.page_moved(request);
        } else if r.matches_grid(&key, GridAction::LastPage) {
            let request = self.grid.last_page();
            return self.page_moved(request);
        } else if r.matches_grid(&key, GridAction::PageSizeUp) {
            let request = self.grid.cycle_page_size(true);
            return self.page_moved(request);
        } else if r.matches_grid(&key, GridAction::PageSizeDown) {
            let request = self.grid.cycle_page_size(false);
            return self.page_moved(request);
        } else if r.matches_search(&key, SearchAction::Toggle) {
            self.searching = true;
        } else if r.matches_search(&key, SearchAction::Exit) && !self.grid.query().is_empty() {
            return self.update_query(String::new());
        } else {
            return Handled::Ignored;
        }
        Handled::Consumed
    }

    fn render_header(&self, header: &[HeaderCell<'_>], theme: &Theme) -> Row<'static> {
        let cells: Vec<Cell> = header
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let mut text = header.content.unwrap_or_default().to_string();
                if let Some(direction) = header.sort {
                    text = format!("{text} {}", direction.symbol());
                }
                let mut style = Style::default();
                if i == self.focused_column {
                    style = style.fg(theme.peach()).add_modifier(Modifier::UNDERLINED);
                }
                Cell::from(text).style(style)
            })
            .collect();
        Row::new(cells)
            .height(1)
            .style(grid_style::header_style(self.grid.config().style, theme))
    }

    fn render_status(&mut self, frame: &mut Frame, status: &StatusRow, theme: &Theme) {
        let area = Rect {
            height: self.body_area.height.min(1),
            ..self.body_area
        };
        let style = match status.state {
            RenderState::Error => Style::default()
                .fg(theme.error())
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(theme.subtext0())
                .add_modifier(Modifier::ITALIC),
        };
        if status.state == RenderState::Loading {
            self.spinner.render(frame, area, theme);
        } else {
            let line = Paragraph::new(status.text.clone())
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(line, area);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, page: &PageInfo, theme: &Theme) {
        let enabled = Style::default().fg(theme.text());
        let disabled = Style::default().fg(theme.overlay0());
        let muted = Style::default().fg(theme.subtext0());
        let separator = Span::styled("  │  ", muted);

        let line = Line::from(vec![
            Span::styled(
                "◀ Previous",
                if page.can_previous { enabled } else { disabled },
            ),
            separator.clone(),
            Span::styled(
                format!("Page {} of {}", page.page_index + 1, page.page_count),
                muted,
            ),
            separator.clone(),
            Span::styled("Next ▶", if page.can_next { enabled } else { disabled }),
            separator,
            Span::styled(format!("Show {}", page.page_size), enabled),
            Span::styled(format!(" ({} rows)", page.total_rows), muted),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let query = self.grid.query();
        let (text, style) = if self.searching {
            (format!("/{query}_"), Style::default().fg(theme.warning()))
        } else {
            (
                format!("/{query} ({} matches)", self.grid.total_rows()),
                Style::default().fg(theme.subtext0()),
            )
        };
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}

impl<T: Clone> Component for DataGrid<T> {
    type Output = GridEvent<T>;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(if self.searching {
            self.handle_search_key(key)
        } else {
            self.handle_grid_key(key)
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(Handled::Ignored);
        }
        let area = self.body_area;
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return Ok(Handled::Ignored);
        }
        if !self.grid.render_state().is_populated() {
            return Ok(Handled::Consumed);
        }
        let pitch = grid_style::row_height(self.grid.config().size);
        let position = self.state.offset() + usize::from((mouse.row - area.y) / pitch);
        if position >= self.grid.visible_len() {
            return Ok(Handled::Consumed);
        }
        debug!(position, "Row clicked");
        self.state.select(Some(position));
        Ok(self.activate(position))
    }

    fn on_tick(&mut self) {
        if self.grid.is_loading() {
            self.spinner.on_tick();
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let config = self.grid.config().clone();
        let GridView { header, body, page } = self.grid.view();
        let show_search = self.searching || !self.grid.query().is_empty();

        let [table_area, search_area, footer_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(u16::from(show_search)),
            Constraint::Length(u16::from(page.enabled)),
        ])
        .areas(area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(grid_style::border_type(config.style))
            .border_style(Style::default().fg(grid_style::border_color(config.variant, theme)));
        if let Some(title) = &self.title {
            block = block
                .title(format!(" {title} "))
                .title_style(Style::default().fg(theme.mauve()).add_modifier(Modifier::BOLD));
        }
        let inner = block.inner(table_area);
        let body_area = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let header_row = self.render_header(&header, theme);
        drop(header);
        let widths: Vec<Constraint> = self.grid.columns().iter().map(|c| c.constraint()).collect();
        let row_height = grid_style::row_height(config.size);

        let rows: Vec<Row> = match &body {
            GridBody::Rows(rows) => rows
                .iter()
                .enumerate()
                .map(|(position, row)| {
                    let cells: Vec<Cell> = self
                        .grid
                        .columns()
                        .iter()
                        .map(|column| column.render_cell(row.record, theme))
                        .collect();
                    Row::new(cells)
                        .height(row_height)
                        .style(grid_style::row_style(config.style, position, theme))
                })
                .collect(),
            GridBody::Status(_) => Vec::new(),
        };

        let table = Table::new(rows, widths)
            .header(header_row)
            .block(block)
            .column_spacing(grid_style::column_spacing(config.size))
            .row_highlight_style(grid_style::highlight_style(config.style, theme))
            .highlight_symbol("▶ ");

        let status = match body {
            GridBody::Status(status) => Some(status),
            GridBody::Rows(_) => None,
        };

        frame.render_stateful_widget(table, table_area, &mut self.state);
        self.body_area = body_area;

        if let Some(status) = status {
            self.render_status(frame, &status, theme);
        }
        if show_search {
            self.render_search(frame, search_area, theme);
        }
        if page.enabled {
            self.render_footer(frame, footer_area, &page, theme);
        }
    }
}
