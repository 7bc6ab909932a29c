use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::grid::config::{GridConfig, GridError};
use crate::grid::filter::RowFilter;
use crate::grid::model::{self, BodyRow, HeaderCell};
use crate::grid::pagination::{PageRequest, Pagination, PaginationMode};
use crate::grid::sort::{self, SortDirective};
use crate::grid::state::{RenderState, StatusRow};
use crate::grid::Column;

/// Caller-chosen identity of a dataset.
///
/// Handing the grid rows under a new key resets its sort, search and page;
/// the same key keeps them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetKey(String);

impl From<&str> for DatasetKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DatasetKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pagination facts needed to draw the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub enabled: bool,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub total_rows: usize,
}

#[derive(Debug)]
pub enum GridBody<'a, T> {
    Rows(Vec<BodyRow<'a, T>>),
    Status(StatusRow),
}

/// Everything one render needs, resolved in a single pass.
#[derive(Debug)]
pub struct GridView<'a, T> {
    pub header: Vec<HeaderCell<'a>>,
    pub body: GridBody<'a, T>,
    pub page: PageInfo,
}

impl<T> GridView<'_, T> {
    pub const fn state(&self) -> RenderState {
        match &self.body {
            GridBody::Rows(_) => RenderState::Populated,
            GridBody::Status(status) => status.state,
        }
    }
}

/// Headless data grid: sort, search, pagination and render state over a
/// caller-supplied row sequence.
///
/// Transitions that move the page in server mode return the new
/// [`PageRequest`]; the caller answers with [`Grid::set_rows`] and
/// [`Grid::set_page_count`].
pub struct Grid<T> {
    config: GridConfig,
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    dataset: Option<DatasetKey>,
    /// Filtered and sorted positions into `rows`.
    order: Vec<usize>,
    sort: Option<SortDirective>,
    query: String,
    filter: RowFilter,
    pagination: Pagination,
    loading: bool,
    error: bool,
}

impl<T> Grid<T> {
    pub fn new(columns: Vec<Column<T>>, config: GridConfig) -> Result<Self, GridError> {
        let config = config.validate()?;
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id()) {
                return Err(GridError::DuplicateColumnId(column.id().to_string()));
            }
        }
        let pagination = Pagination::new(
            config.mode,
            config.initial_page_size,
            config.page_size_options.clone(),
        );
        let filter = RowFilter::new(config.search_mode);
        Ok(Self {
            config,
            columns,
            rows: Vec::new(),
            dataset: None,
            order: Vec::new(),
            sort: None,
            query: String::new(),
            filter,
            pagination,
            loading: false,
            error: false,
        })
    }

    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub const fn mode(&self) -> PaginationMode {
        self.pagination.mode()
    }

    pub const fn dataset(&self) -> Option<&DatasetKey> {
        self.dataset.as_ref()
    }

    pub const fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_error(&self) -> bool {
        self.error
    }

    pub const fn page_request(&self) -> PageRequest {
        self.pagination.request()
    }

    /// Replace the rows.
    ///
    /// A new dataset key resets sort, search and page index; the same key
    /// keeps them and clamps the page index to the new row count.
    pub fn set_rows(&mut self, key: impl Into<DatasetKey>, rows: Vec<T>) -> Option<PageRequest> {
        let key = key.into();
        let before = self.pagination.request();
        if self.dataset.as_ref() != Some(&key) {
            debug!(dataset = %key, rows = rows.len(), "Dataset changed, resetting grid state");
            self.sort = None;
            self.query.clear();
            self.pagination.reset();
            self.dataset = Some(key);
        }
        self.rows = rows;
        self.recompute();
        self.page_changed(before)
    }

    pub const fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub const fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Caller-owned page count for server mode.
    pub const fn set_page_count(&mut self, page_count: usize) {
        self.pagination.set_server_page_count(page_count);
    }

    /// Activate a column header, advancing the sort cycle.
    ///
    /// Unknown and unsortable columns are ignored.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.id() == column_id && column.is_sortable());
        if !sortable {
            return;
        }
        let next = self.config.sort_cycle.next(self.sort.as_ref(), column_id);
        self.set_sort(next);
    }

    pub fn set_sort(&mut self, directive: Option<SortDirective>) {
        debug!(?directive, "Sort changed");
        self.sort = directive;
        self.recompute();
        if self.mode() == PaginationMode::Client {
            self.pagination.reset();
        }
    }

    /// Update the search query.
    ///
    /// Only client and none modes filter locally; in server mode the query is
    /// stored for the caller and the rows are left alone.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.recompute();
        if self.mode() == PaginationMode::Client {
            self.pagination.reset();
        }
        true
    }

    pub fn next_page(&mut self) -> Option<PageRequest> {
        let before = self.pagination.request();
        self.pagination.next(self.total_rows());
        self.page_changed(before)
    }

    pub fn previous_page(&mut self) -> Option<PageRequest> {
        let before = self.pagination.request();
        self.pagination.previous();
        self.page_changed(before)
    }

    pub fn first_page(&mut self) -> Option<PageRequest> {
        let before = self.pagination.request();
        self.pagination.first();
        self.page_changed(before)
    }

    pub fn last_page(&mut self) -> Option<PageRequest> {
        let before = self.pagination.request();
        self.pagination.last(self.total_rows());
        self.page_changed(before)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Option<PageRequest> {
        let before = self.pagination.request();
        self.pagination.set_page_size(page_size);
        self.pagination.clamp(self.total_rows());
        self.page_changed(before)
    }

    pub fn cycle_page_size(&mut self, forward: bool) -> Option<PageRequest> {
        let before = self.pagination.request();
        self.pagination.cycle_page_size(forward);
        self.page_changed(before)
    }

    /// Rows the body shows, counted after search in client and none modes.
    pub fn total_rows(&self) -> usize {
        self.order.len()
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::resolve(self.loading, self.error, self.total_rows())
    }

    pub fn page_info(&self) -> PageInfo {
        let total = self.total_rows();
        PageInfo {
            enabled: self.pagination.is_enabled(),
            page_index: self.pagination.page_index(),
            page_count: self.pagination.page_count(total),
            page_size: self.pagination.page_size(),
            can_previous: self.pagination.can_previous(),
            can_next: self.pagination.can_next(total),
            total_rows: total,
        }
    }

    /// Records on the current page, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &T> {
        self.order[self.pagination.visible_range(self.total_rows())]
            .iter()
            .map(|&index| &self.rows[index])
    }

    /// Record at `position` on the current page.
    pub fn row_on_page(&self, position: usize) -> Option<&T> {
        self.visible_rows().nth(position)
    }

    pub fn visible_len(&self) -> usize {
        self.pagination.visible_range(self.total_rows()).len()
    }

    pub fn view(&self) -> GridView<'_, T> {
        let header = model::header_row(&self.columns, self.sort.as_ref());
        let state = self.render_state();
        let body = match state {
            RenderState::Populated => {
                let range = self.pagination.visible_range(self.total_rows());
                GridBody::Rows(model::body_rows(
                    &self.rows,
                    &self.columns,
                    self.order[range].iter().copied(),
                ))
            }
            _ => GridBody::Status(StatusRow {
                state,
                text: self.status_text(state).to_string(),
                col_span: self.columns.len(),
            }),
        };
        GridView {
            header,
            body,
            page: self.page_info(),
        }
    }

    fn status_text(&self, state: RenderState) -> &str {
        match state {
            RenderState::Loading => &self.config.loading_text,
            RenderState::Error => &self.config.error_text,
            RenderState::Empty => &self.config.no_records_text,
            RenderState::Populated => "",
        }
    }

    fn recompute(&mut self) {
        self.order = if self.mode() == PaginationMode::Server {
            (0..self.rows.len()).collect()
        } else {
            self.filter.apply(&self.rows, &self.columns, &self.query)
        };
        if let Some(directive) = &self.sort {
            if let Some(column) = self.columns.iter().find(|c| c.id() == directive.column) {
                sort::sort_indices(&self.rows, &mut self.order, column, directive.direction);
            }
        }
        self.pagination.clamp(self.order.len());
    }

    fn page_changed(&self, before: PageRequest) -> Option<PageRequest> {
        let after = self.pagination.request();
        if after == before {
            return None;
        }
        debug!(page_index = after.page_index, page_size = after.page_size, "Page changed");
        (self.mode() == PaginationMode::Server).then_some(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{SortCycle, SortDirection, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Product {
        id: i64,
        name: String,
        price: Option<i64>,
    }

    fn product(id: i64, name: &str, price: Option<i64>) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
        }
    }

    fn columns() -> Vec<Column<Product>> {
        vec![
            Column::new("id", "ID", |p: &Product| p.id.into()),
            Column::new("name", "Name", |p: &Product| p.name.clone().into()),
            Column::new("price", "Price", |p: &Product| p.price.into()),
        ]
    }

    fn numbered(count: i64) -> Vec<Product> {
        (1..=count)
            .map(|id| product(id, &format!("item-{id}"), Some(id * 10)))
            .collect()
    }

    fn grid(config: GridConfig) -> Grid<Product> {
        Grid::new(columns(), config).unwrap()
    }

    fn ids(grid: &Grid<Product>) -> Vec<i64> {
        grid.visible_rows().map(|p| p.id).collect()
    }

    #[test]
    fn test_rejects_duplicate_column_ids() {
        let mut columns = columns();
        columns.push(Column::new("id", "Again", |p: &Product| p.id.into()));
        assert!(matches!(
            Grid::new(columns, GridConfig::default()),
            Err(GridError::DuplicateColumnId(id)) if id == "id"
        ));
    }

    #[test]
    fn test_populated_view_shape() {
        let mut grid = grid(GridConfig::default().with_mode(PaginationMode::None));
        grid.set_rows("products", numbered(7));
        let view = grid.view();
        assert_eq!(view.header.len(), 3);
        match view.body {
            GridBody::Rows(rows) => {
                assert_eq!(rows.len(), 7);
                assert!(rows.iter().all(|row| row.values.len() == 3));
            }
            GridBody::Status(_) => panic!("expected rows"),
        }
    }

    #[test]
    fn test_twenty_five_rows_third_page() {
        let mut grid = grid(GridConfig::default());
        grid.set_rows("products", numbered(25));
        assert_eq!(grid.page_info().page_count, 3);
        assert_eq!(grid.next_page(), None);
        grid.next_page();
        assert_eq!(ids(&grid), vec![21, 22, 23, 24, 25]);
        let info = grid.page_info();
        assert_eq!(info.page_index, 2);
        assert!(!info.can_next);
        assert!(info.can_previous);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut grid = grid(GridConfig::default());
        grid.set_rows("products", numbered(60));
        grid.last_page();
        assert_eq!(grid.page_info().page_index, 5);
        grid.set_page_size(20);
        assert_eq!(grid.page_info().page_index, 0);
        grid.next_page();
        grid.cycle_page_size(true);
        assert_eq!(grid.page_info().page_size, 50);
        assert_eq!(grid.page_info().page_index, 0);
    }

    #[test]
    fn test_shrinking_same_dataset_clamps_page() {
        let mut grid = grid(GridConfig::default());
        grid.set_rows("products", numbered(45));
        grid.last_page();
        assert_eq!(grid.page_info().page_index, 4);
        grid.set_rows("products", numbered(12));
        assert_eq!(grid.page_info().page_index, 1);
        assert_eq!(ids(&grid), vec![11, 12]);
        grid.set_rows("products", Vec::new());
        assert_eq!(grid.page_info().page_index, 0);
        assert_eq!(grid.render_state(), RenderState::Empty);
    }

    #[test]
    fn test_new_dataset_resets_transient_state() {
        let mut grid = grid(GridConfig::default());
        grid.set_rows("products", numbered(30));
        grid.toggle_sort("price");
        grid.set_page_size(5);
        grid.next_page();
        grid.set_rows("archived", numbered(30));
        assert_eq!(grid.sort(), None);
        assert_eq!(grid.page_info().page_index, 0);
        assert_eq!(grid.page_info().page_size, 5);
        assert_eq!(grid.dataset(), Some(&DatasetKey::from("archived")));
    }

    #[test]
    fn test_sort_cycle_and_reverse() {
        let mut grid = grid(GridConfig::default().with_mode(PaginationMode::None));
        let rows = vec![
            product(1, "delta", Some(40)),
            product(2, "alpha", Some(10)),
            product(3, "charlie", Some(30)),
            product(4, "bravo", Some(20)),
        ];
        grid.set_rows("products", rows);

        grid.toggle_sort("name");
        let ascending = ids(&grid);
        assert_eq!(ascending, vec![2, 4, 3, 1]);

        grid.toggle_sort("name");
        let mut descending = ids(&grid);
        descending.reverse();
        assert_eq!(descending, ascending);

        grid.toggle_sort("name");
        assert_eq!(grid.sort(), None);
        assert_eq!(ids(&grid), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_toggle_cycle_and_stability() {
        let config = GridConfig::default()
            .with_mode(PaginationMode::None)
            .with_sort_cycle(SortCycle::Toggle);
        let mut grid = grid(config);
        grid.set_rows(
            "products",
            vec![
                product(1, "a", Some(5)),
                product(2, "b", None),
                product(3, "c", Some(5)),
                product(4, "d", Some(1)),
            ],
        );
        grid.toggle_sort("price");
        assert_eq!(ids(&grid), vec![4, 1, 3, 2]);
        grid.toggle_sort("price");
        assert_eq!(ids(&grid), vec![1, 3, 4, 2]);
        grid.toggle_sort("price");
        assert_eq!(
            grid.sort(),
            Some(&SortDirective::new("price", SortDirection::Ascending))
        );
        assert_eq!(ids(&grid), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_unsortable_column_is_ignored() {
        let mut columns = columns();
        columns.push(Column::placeholder("actions", |_: &Product| Value::Null).unsortable());
        let mut grid = Grid::new(columns, GridConfig::default()).unwrap();
        grid.set_rows("products", numbered(3));
        grid.toggle_sort("actions");
        grid.toggle_sort("missing");
        assert_eq!(grid.sort(), None);
    }

    #[test]
    fn test_render_state_priority() {
        let mut grid = grid(GridConfig::default());
        grid.set_rows("products", Vec::new());
        grid.set_loading(true);
        grid.set_error(true);
        assert_eq!(grid.view().state(), RenderState::Loading);
        grid.set_loading(false);
        assert_eq!(grid.view().state(), RenderState::Error);
        grid.set_error(false);
        let view = grid.view();
        match view.body {
            GridBody::Status(status) => {
                assert_eq!(status.state, RenderState::Empty);
                assert_eq!(status.text, "No records found.");
                assert_eq!(status.col_span, 3);
            }
            GridBody::Rows(_) => panic!("expected a status row"),
        }
    }

    #[test]
    fn test_custom_no_records_text() {
        let mut grid = grid(GridConfig::default().with_no_records_text("Nothing to show"));
        grid.set_rows("products", Vec::new());
        match grid.view().body {
            GridBody::Status(status) => assert_eq!(status.text, "Nothing to show"),
            GridBody::Rows(_) => panic!("expected a status row"),
        }
    }

    #[test]
    fn test_search_filters_and_clamps() {
        let mut grid = grid(GridConfig::default().with_page_size(5));
        let mut rows = numbered(12);
        rows.push(product(13, "Office Chair", Some(4999)));
        grid.set_rows("products", rows);
        grid.last_page();
        assert_eq!(grid.page_info().page_index, 2);
        assert!(grid.set_query("chair"));
        assert_eq!(grid.page_info().page_index, 0);
        assert_eq!(ids(&grid), vec![13]);
        assert!(grid.set_query("zzz"));
        assert_eq!(grid.render_state(), RenderState::Empty);
        assert!(!grid.set_query("zzz"));
    }

    #[test]
    fn test_server_mode_emits_requests_and_trusts_page_count() {
        let mut grid = grid(GridConfig::default().with_mode(PaginationMode::Server));
        grid.set_rows("orders", numbered(10));
        grid.set_page_count(5);
        assert_eq!(
            grid.next_page(),
            Some(PageRequest {
                page_index: 1,
                page_size: 10
            })
        );
        assert_eq!(
            grid.last_page(),
            Some(PageRequest {
                page_index: 4,
                page_size: 10
            })
        );
        grid.set_rows("orders", numbered(2));
        let info = grid.page_info();
        assert_eq!(info.page_index, 4);
        assert!(!info.can_next);
        assert_eq!(grid.next_page(), None);
        assert_eq!(
            grid.set_page_size(20),
            Some(PageRequest {
                page_index: 0,
                page_size: 20
            })
        );
    }

    #[test]
    fn test_server_mode_does_not_slice_or_filter() {
        let mut grid = grid(GridConfig::default().with_mode(PaginationMode::Server));
        grid.set_rows("orders", numbered(15));
        grid.set_page_count(3);
        assert_eq!(grid.visible_len(), 15);
        grid.set_query("item-1");
        assert_eq!(grid.visible_len(), 15);
        assert_eq!(grid.query(), "item-1");
    }

    #[test]
    fn test_row_on_page_returns_record() {
        let mut grid = grid(GridConfig::default().with_page_size(5));
        grid.set_rows("products", numbered(12));
        grid.next_page();
        assert_eq!(grid.row_on_page(0).map(|p| p.id), Some(6));
        assert_eq!(grid.row_on_page(5), None);
    }
}
