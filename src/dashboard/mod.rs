//! The admin dashboard: one tab per record kind over mock data.

mod categories;
mod list;
mod orders;
mod products;
mod source;
mod users;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use lazygrid::config::KeyResolver;
use lazygrid::grid::{GridConfig, PaginationMode, SearchMode, TableSize, TableStyle, Variant};
use lazygrid::ui::{Result, Screen};

use list::ListScreen;
use source::MockSource;

/// Delay of a full dataset load.
const LOAD_DELAY: Duration = Duration::from_secs(2);
/// Delay of one server page.
const PAGE_DELAY: Duration = Duration::from_millis(600);
const ORDER_COUNT: usize = 42;

/// A row record the dashboard can list.
pub trait Record: Clone + Send + Sync + 'static {
    /// One-line description used in status messages and server-side search.
    fn summary(&self) -> String;
}

/// Build every tab, in display order, from the shared grid defaults.
pub fn screens(base: &GridConfig, resolver: &Arc<KeyResolver>) -> Result<Vec<Box<dyn Screen>>> {
    let users = ListScreen::new(
        "Users",
        "users",
        users::columns(),
        base.clone()
            .with_size(TableSize::Lg)
            .with_search_mode(SearchMode::Substring),
        MockSource::new(users::mock_users(), LOAD_DELAY),
        Arc::clone(resolver),
    )?;
    let products = ListScreen::new(
        "Products",
        "products",
        products::columns(),
        base.clone()
            .with_style(TableStyle::Striped)
            .with_search_mode(SearchMode::Substring),
        MockSource::new(products::mock_products(), LOAD_DELAY),
        Arc::clone(resolver),
    )?;
    let categories = ListScreen::new(
        "Categories",
        "categories",
        categories::columns(),
        base.clone()
            .with_style(TableStyle::Bordered)
            .with_variant(Variant::Primary)
            .with_search_mode(SearchMode::Substring),
        MockSource::new(categories::mock_categories(), LOAD_DELAY),
        Arc::clone(resolver),
    )?;
    let orders = ListScreen::new(
        "Orders",
        "orders",
        orders::columns(),
        base.clone()
            .with_mode(PaginationMode::Server)
            .with_style(TableStyle::Hover)
            .with_no_records_text("No orders match."),
        MockSource::new(orders::mock_orders(ORDER_COUNT), PAGE_DELAY),
        Arc::clone(resolver),
    )?;
    Ok(vec![
        Box::new(users),
        Box::new(products),
        Box::new(categories),
        Box::new(orders),
    ])
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn rupees(amount: i64) -> String {
    format!("₹{amount}")
}
