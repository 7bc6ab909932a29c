//! Headless data grid.
//!
//! This module holds everything the grid decides without touching the
//! terminal:
//! - [`Column`] / [`Value`] - how fields are pulled out of caller rows
//! - [`sort`] - single-column stable sorting
//! - [`pagination`] - client, server and unpaginated modes
//! - [`state`] - the loading / error / empty / populated resolver
//! - [`Grid`] - the engine tying them together and producing a [`GridView`]

mod column;
pub mod config;
mod engine;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod sort;
pub mod state;
mod value;

pub use column::Column;
pub use config::{GridConfig, GridError, TableSize, TableStyle, Variant};
pub use engine::{DatasetKey, Grid, GridBody, GridView, PageInfo};
pub use filter::SearchMode;
pub use model::{BodyRow, HeaderCell};
pub use pagination::{PageRequest, PaginationMode};
pub use sort::{SortCycle, SortDirection, SortDirective};
pub use state::{RenderState, StatusRow};
pub use value::Value;
