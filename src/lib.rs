//! Typed, sortable, paginated data grid for ratatui.
//!
//! [`grid`] is the headless engine; [`ui::DataGrid`] binds it to the terminal.

pub mod config;
pub mod grid;
pub mod theme;
pub mod ui;

pub use theme::Theme;
