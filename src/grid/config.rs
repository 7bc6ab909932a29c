use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::filter::SearchMode;
use crate::grid::{PaginationMode, SortCycle};

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_NO_RECORDS_TEXT: &str = "No records found.";
pub const DEFAULT_ERROR_TEXT: &str = "Something went wrong. Please try again.";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("page size options must not be empty")]
    EmptyPageSizeOptions,
    #[error("page sizes must be greater than zero")]
    ZeroPageSize,
    #[error("column id `{0}` is used more than once")]
    DuplicateColumnId(String),
}

/// Accent colour of the grid border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableStyle {
    #[default]
    Default,
    Striped,
    Bordered,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Every option of a grid, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub mode: PaginationMode,
    pub page_size_options: Vec<usize>,
    pub initial_page_size: usize,
    pub no_records_text: String,
    pub error_text: String,
    pub loading_text: String,
    pub sort_cycle: SortCycle,
    pub search_mode: SearchMode,
    pub variant: Variant,
    pub style: TableStyle,
    pub size: TableSize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            mode: PaginationMode::default(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            no_records_text: DEFAULT_NO_RECORDS_TEXT.to_string(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            sort_cycle: SortCycle::default(),
            search_mode: SearchMode::default(),
            variant: Variant::default(),
            style: TableStyle::default(),
            size: TableSize::default(),
        }
    }
}

impl GridConfig {
    #[must_use]
    pub const fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_no_records_text(mut self, text: impl Into<String>) -> Self {
        self.no_records_text = text.into();
        self
    }

    #[must_use]
    pub const fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: TableSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_sort_cycle(mut self, sort_cycle: SortCycle) -> Self {
        self.sort_cycle = sort_cycle;
        self
    }

    #[must_use]
    pub const fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    /// Check the page sizes and normalise the options list.
    ///
    /// The options end up sorted and deduplicated, and always contain the
    /// initial page size.
    pub fn validate(mut self) -> Result<Self, GridError> {
        if self.page_size_options.is_empty() {
            return Err(GridError::EmptyPageSizeOptions);
        }
        if self.initial_page_size == 0 || self.page_size_options.contains(&0) {
            return Err(GridError::ZeroPageSize);
        }
        self.page_size_options.push(self.initial_page_size);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        Ok(self)
    }
}
