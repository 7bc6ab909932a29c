//! Page index / page size bookkeeping for the three pagination modes.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Where slicing happens, chosen once per grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationMode {
    /// No controls; every row is rendered.
    None,
    /// The grid slices its own rows.
    #[default]
    Client,
    /// The caller slices; the grid only asks for pages.
    Server,
}

/// Page the grid wants the caller to supply in server mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    mode: PaginationMode,
    page_index: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    server_page_count: usize,
}

impl Pagination {
    /// `page_size` must be one of `page_size_options`, both validated by the
    /// grid config.
    pub const fn new(mode: PaginationMode, page_size: usize, page_size_options: Vec<usize>) -> Self {
        Self {
            mode,
            page_index: 0,
            page_size,
            page_size_options,
            server_page_count: 1,
        }
    }

    pub const fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self.mode, PaginationMode::None)
    }

    pub const fn request(&self) -> PageRequest {
        PageRequest {
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }

    /// Record the caller-owned page count (server mode only).
    pub const fn set_server_page_count(&mut self, page_count: usize) {
        self.server_page_count = page_count;
    }

    /// Number of pages for `total` rows, never less than one.
    pub const fn page_count(&self, total: usize) -> usize {
        let count = match self.mode {
            PaginationMode::None => 1,
            PaginationMode::Client => total.div_ceil(self.page_size),
            PaginationMode::Server => self.server_page_count,
        };
        if count == 0 { 1 } else { count }
    }

    pub const fn can_previous(&self) -> bool {
        self.is_enabled() && self.page_index > 0
    }

    pub const fn can_next(&self, total: usize) -> bool {
        self.is_enabled() && self.page_index + 1 < self.page_count(total)
    }

    /// Each movement returns whether the page index actually changed.
    pub const fn next(&mut self, total: usize) -> bool {
        if !self.can_next(total) {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub const fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    pub const fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub const fn last(&mut self, total: usize) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.go_to(self.page_count(total) - 1)
    }

    const fn go_to(&mut self, page_index: usize) -> bool {
        if !self.is_enabled() || self.page_index == page_index {
            return false;
        }
        self.page_index = page_index;
        true
    }

    /// Change the page size; any change sends the index back to page 0.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 || page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        self.page_index = 0;
        true
    }

    /// Step to the next (or previous) entry of `page_size_options`.
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        if !self.is_enabled() || self.page_size_options.is_empty() {
            return false;
        }
        let len = self.page_size_options.len();
        let current = self
            .page_size_options
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_page_size(self.page_size_options[next])
    }

    /// Pull the index back inside `[0, page_count - 1]` in client mode.
    pub const fn clamp(&mut self, total: usize) -> bool {
        if !matches!(self.mode, PaginationMode::Client) {
            return false;
        }
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
            return true;
        }
        false
    }

    /// Back to the first page, keeping the page size.
    pub const fn reset(&mut self) -> bool {
        let changed = self.page_index != 0;
        self.page_index = 0;
        changed
    }

    /// Positions of the sorted view shown on the current page.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        match self.mode {
            PaginationMode::Client => {
                let start = (self.page_index * self.page_size).min(total);
                let end = (start + self.page_size).min(total);
                start..end
            }
            PaginationMode::None | PaginationMode::Server => 0..total,
        }
    }
}
