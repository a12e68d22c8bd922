//! Pagination Window
//!
//! Derives the visible slice of an ordered collection from a page index and
//! a page size. Out-of-range pages yield an empty slice instead of an error,
//! and page sizes are restricted to a fixed set.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Allowed rows-per-page values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Three,
    #[default]
    Five,
    Ten,
    TwentyFive,
}

/// A page size outside the allowed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size {0} is not one of 3, 5, 10, 25")]
pub struct InvalidPageSize(pub usize);

impl PageSize {
    /// Every allowed size, ascending
    pub const ALL: [PageSize; 4] = [
        PageSize::Three,
        PageSize::Five,
        PageSize::Ten,
        PageSize::TwentyFive,
    ];

    /// Number of rows per page
    pub fn get(self) -> usize {
        match self {
            PageSize::Three => 3,
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    /// Closest allowed size to `requested`
    ///
    /// Ties go to the smaller size; `0` falls back to the default.
    pub fn nearest(requested: usize) -> PageSize {
        if requested == 0 {
            return PageSize::default();
        }
        // ALL is ascending, so min_by_key keeps the smaller size on ties
        PageSize::ALL
            .into_iter()
            .min_by_key(|size| size.get().abs_diff(requested))
            .unwrap_or_default()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The visible window over an ordered collection
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// Rows on this page; empty when the page is out of range
    pub items: &'a [T],
    /// Zero-based page index
    pub page: usize,
    pub page_size: PageSize,
    /// Length of the whole collection
    pub total: usize,
}

impl<'a, T> Page<'a, T> {
    /// Number of pages needed to show `total` rows
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size.get())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page
            .saturating_add(1)
            .saturating_mul(self.page_size.get())
            < self.total
    }

    /// Footer text, e.g. `"6–10 of 13"`
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0–0 of {}", self.total);
        }
        let from = self.page * self.page_size.get() + 1;
        let to = from + self.items.len() - 1;
        format!("{}–{} of {}", from, to, self.total)
    }
}

/// Slice `rows` to the requested page, clamping to the collection length
pub fn paginate<T>(rows: &[T], page: usize, page_size: PageSize) -> Page<'_, T> {
    let size = page_size.get();
    let start = page.saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());

    Page {
        items: &rows[start..end],
        page,
        page_size,
        total: rows.len(),
    }
}

/// Page index and size of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    page: usize,
    page_size: PageSize,
}

impl Pagination {
    /// Start on the first page with the given size
    pub fn new(page_size: PageSize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Index of the last page for `total` rows (0 when empty)
    pub fn last_page(&self, total: usize) -> usize {
        total.saturating_sub(1) / self.page_size.get()
    }

    /// Move to `page`; past the last page this is a no-op
    ///
    /// Returns whether the page changed.
    pub fn set_page(&mut self, page: usize, total: usize) -> bool {
        if page > self.last_page(total) || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Change the size and go back to the first page
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    /// Change the size from an untrusted value, coercing it into the allowed set
    pub fn request_page_size(&mut self, requested: usize) -> PageSize {
        let size = PageSize::nearest(requested);
        if size.get() != requested {
            tracing::debug!(requested, applied = size.get(), "page size coerced");
        }
        self.set_page_size(size);
        size
    }

    /// Back to the first page, keeping the size
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// The visible window over `rows`
    pub fn window<'a, T>(&self, rows: &'a [T]) -> Page<'a, T> {
        paginate(rows, self.page, self.page_size)
    }
}
