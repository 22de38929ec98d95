//! Page-number pagination.
//!
//! Pages are 1-based. A request may also ask for the `last` page. An empty
//! collection still has one (empty) page, so page 1 is always valid.

use serde::Serialize;

use crate::error::CoreError;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound for a configured page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query value selecting the final page.
pub const LAST_PAGE: &str = "last";

/// Clamp a configured page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(size: Option<i64>) -> i64 {
    size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// The page a client asked for, before it is checked against the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl PageRequest {
    /// Parse the raw `page` query value. Absent or blank means page 1.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(PageRequest::Number(1)),
            Some(LAST_PAGE) => Ok(PageRequest::Last),
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 1)
                .map(PageRequest::Number)
                .ok_or(CoreError::InvalidPage),
        }
    }
}

/// A resolved page within a collection of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub size: i64,
    pub total: i64,
}

impl Page {
    /// Resolve `request` against `total` items split into pages of `size`.
    ///
    /// Fails with [`CoreError::InvalidPage`] when the page is past the end.
    pub fn resolve(request: PageRequest, size: i64, total: i64) -> Result<Self, CoreError> {
        let size = size.max(1);
        let num_pages = page_count(total, size);
        let number = match request {
            PageRequest::Number(n) => n,
            PageRequest::Last => num_pages,
        };
        if number < 1 || number > num_pages {
            return Err(CoreError::InvalidPage);
        }
        Ok(Self {
            number,
            size,
            total,
        })
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.size
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn num_pages(&self) -> i64 {
        page_count(self.total, self.size)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

fn page_count(total: i64, size: i64) -> i64 {
    if total <= 0 {
        1
    } else {
        (total + size - 1) / size
    }
}

/// Link to page `number` of the collection at `path`.
///
/// The first page is addressed without a `page` parameter.
pub fn page_link(path: &str, number: i64) -> String {
    if number <= 1 {
        path.to_string()
    } else {
        format!("{path}?page={number}")
    }
}

/// `{count, next, previous, results}` envelope for a paginated listing.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(page: &Page, path: &str, results: Vec<T>) -> Self {
        Self {
            count: page.total,
            next: page
                .has_next()
                .then(|| page_link(path, page.number + 1)),
            previous: page
                .has_previous()
                .then(|| page_link(path, page.number - 1)),
            results,
        }
    }
}
