//! Pagination state shared by the paginated list views.

use serde::{Deserialize, Deserializer};

/// Current position within a paginated collection. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl Pagination {
    /// Create a pagination, clamping `current` into `[1, total]`.
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Accept a page request only when it lies within `[1, total]`.
    pub fn request(&self, page: u32) -> Option<u32> {
        (1..=self.total).contains(&page).then_some(page)
    }

    /// The page before the current one, which may be out of range.
    pub fn prev(&self) -> u32 {
        self.current.saturating_sub(1)
    }

    /// The page after the current one, which may be out of range.
    pub fn next(&self) -> u32 {
        self.current.saturating_add(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// All page numbers, for numbered page buttons.
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.total
    }
}

/// One page of records as returned by a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> Paged<T> {
    /// A single page holding every record.
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            current_page: 1,
            total_pages: 1,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.total_pages)
    }
}

/// Wire shapes a list endpoint may answer with.
#[derive(Deserialize)]
#[serde(untagged)]
enum PagedRepr<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(
            alias = "jobPosts",
            alias = "statuses",
            alias = "users",
            alias = "withdrawals",
            alias = "data",
            default = "Vec::new"
        )]
        items: Vec<T>,
        #[serde(rename = "currentPage", default)]
        current_page: Option<u32>,
        #[serde(rename = "totalPages", default)]
        total_pages: Option<u32>,
    },
}

impl<'de, T> Deserialize<'de> for Paged<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match PagedRepr::deserialize(deserializer)? {
            PagedRepr::Bare(items) => Paged::single(items),
            PagedRepr::Wrapped {
                items,
                current_page,
                total_pages,
            } => Paged {
                items,
                current_page: current_page.unwrap_or(1),
                total_pages: total_pages.unwrap_or(1),
            },
        })
    }
}

/// View state of a paginated table: rows, position, and the last error.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    rows: Vec<T>,
    pagination: Pagination,
    error: Option<String>,
    loading: bool,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::default(),
            error: None,
            loading: true,
        }
    }
}

impl<T> PagedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Accept a page request only when it lies within the known range.
    pub fn request(&self, page: u32) -> Option<u32> {
        self.pagination.request(page)
    }

    /// Mark a fetch as in flight.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Record the outcome of a fetch.
    ///
    /// Success replaces the rows and the position; failure clears the rows
    /// and keeps one error message.
    pub fn apply<E: std::fmt::Display>(&mut self, result: Result<Paged<T>, E>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.pagination = page.pagination();
                self.rows = page.items;
                self.error = None;
            }
            Err(e) => {
                self.rows.clear();
                self.error = Some(e.to_string());
            }
        }
    }
}
