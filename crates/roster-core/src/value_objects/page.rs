//! Offset-based pagination value objects
//!
//! A `PageRequest` is validated at construction: a zero page size is a client
//! error, never silently coerced. A `Page` bundles one bounded slice of
//! content with the total number of rows matching the same condition.

use serde::Serialize;

use crate::error::DomainError;

/// Validated offset/limit pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Create a page request. `page` is zero-based.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPageSize` when `size` is zero.
    pub fn new(page: u32, size: u32) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidPageSize(size));
        }
        Ok(Self { page, size })
    }

    /// Zero-based page number
    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size (always positive)
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row offset of the first element on this page
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Maximum number of rows on this page
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// One page of results plus the total count across the whole matching set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Build a page from a content slice and the total matching count
    pub fn new(content: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            content,
            total,
            page: request.page(),
            size: request.size(),
        }
    }

    /// An empty page (offset past the end still reports the real total)
    pub fn empty(total: i64, request: PageRequest) -> Self {
        Self::new(Vec::new(), total, request)
    }

    /// Number of pages needed to cover `total` rows
    pub fn total_pages(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.total + i64::from(self.size) - 1) / i64::from(self.size)
        }
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        i64::from(self.page) + 1 < self.total_pages()
    }

    /// Map page content while keeping the envelope
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
