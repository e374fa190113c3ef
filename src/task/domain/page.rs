//! Paging parameters and results for task listings.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};

/// Zero-based offset and page size for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pageable {
    offset: usize,
    size: usize,
}

impl Pageable {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPageSize`] when `size` is zero.
    pub const fn of(offset: usize, size: usize) -> Result<Self, TaskDomainError> {
        if size == 0 {
            return Err(TaskDomainError::InvalidPageSize);
        }
        Ok(Self { offset, size })
    }

    /// Returns the zero-based offset of the first item.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns the maximum number of items on the page.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Returns a copy whose size does not exceed `max_size`.
    #[must_use]
    pub fn clamped(self, max_size: Option<usize>) -> Self {
        match max_size {
            Some(max) if max > 0 && self.size > max => Self {
                offset: self.offset,
                size: max,
            },
            _ => self,
        }
    }
}

/// One page of results together with the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    content: Vec<T>,
    total_items: usize,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub const fn new(content: Vec<T>, total_items: usize) -> Self {
        Self {
            content,
            total_items,
        }
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Returns the number of matches across all pages.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
