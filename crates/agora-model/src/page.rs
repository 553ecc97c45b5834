//! Pagination container.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing, plus the total item count so
/// clients can compute page math.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Requested page size.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub const fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            page,
            per_page,
            total,
        }
    }

    /// Computes the zero-based row offset for a 1-based page number.
    #[must_use]
    pub const fn offset(page: u32, per_page: u32) -> u64 {
        (page.saturating_sub(1) as u64) * (per_page as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_math() {
        assert_eq!(Page::<()>::offset(1, 20), 0);
        assert_eq!(Page::<()>::offset(2, 20), 20);
        assert_eq!(Page::<()>::offset(5, 10), 40);
        // Page 0 is clamped to the first page rather than underflowing.
        assert_eq!(Page::<()>::offset(0, 20), 0);
    }
}
