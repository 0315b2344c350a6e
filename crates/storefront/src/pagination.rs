//! Page arithmetic for product grids.
//!
//! Pages are 1-based.

/// Page layout for a list of `total` items, `per_page` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    per_page: usize,
    total: usize,
}

impl Pagination {
    /// Create a pagination. A `per_page` of 0 is treated as 1.
    #[must_use]
    pub fn new(per_page: usize, total: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            total,
        }
    }

    /// Items per page.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Total number of items.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of pages (0 when there are no items).
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Bound `page` into `1..=page_count`, or 1 when there are no items.
    #[must_use]
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.page_count().max(1))
    }

    /// The items on `page`. Out-of-range pages are empty.
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let Some(start) = page
            .checked_sub(1)
            .and_then(|index| index.checked_mul(self.per_page))
        else {
            return &[];
        };
        let end = start.saturating_add(self.per_page).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    /// Whether a page follows `page`.
    #[must_use]
    pub const fn has_next(&self, page: usize) -> bool {
        page < self.page_count()
    }

    /// Whether a page precedes `page`.
    #[must_use]
    pub const fn has_previous(&self, page: usize) -> bool {
        page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(Pagination::new(4, 12).page_count(), 3);
        assert_eq!(Pagination::new(4, 13).page_count(), 4);
        assert_eq!(Pagination::new(4, 0).page_count(), 0);
    }

    #[test]
    fn test_zero_per_page_clamped() {
        let pagination = Pagination::new(0, 3);
        assert_eq!(pagination.per_page(), 1);
        assert_eq!(pagination.page_count(), 3);
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<u32> = (1..=10).collect();
        let pagination = Pagination::new(4, items.len());
        assert_eq!(pagination.page(&items, 1), &[1, 2, 3, 4]);
        assert_eq!(pagination.page(&items, 3), &[9, 10]);
    }

    #[test]
    fn test_out_of_range_pages_empty() {
        let items: Vec<u32> = (1..=10).collect();
        let pagination = Pagination::new(4, items.len());
        assert!(pagination.page(&items, 0).is_empty());
        assert!(pagination.page(&items, 4).is_empty());
        assert!(pagination.page(&items, usize::MAX).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        let pagination = Pagination::new(4, 10);
        assert_eq!(pagination.clamp_page(0), 1);
        assert_eq!(pagination.clamp_page(2), 2);
        assert_eq!(pagination.clamp_page(99), 3);
        assert_eq!(Pagination::new(4, 0).clamp_page(5), 1);
    }

    #[test]
    fn test_navigation_flags() {
        let pagination = Pagination::new(4, 10);
        assert!(!pagination.has_previous(1));
        assert!(pagination.has_next(1));
        assert!(pagination.has_previous(3));
        assert!(!pagination.has_next(3));
    }
}
