//! Page-number pagination shared by every list endpoint.

pub const DEFAULT_PAGE_LIMIT: u64 = 6;
pub const MAX_PAGE_LIMIT: u64 = 100;
/// Highest page number served; keeps `index() * limit` within a signed 64-bit offset.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_LIMIT;

/// Requested page, 1-based and at most `MAX_PAGE`, with the page size clamped to
/// `1..=MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).clamp(1, MAX_PAGE),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the total number of matching items.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub params: PageParams,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            items,
            total,
            params,
        }
    }

    pub fn empty(params: PageParams) -> Self {
        Self::new(Vec::new(), 0, params)
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.params.limit)
    }

    pub fn next(&self) -> Option<u64> {
        (self.params.page < self.total_pages()).then_some(self.params.page + 1)
    }

    pub fn previous(&self) -> Option<u64> {
        (self.params.page > 1).then_some(self.params.page - 1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_params() {
        assert_eq!(PageParams::new(Some(0), Some(0)), PageParams { page: 1, limit: 1 });
        assert_eq!(PageParams::new(None, Some(1000)).limit, MAX_PAGE_LIMIT);
        assert_eq!(PageParams::default().limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn caps_page_so_offset_fits() {
        let params = PageParams::new(Some(u64::MAX), Some(u64::MAX));

        assert_eq!(params.page, MAX_PAGE);
        let offset = params.index().checked_mul(params.limit).unwrap();
        assert!(offset <= i64::MAX as u64);

        let page: Page<i32> = Page::new(Vec::new(), 3, params);
        assert_eq!(page.next(), None);
        assert_eq!(page.previous(), Some(MAX_PAGE - 1));
    }

    #[test]
    fn computes_neighbours() {
        let first = Page::new(vec![1, 2], 5, PageParams::new(Some(1), Some(2)));
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.previous(), None);

        let last = Page::new(vec![5], 5, PageParams::new(Some(3), Some(2)));
        assert_eq!(last.total_pages(), 3);
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(2));
    }
}
