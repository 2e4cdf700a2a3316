use serde::Serialize;

/// Validated page request: both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
}

impl PageRequest {
    /// Returns `None` when `page_number` or `page_size` is zero or negative.
    pub fn new(page_number: i64, page_size: i64) -> Option<Self> {
        if page_number <= 0 || page_size <= 0 {
            return None;
        }
        Some(Self {
            page_number: page_number as u64,
            page_size: page_size as u64,
        })
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of records before the first one on this page.
    pub fn skip(&self) -> u64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of records on this page.
    pub fn take(&self) -> u64 {
        self.page_size
    }
}

/// One page of records plus navigation metadata.
///
/// `items` belongs to the caller and may be replaced or drained freely.
/// Everything else is computed once from the request and the source's
/// total count, so it never follows later changes to `items`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    pub items: Vec<T>,
    page_number: u64,
    page_size: u64,
    total_count: u64,
    has_previous_page: bool,
    has_next_page: bool,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        let end = request.page_number.saturating_mul(request.page_size);
        Self {
            items,
            page_number: request.page_number,
            page_size: request.page_size,
            total_count,
            has_previous_page: request.page_number > 1,
            has_next_page: end < total_count,
        }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Records in the whole source, not on this page.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.page_size)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Convert every item while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page_number: i64, page_size: i64) -> PageRequest {
        PageRequest::new(page_number, page_size).expect("valid request")
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(PageRequest::new(0, 10).is_none());
        assert!(PageRequest::new(1, 0).is_none());
        assert!(PageRequest::new(-3, 5).is_none());
        assert!(PageRequest::new(4, -2).is_none());
    }

    #[test]
    fn skip_and_take() {
        let r = request(3, 4);
        assert_eq!(r.skip(), 8);
        assert_eq!(r.take(), 4);
        assert_eq!(request(1, 7).skip(), 0);
    }

    #[test]
    fn skip_saturates_on_huge_pages() {
        assert_eq!(request(i64::MAX, i64::MAX).skip(), u64::MAX);
    }

    #[test]
    fn flags_come_from_request_and_total() {
        let page: PagedList<u8> = PagedList::new(vec![], request(3, 2), 9);
        assert!(page.has_previous_page());
        assert!(page.has_next_page());

        let last: PagedList<u8> = PagedList::new(vec![9], request(5, 2), 9);
        assert!(!last.has_next_page());

        let exact: PagedList<u8> = PagedList::new(vec![7, 8, 9], request(3, 3), 9);
        assert!(!exact.has_next_page());
    }

    #[test]
    fn replacing_items_keeps_metadata() {
        let mut page = PagedList::new(vec![1, 2, 3, 4], request(1, 4), 9);
        page.items = Vec::new();

        assert!(page.is_empty());
        assert_eq!(page.total_count(), 9);
        assert!(!page.has_previous_page());
        assert!(page.has_next_page());
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: PagedList<u8> = PagedList::new(vec![], request(1, 4), 9);
        assert_eq!(page.total_pages(), 3);

        let empty: PagedList<u8> = PagedList::new(vec![], request(1, 4), 0);
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = PagedList::new(vec![1, 2], request(2, 2), 5).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.total_count(), 5);
        assert!(page.has_previous_page());
        assert!(page.has_next_page());
        assert_eq!(page.into_items(), vec![10, 20]);
    }

    #[test]
    fn serializes_camel_case() {
        let page = PagedList::new(vec!["a"], request(1, 1), 2);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["totalCount"], 2);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], false);
        assert_eq!(json["items"][0], "a");
    }
}
