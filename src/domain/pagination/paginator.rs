use async_trait::async_trait;
use tracing::debug;

use super::RecordSource;
use crate::shared::{PageRequest, PagedList};

/// Fetch page `page_number` (1-based) of `page_size` records from `source`.
///
/// Returns `Ok(None)` without touching the source when either value is zero
/// or negative. Source errors are returned as-is.
pub async fn paginate<S>(
    source: &S,
    page_number: i64,
    page_size: i64,
) -> Result<Option<PagedList<S::Item>>, S::Error>
where
    S: RecordSource + ?Sized,
{
    let Some(request) = PageRequest::new(page_number, page_size) else {
        debug!(page_number, page_size, "Rejected pagination request");
        return Ok(None);
    };

    paginate_request(source, request).await.map(Some)
}

/// Fetch the page described by an already validated request.
///
/// Count and fetch run concurrently and may observe different snapshots
/// if the source changes in between.
pub async fn paginate_request<S>(
    source: &S,
    request: PageRequest,
) -> Result<PagedList<S::Item>, S::Error>
where
    S: RecordSource + ?Sized,
{
    let (total_count, items) = tokio::try_join!(
        source.count(),
        source.fetch(request.skip(), request.take())
    )?;

    debug!(
        page_number = request.page_number(),
        page_size = request.page_size(),
        total_count,
        items = items.len(),
        "Page fetched"
    );

    Ok(PagedList::new(items, request, total_count))
}

/// Method-call form of [`paginate`] for every record source.
#[async_trait]
pub trait Paginate: RecordSource {
    async fn paginate(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<Option<PagedList<Self::Item>>, Self::Error> {
        crate::domain::pagination::paginate(self, page_number, page_size).await
    }
}

impl<S: RecordSource + ?Sized> Paginate for S {}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn records() -> Vec<u32> {
        (1..=9).collect()
    }

    /// Counts queries so tests can assert the source was left alone.
    struct Tracked {
        inner: Vec<u32>,
        queries: AtomicUsize,
    }

    #[async_trait]
    impl RecordSource for Tracked {
        type Item = u32;
        type Error = std::convert::Infallible;

        async fn count(&self) -> Result<u64, Self::Error> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.inner.count().await
        }

        async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<u32>, Self::Error> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch(skip, take).await
        }
    }

    #[derive(Debug, PartialEq)]
    struct ConnectionLost;

    struct Broken;

    #[async_trait]
    impl RecordSource for Broken {
        type Item = u32;
        type Error = ConnectionLost;

        async fn count(&self) -> Result<u64, ConnectionLost> {
            Err(ConnectionLost)
        }

        async fn fetch(&self, _skip: u64, _take: u64) -> Result<Vec<u32>, ConnectionLost> {
            Ok(vec![1, 2, 3])
        }
    }

    #[tokio::test]
    async fn second_page_of_two() {
        let page = paginate(&records(), 2, 2).await.unwrap().unwrap();

        assert_eq!(page.items, vec![3, 4]);
        assert!(page.has_previous_page());
        assert!(page.has_next_page());
        assert_eq!(page.total_count(), 9);
    }

    #[tokio::test]
    async fn first_page_has_no_previous() {
        let page = paginate(&records(), 1, 4).await.unwrap().unwrap();

        assert_eq!(page.items, vec![1, 2, 3, 4]);
        assert!(!page.has_previous_page());
        assert!(page.has_next_page());
    }

    #[tokio::test]
    async fn short_last_page() {
        let page = paginate(&records(), 2, 5).await.unwrap().unwrap();

        assert_eq!(page.items, vec![6, 7, 8, 9]);
        assert_eq!(page.len(), 4);
        assert_eq!(page.total_count(), 9);
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn single_item_last_page() {
        let page = paginate(&records(), 5, 2).await.unwrap().unwrap();

        assert_eq!(page.items, vec![9]);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let page = paginate(&records(), 7, 2).await.unwrap().unwrap();

        assert!(page.is_empty());
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
        assert_eq!(page.total_count(), 9);
    }

    #[tokio::test]
    async fn empty_source() {
        let empty: Vec<u32> = Vec::new();

        let first = paginate(&empty, 1, 10).await.unwrap().unwrap();
        assert!(first.is_empty());
        assert_eq!(first.total_count(), 0);
        assert!(!first.has_previous_page());
        assert!(!first.has_next_page());

        let third = paginate(&empty, 3, 10).await.unwrap().unwrap();
        assert!(third.is_empty());
        assert!(third.has_previous_page());
        assert!(!third.has_next_page());
    }

    #[tokio::test]
    async fn invalid_requests_return_none_without_querying() {
        let source = Tracked {
            inner: records(),
            queries: AtomicUsize::new(0),
        };

        for (page_number, page_size) in [(4, 0), (4, -2), (0, 3), (-1, 3), (0, 0)] {
            let page = paginate(&source, page_number, page_size).await.unwrap();
            assert!(page.is_none(), "({page_number}, {page_size})");
        }
        assert_eq!(source.queries.load(Ordering::SeqCst), 0);

        assert!(paginate(&source, 1, 1).await.unwrap().is_some());
        assert_eq!(source.queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalid_request_on_empty_source_is_none() {
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 1, 0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn item_count_matches_clamp_formula() {
        let source = records();
        let total = source.len() as i64;

        for page_size in 1..=10_i64 {
            for page_number in 1..=12_i64 {
                let page = paginate(&source, page_number, page_size)
                    .await
                    .unwrap()
                    .unwrap();
                let expected = (total - (page_number - 1) * page_size).clamp(0, page_size);

                assert_eq!(page.len() as i64, expected, "({page_number}, {page_size})");
                assert_eq!(page.has_previous_page(), page_number > 1);
                assert_eq!(page.has_next_page(), page_number * page_size < total);
            }
        }
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let err = paginate(&Broken, 1, 2).await.unwrap_err();
        assert_eq!(err, ConnectionLost);
    }

    #[tokio::test]
    async fn method_form_matches_free_function() {
        let source = records();
        let page = source.paginate(3, 3).await.unwrap().unwrap();

        assert_eq!(page.items, vec![7, 8, 9]);
        assert!(!page.has_next_page());
        assert!(source.paginate(-1, 3).await.unwrap().is_none());
    }
}
