use async_trait::async_trait;

/// A countable, ordered sequence of records addressable by `(skip, take)`.
///
/// Implementors own ordering: two `fetch` calls with the same arguments
/// over unchanged data must return the same records in the same order.
#[async_trait]
pub trait RecordSource: Send + Sync {
    type Item: Send;
    type Error: Send;

    /// Number of records in the whole source.
    async fn count(&self) -> Result<u64, Self::Error>;

    /// Up to `take` records starting after the first `skip`. Shorter than
    /// `take` only when fewer records remain.
    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<Self::Item>, Self::Error>;
}
