//! In-memory record sources

use std::convert::Infallible;

use async_trait::async_trait;

use crate::domain::RecordSource;

/// A slice is already ordered; skip/take map straight onto its positions.
#[async_trait]
impl<T: Clone + Send + Sync> RecordSource for [T] {
    type Item = T;
    type Error = Infallible;

    async fn count(&self) -> Result<u64, Infallible> {
        Ok(self.len() as u64)
    }

    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Infallible> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);
        Ok(self.iter().skip(skip).take(take).cloned().collect())
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> RecordSource for Vec<T> {
    type Item = T;
    type Error = Infallible;

    async fn count(&self) -> Result<u64, Infallible> {
        self.as_slice().count().await
    }

    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<T>, Infallible> {
        self.as_slice().fetch(skip, take).await
    }
}
