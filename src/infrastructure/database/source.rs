//! SeaORM selects as record sources

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::domain::RecordSource;

const MAX_BIND: u64 = i64::MAX as u64;

/// A `Select<E>` bound to a connection.
///
/// Ordering comes from the select itself: without an `order_by_*` clause
/// the database is free to return rows in any order.
pub struct SelectSource<'c, E, C>
where
    E: EntityTrait,
{
    select: Select<E>,
    conn: &'c C,
}

impl<'c, E, C> SelectSource<'c, E, C>
where
    E: EntityTrait,
{
    pub fn new(select: Select<E>, conn: &'c C) -> Self {
        Self { select, conn }
    }
}

#[async_trait]
impl<'c, E, C> RecordSource for SelectSource<'c, E, C>
where
    E: EntityTrait,
    E::Model: Sync,
    C: ConnectionTrait,
{
    type Item = E::Model;
    type Error = DbErr;

    async fn count(&self) -> Result<u64, DbErr> {
        self.select.clone().count(self.conn).await
    }

    async fn fetch(&self, skip: u64, take: u64) -> Result<Vec<E::Model>, DbErr> {
        // SQL binds OFFSET/LIMIT as signed 64-bit; no table holds that many rows.
        if skip > MAX_BIND {
            return Ok(Vec::new());
        }

        self.select
            .clone()
            .offset(skip)
            .limit(take.min(MAX_BIND))
            .all(self.conn)
            .await
    }
}

/// Turn any entity select into a [`SelectSource`].
pub trait SelectExt<E: EntityTrait> {
    fn source<C: ConnectionTrait>(self, conn: &C) -> SelectSource<'_, E, C>;
}

impl<E: EntityTrait> SelectExt<E> for Select<E> {
    fn source<C: ConnectionTrait>(self, conn: &C) -> SelectSource<'_, E, C> {
        SelectSource::new(self, conn)
    }
}
