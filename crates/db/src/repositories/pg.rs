//! Generic PostgreSQL repository.
//!
//! SQL is assembled once per repository from the entity's table and column
//! list; every row decodes through the entity's `FromRow` derive.

use std::marker::PhantomData;

use async_trait::async_trait;
use coursedesk_core::entity::Entity;
use coursedesk_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

use super::Repository;

/// A `query_as` builder for entity `E` against PostgreSQL.
pub type PgQueryAs<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// Table mapping for an entity stored in PostgreSQL.
///
/// The primary key column is always `id` (BIGSERIAL) and is not listed in
/// [`COLUMNS`](PgEntity::COLUMNS).
pub trait PgEntity: Entity + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;

    /// Non-key columns, in the order [`bind_columns`](PgEntity::bind_columns)
    /// binds them.
    const COLUMNS: &'static [&'static str];

    /// Bind every non-key column value, in [`COLUMNS`](PgEntity::COLUMNS) order.
    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

/// Provides data access for one entity table.
pub struct PgRepository<E> {
    pool: PgPool,
    select_all: String,
    select_one: String,
    insert: String,
    update: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: PgEntity> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        let columns = E::COLUMNS.join(", ");
        let returning = format!("id, {columns}");
        let placeholders = (1..=E::COLUMNS.len())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = E::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_placeholder = E::COLUMNS.len() + 1;
        let table = E::TABLE;

        Self {
            pool,
            select_all: format!("SELECT {returning} FROM {table} ORDER BY id"),
            select_one: format!("SELECT {returning} FROM {table} WHERE id = $1"),
            insert: format!(
                "INSERT INTO {table} ({columns}) VALUES ({placeholders}) RETURNING {returning}"
            ),
            update: format!(
                "UPDATE {table} SET {assignments} WHERE id = ${id_placeholder} RETURNING {returning}"
            ),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: PgEntity> Repository<E> for PgRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        sqlx::query_as::<_, E>(&self.select_all)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        sqlx::query_as::<_, E>(&self.select_one)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, entity: E) -> Result<E, sqlx::Error> {
        match entity.id() {
            None => {
                entity
                    .bind_columns(sqlx::query_as::<_, E>(&self.insert))
                    .fetch_one(&self.pool)
                    .await
            }
            Some(id) => {
                entity
                    .bind_columns(sqlx::query_as::<_, E>(&self.update))
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UcsbDiningCommonsMenuItem;

    #[tokio::test]
    async fn builds_sql_from_column_list() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        let repo = PgRepository::<UcsbDiningCommonsMenuItem>::new(pool);

        assert_eq!(
            repo.select_all,
            "SELECT id, dining_commons_code, name, station \
             FROM ucsb_dining_commons_menu_items ORDER BY id"
        );
        assert_eq!(
            repo.insert,
            "INSERT INTO ucsb_dining_commons_menu_items (dining_commons_code, name, station) \
             VALUES ($1, $2, $3) RETURNING id, dining_commons_code, name, station"
        );
        assert_eq!(
            repo.update,
            "UPDATE ucsb_dining_commons_menu_items \
             SET dining_commons_code = $1, name = $2, station = $3 \
             WHERE id = $4 RETURNING id, dining_commons_code, name, station"
        );
    }
}
