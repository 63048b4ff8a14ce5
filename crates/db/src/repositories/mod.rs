//! Repository layer.
//!
//! [`Repository`] is the storage contract the HTTP layer depends on. It is
//! object safe so handlers hold an `Arc<dyn Repository<E>>` and never know
//! which backend sits behind it:
//!
//! - [`PgRepository`] -- PostgreSQL via sqlx, used in deployments.
//! - [`InMemoryRepository`] -- process-local map, used in development and tests.

use async_trait::async_trait;
use coursedesk_core::entity::Entity;
use coursedesk_core::types::DbId;

pub mod memory;
pub mod pg;

pub use memory::InMemoryRepository;
pub use pg::{PgEntity, PgQueryAs, PgRepository};

/// Stores and retrieves the entities of one family.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every stored entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error>;

    /// The entity with the given id, or `None` if no such row exists.
    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error>;

    /// Insert an unsaved entity (assigning its id) or update a saved one in
    /// place. Returns the entity as stored.
    ///
    /// Updating an id that does not exist fails with
    /// [`sqlx::Error::RowNotFound`].
    async fn save(&self, entity: E) -> Result<E, sqlx::Error>;
}
