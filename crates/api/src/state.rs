use std::sync::Arc;

use axum::extract::FromRef;
use coursedesk_core::entity::Entity;
use coursedesk_db::models::{Article, HelpRequest, UcsbDiningCommonsMenuItem, UcsbOrganization};
use coursedesk_db::repositories::{InMemoryRepository, PgRepository, Repository};
use coursedesk_db::DbPool;

use crate::config::ServerConfig;

/// Shared handle to the repository of one entity family.
///
/// Generic handlers extract it with `State<EntityRepo<E>>`; the
/// [`FromRef`] impls below pick the matching field out of [`AppState`].
pub struct EntityRepo<E: Entity>(pub Arc<dyn Repository<E>>);

impl<E: Entity> Clone for EntityRepo<E> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<E: Entity> EntityRepo<E> {
    pub fn new(repo: impl Repository<E> + 'static) -> Self {
        Self(Arc::new(repo))
    }
}

/// The storage backend behind the repositories, reported by `/health`.
#[derive(Clone)]
pub enum Storage {
    Postgres(DbPool),
    InMemory,
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::InMemory => "memory",
        }
    }

    pub async fn is_healthy(&self) -> bool {
        match self {
            Storage::Postgres(pool) => coursedesk_db::health_check(pool).await.is_ok(),
            Storage::InMemory => true,
        }
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    pub storage: Storage,
    pub help_requests: EntityRepo<HelpRequest>,
    pub menu_items: EntityRepo<UcsbDiningCommonsMenuItem>,
    pub organizations: EntityRepo<UcsbOrganization>,
    pub articles: EntityRepo<Article>,
}

impl AppState {
    /// State backed by PostgreSQL tables.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            help_requests: EntityRepo::new(PgRepository::new(pool.clone())),
            menu_items: EntityRepo::new(PgRepository::new(pool.clone())),
            organizations: EntityRepo::new(PgRepository::new(pool.clone())),
            articles: EntityRepo::new(PgRepository::new(pool.clone())),
            storage: Storage::Postgres(pool),
        }
    }

    /// State backed by empty process-local repositories.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            storage: Storage::InMemory,
            help_requests: EntityRepo::new(InMemoryRepository::new()),
            menu_items: EntityRepo::new(InMemoryRepository::new()),
            organizations: EntityRepo::new(InMemoryRepository::new()),
            articles: EntityRepo::new(InMemoryRepository::new()),
        }
    }
}

impl FromRef<AppState> for EntityRepo<HelpRequest> {
    fn from_ref(state: &AppState) -> Self {
        state.help_requests.clone()
    }
}

impl FromRef<AppState> for EntityRepo<UcsbDiningCommonsMenuItem> {
    fn from_ref(state: &AppState) -> Self {
        state.menu_items.clone()
    }
}

impl FromRef<AppState> for EntityRepo<UcsbOrganization> {
    fn from_ref(state: &AppState) -> Self {
        state.organizations.clone()
    }
}

impl FromRef<AppState> for EntityRepo<Article> {
    fn from_ref(state: &AppState) -> Self {
        state.articles.clone()
    }
}
