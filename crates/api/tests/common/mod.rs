#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use coursedesk_api::auth::jwt::{generate_access_token, JwtConfig};
use coursedesk_api::config::{DatabaseConfig, ServerConfig};
use coursedesk_api::router::build_app_router;
use coursedesk_api::state::{AppState, EntityRepo};
use coursedesk_core::entity::Entity;
use coursedesk_core::types::DbId;
use coursedesk_db::repositories::{InMemoryRepository, Repository};

/// Build a test `ServerConfig` with safe defaults and in-memory storage.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: None,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-at-least-32-bytes".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Fresh in-memory state using [`test_config`].
pub fn test_state() -> AppState {
    AppState::in_memory(test_config())
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_with_roles(roles: &[&str]) -> String {
    generate_access_token("cgaucho@ucsb.edu", roles, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Token for a caller holding only the base role.
pub fn user_token() -> String {
    token_with_roles(&["user"])
}

/// Token for an administrator (base role included).
pub fn admin_token() -> String {
    token_with_roles(&["user", "admin"])
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

/// In-memory repository that records every `save` call.
pub struct RecordingRepository<E> {
    inner: InMemoryRepository<E>,
    saves: AtomicUsize,
    saved: Mutex<Vec<E>>,
}

impl<E: Entity> RecordingRepository<E> {
    pub fn shared() -> Arc<Self> {
        Self::seeded(Vec::new())
    }

    pub fn seeded(entities: impl IntoIterator<Item = E>) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryRepository::seeded(entities),
            saves: AtomicUsize::new(0),
            saved: Mutex::new(Vec::new()),
        })
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Entities exactly as they were passed to `save`.
    pub fn saved(&self) -> Vec<E> {
        self.saved.lock().unwrap().clone()
    }

    pub fn handle(self: &Arc<Self>) -> EntityRepo<E> {
        EntityRepo(Arc::clone(self) as Arc<dyn Repository<E>>)
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for RecordingRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, entity: E) -> Result<E, sqlx::Error> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.saved.lock().unwrap().push(entity.clone());
        self.inner.save(entity).await
    }
}

/// Repository whose storage is unreachable.
pub struct FailingRepository;

#[async_trait]
impl<E: Entity> Repository<E> for FailingRepository {
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<E>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn save(&self, _entity: E) -> Result<E, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    form: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match form {
        Some(form) => {
            builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response {
    send(app, Method::GET, uri, token, None).await
}

/// POST with parameters in the query string.
pub async fn post(app: Router, uri: &str, token: Option<&str>) -> Response {
    send(app, Method::POST, uri, token, None).await
}

/// POST with parameters in an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, form: &str, token: Option<&str>) -> Response {
    send(app, Method::POST, uri, token, Some(form)).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
