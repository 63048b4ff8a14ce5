//! Router builder for one entity family.

use std::marker::PhantomData;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use coursedesk_core::entity::Entity;

use crate::handlers::resource;
use crate::state::{AppState, EntityRepo};

/// Declares the endpoints exposed for entity family `E`.
///
/// ```text
/// GET  /api/{segment}/all   -> list       (user)
/// POST /api/{segment}/post  -> create     (admin)
/// GET  /api/{segment}?id=N  -> get_by_id  (user, opt-in)
/// ```
pub struct Resource<E> {
    segment: &'static str,
    get_by_id: bool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Resource<E>
where
    E: Entity,
    EntityRepo<E>: FromRef<AppState>,
{
    /// A resource mounted at `/api/{segment}` with list and create.
    pub fn at(segment: &'static str) -> Self {
        Self {
            segment,
            get_by_id: false,
            _entity: PhantomData,
        }
    }

    /// Also expose `GET /api/{segment}?id=N`.
    pub fn with_get_by_id(mut self) -> Self {
        self.get_by_id = true;
        self
    }

    pub fn path(&self) -> String {
        format!("/api/{}", self.segment)
    }

    pub fn into_router(self) -> Router<AppState> {
        let base = self.path();
        let router = Router::new()
            .route(&format!("{base}/all"), get(resource::list::<E>))
            .route(&format!("{base}/post"), post(resource::create::<E>));

        if self.get_by_id {
            router.route(&base, get(resource::get_by_id::<E>))
        } else {
            router
        }
    }
}
