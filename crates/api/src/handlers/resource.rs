//! Generic handlers for an exposed entity family.
//!
//! Each handler is instantiated per family by
//! [`Resource`](crate::routes::resource::Resource); the family's repository is
//! pulled out of the application state through `State<EntityRepo<E>>`.

use axum::extract::State;
use axum::Json;
use coursedesk_core::entity::Entity;
use coursedesk_core::error::CoreError;
use coursedesk_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::RequestParams;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::state::EntityRepo;

/// Query parameters for `GET /api/<family>?id=<id>`.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: DbId,
}

/// GET /api/{family}/all
///
/// Every stored entity, in repository order.
pub async fn list<E: Entity>(
    RequireUser(_user): RequireUser,
    State(EntityRepo(repo)): State<EntityRepo<E>>,
) -> AppResult<Json<Vec<E>>> {
    let entities = repo.find_all().await?;
    Ok(Json(entities))
}

/// POST /api/{family}/post
///
/// Build an entity from one parameter per field and save it. Admin only.
pub async fn create<E: Entity>(
    RequireAdmin(user): RequireAdmin,
    State(EntityRepo(repo)): State<EntityRepo<E>>,
    RequestParams(params): RequestParams<E::Params>,
) -> AppResult<Json<E>> {
    let saved = repo.save(E::from_params(params)).await?;

    tracing::info!(
        entity = E::NAME,
        id = ?saved.id(),
        subject = %user.subject,
        "Entity created",
    );

    Ok(Json(saved))
}

/// GET /api/{family}?id={id}
pub async fn get_by_id<E: Entity>(
    RequireUser(_user): RequireUser,
    State(EntityRepo(repo)): State<EntityRepo<E>>,
    RequestParams(IdParams { id }): RequestParams<IdParams>,
) -> AppResult<Json<E>> {
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: E::NAME,
            id,
        }))?;
    Ok(Json(entity))
}
