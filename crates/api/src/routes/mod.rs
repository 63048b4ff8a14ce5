pub mod health;
pub mod resource;

use axum::Router;
use coursedesk_db::models::{Article, HelpRequest, UcsbDiningCommonsMenuItem, UcsbOrganization};

use crate::state::AppState;
use resource::Resource;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /api/helprequests/all                    list (user)
/// /api/helprequests/post                   create (admin)
/// /api/helprequests?id=N                   get by id (user)
///
/// /api/ucsbdiningcommonsmenuitem/all       list (user)
/// /api/ucsbdiningcommonsmenuitem/post      create (admin)
/// /api/ucsbdiningcommonsmenuitem?id=N      get by id (user)
///
/// /api/ucsborganization/all                list (user)
/// /api/ucsborganization/post               create (admin)
///
/// /api/articles/all                        list (user)
/// /api/articles/post                       create (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(
            Resource::<HelpRequest>::at("helprequests")
                .with_get_by_id()
                .into_router(),
        )
        .merge(
            Resource::<UcsbDiningCommonsMenuItem>::at("ucsbdiningcommonsmenuitem")
                .with_get_by_id()
                .into_router(),
        )
        .merge(Resource::<UcsbOrganization>::at("ucsborganization").into_router())
        .merge(Resource::<Article>::at("articles").into_router())
}
