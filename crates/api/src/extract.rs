//! Request parameter extraction.

use axum::extract::{FromRequest, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Named scalar parameters, one per field of `T`.
///
/// Read from an `application/x-www-form-urlencoded` body when the request
/// declares that content type, otherwise from the query string. Missing or
/// unparsable values (e.g. a malformed date-time) are rejected with 400.
///
/// Consumes the request body, so it must be the last handler argument.
#[derive(Debug)]
pub struct RequestParams<T>(pub T);

impl<T, S> FromRequest<S> for RequestParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(params) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            return Ok(RequestParams(params));
        }

        let Query(params) = Query::<T>::try_from_uri(req.uri())
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(RequestParams(params))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}
