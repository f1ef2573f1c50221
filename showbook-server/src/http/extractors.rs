//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Numeric record id from the `{id}` path segment. Anything that is not a
/// positive integer cannot name a record, so it is answered with 404.
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("page", parts.uri.path()))?;

        id.parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(|| ApiError::not_found("page", parts.uri.path()))
    }
}
