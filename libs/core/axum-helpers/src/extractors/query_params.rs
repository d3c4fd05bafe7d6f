//! Query string extractor with JSON rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Deserializes the query string into `T`.
///
/// Same as axum's `Query`, except a malformed query string (duplicate keys,
/// wrong types) is rejected as `400 BAD_REQUEST` in the standard error body
/// instead of plain text.
///
/// # Example
/// ```ignore
/// async fn list(QueryParams(query): QueryParams<ProductQuery>) -> String {
///     format!("{:?}", query.name)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(QueryParams(value))
    }
}
