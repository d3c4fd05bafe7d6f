//! JSON extractor with content-type enforcement and validation.

use crate::errors::{AppError, ErrorCode};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header},
};
use serde::de::DeserializeOwned;
use validator::Validate;

const JSON_MEDIA_TYPE: &str = "application/json";

/// JSON extractor with automatic validation.
///
/// Rejections, in the order they are checked:
/// - `415` when `Content-Type` is missing or not `application/json`. The body
///   is not read in this case.
/// - `413` when the body exceeds the router's `DefaultBodyLimit`.
/// - `400 INVALID_JSON` when the body does not deserialize into `T`,
///   including missing required fields.
/// - `400 VALIDATION_ERROR` when `T::validate` fails; field errors go into
///   `details`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct NewProduct {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<NewProduct>) -> String {
///     format!("Creating: {}", payload.name)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType(
                ErrorCode::UnsupportedMediaType
                    .default_message()
                    .to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
                _ => AppError::BadRequest(e.body_text()),
            })?;

        let data: T =
            serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidJson(e.to_string()))?;

        data.validate()?;

        Ok(ValidatedJson(data))
    }
}

/// Whether the request declares an `application/json` body.
///
/// Media type parameters such as `charset` are ignored and the comparison is
/// case-insensitive.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}
