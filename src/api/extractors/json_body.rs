//! JSON extractor that reports rejections in the application error format.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like [`axum::Json`], but malformed bodies and wrong content types are
/// turned into [`AppError::BadRequest`] so every error response shares
/// the `{"error": ...}` shape.
///
/// # Example
///
/// ```rust,ignore
/// use skillx_accounts::api::extractors::JsonBody;
/// use skillx_accounts::domain::RegistrationRequest;
///
/// async fn register(JsonBody(payload): JsonBody<RegistrationRequest>) {
///     // payload deserialized, not yet validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
