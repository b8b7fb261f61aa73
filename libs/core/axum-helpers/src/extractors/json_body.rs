//! JSON body extractor with structured rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejections use the standard error body.
///
/// Malformed JSON, a missing content type, or a body that does not fit `T`
/// yields `JSON_EXTRACTION` with the status axum chose (400, 415 or 422).
///
/// ```ignore
/// async fn create(JsonBody(product): JsonBody<Product>) -> Json<InsertAck> { ... }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;
        Ok(JsonBody(data))
    }
}
