use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("email query parameter is required")]
    MissingEmail,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Stored cart item could not be decoded: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Cart item could not be encoded: {0}")]
    Encode(#[from] bson::ser::Error),
}

pub type CartResult<T> = Result<T, CartError>;

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::MissingEmail => {
                AppError::BadRequest("email query parameter is required".to_string())
            }
            CartError::Database(e) => AppError::Database(e),
            CartError::Decode(e) => AppError::Decode(e),
            CartError::Encode(e) => AppError::Encode(e),
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
