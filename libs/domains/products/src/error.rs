use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Stored product could not be decoded: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Product could not be encoded: {0}")]
    Encode(#[from] bson::ser::Error),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Decode(e) => AppError::Decode(e),
            ProductError::Encode(e) => AppError::Encode(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
