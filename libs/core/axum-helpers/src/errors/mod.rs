pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson;
use mongodb::error::{ErrorKind, WriteFailure};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: Integer error code for logging/monitoring (e.g., 1002)
/// - `error`: Machine-readable error identifier (e.g., "INVALID_OBJECT_ID")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// ```json
/// {
///   "code": 1007,
///   "error": "FORBIDDEN",
///   "message": "unauthorized access"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid identifier: {0}")]
    InvalidObjectId(#[from] bson::oid::Error),

    #[error("Document decode error: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("Document encode error: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Status, error code and client-facing message for this error.
    ///
    /// Store and serialization failures never leak driver text to clients;
    /// it is logged instead.
    pub fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = ErrorCode::SerdeJsonError.code(), "JSON error: {:?}", e);
                default_parts(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::SerdeJsonError)
            }
            AppError::Database(e) => map_mongo_error(e),
            AppError::InvalidObjectId(e) => {
                tracing::info!(error_code = ErrorCode::InvalidObjectId.code(), "Invalid ObjectId: {}", e);
                default_parts(StatusCode::BAD_REQUEST, ErrorCode::InvalidObjectId)
            }
            AppError::Decode(e) => {
                tracing::error!(error_code = ErrorCode::DatabaseDecode.code(), "Decode error: {:?}", e);
                default_parts(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseDecode)
            }
            AppError::Encode(e) => {
                tracing::warn!(error_code = ErrorCode::DatabaseEncode.code(), "Encode error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::DatabaseEncode,
                    e.to_string(),
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = ErrorCode::JsonExtraction.code(), "JSON extraction error: {:?}", e);
                (e.status(), ErrorCode::JsonExtraction, e.body_text())
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(error_code = ErrorCode::QueryExtraction.code(), "Query extraction error: {:?}", e);
                (e.status(), ErrorCode::QueryExtraction, e.body_text())
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg.clone())
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, msg.clone())
            }
            AppError::Forbidden(msg) => {
                tracing::info!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, ErrorCode::Forbidden, msg.clone())
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone())
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, ErrorCode::Conflict, msg.clone())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal server error: {}", msg);
                default_parts(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::ServiceUnavailable, msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

fn default_parts(status: StatusCode, code: ErrorCode) -> (StatusCode, ErrorCode, String) {
    (status, code, code.default_message().to_string())
}

/// Maps a driver error to response components.
fn map_mongo_error(error: &mongodb::error::Error) -> (StatusCode, ErrorCode, String) {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE => {
            tracing::info!(error_code = ErrorCode::DuplicateKey.code(), "Duplicate key: {}", e.message);
            default_parts(StatusCode::CONFLICT, ErrorCode::DuplicateKey)
        }
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::ConnectionPoolCleared { .. } => {
            tracing::error!(error_code = ErrorCode::DatabaseUnavailable.code(), "Database unavailable: {:?}", error);
            default_parts(StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseUnavailable)
        }
        ErrorKind::BsonDeserialization(e) => {
            tracing::error!(error_code = ErrorCode::DatabaseDecode.code(), "Database decode error: {:?}", e);
            default_parts(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseDecode)
        }
        ErrorKind::BsonSerialization(e) => {
            tracing::warn!(error_code = ErrorCode::DatabaseEncode.code(), "Database encode error: {:?}", e);
            default_parts(StatusCode::BAD_REQUEST, ErrorCode::DatabaseEncode)
        }
        _ => {
            tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {:?}", error);
            default_parts(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError)
        }
    }
}
