use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson;
use thiserror::Error;

/// Message used for every failed ownership or capability check
pub const UNAUTHORIZED_ACCESS: &str = "unauthorized access";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with email '{0}' already exists")]
    AlreadyExists(String),

    #[error("unauthorized access")]
    Forbidden,

    /// Existing records block the unique email index
    #[error(
        "cannot create unique email index, duplicated emails: {}; remove or merge the extra records first",
        .0.join(", ")
    )]
    DuplicateEmails(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Stored user could not be decoded: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("User could not be encoded: {0}")]
    Encode(#[from] bson::ser::Error),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::AlreadyExists(email) => {
                AppError::Conflict(format!("User with email '{}' already exists", email))
            }
            UserError::Forbidden => AppError::Forbidden(UNAUTHORIZED_ACCESS.to_string()),
            e @ UserError::DuplicateEmails(_) => AppError::InternalServerError(e.to_string()),
            UserError::Database(e) => AppError::Database(e),
            UserError::Decode(e) => AppError::Decode(e),
            UserError::Encode(e) => AppError::Encode(e),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_duplicate_emails_message_names_each_email() {
        let err = UserError::DuplicateEmails(vec!["a@x.com".to_string(), "null".to_string()]);
        let message = err.to_string();

        assert!(message.contains("a@x.com, null"));
        assert!(message.contains("remove or merge"));
    }

    #[test]
    fn test_error_statuses() {
        let status = |err: UserError| AppError::from(err).parts().0;

        assert_eq!(status(UserError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status(UserError::AlreadyExists("a@x.com".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status(UserError::DuplicateEmails(vec!["a@x.com".to_string()])),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
