use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Rejections raised before any statement is built.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("match contains no updatable fields")]
    NoFields,
    #[error("matchId is required")]
    MissingId,
    #[error("page size must be a positive integer")]
    PageSize,
    #[error("page {page} is out of range for page size {page_size}")]
    PageOutOfRange { page: u32, page_size: u32 },
}

#[derive(Error, Debug)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Repo(RepoError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Repo(RepoError::Database(db_err)) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let res = AppError::from(RepoError::from(ValidationError::NoFields)).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_internal_error() {
        let res = AppError::from(RepoError::from(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
