//! Community Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use accounts::AccountError;

/// Community-specific result type alias
pub type CommunityResult<T> = Result<T, CommunityError>;

/// Community-specific error variants
#[derive(Debug, Error)]
pub enum CommunityError {
    /// Malformed or missing request input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced company does not exist
    #[error("Company not found")]
    CompanyNotFound,

    /// Referenced employee does not exist
    #[error("Employee not found")]
    EmployeeNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommunityError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommunityError::Validation(_) => ErrorKind::BadRequest,
            CommunityError::CompanyNotFound | CommunityError::EmployeeNotFound => {
                ErrorKind::NotFound
            }
            CommunityError::Database(_) | CommunityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError, without leaking internals on server faults
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            CommunityError::Database(e) => {
                tracing::error!(error = %e, "Community database error");
            }
            CommunityError::Internal(msg) => {
                tracing::error!(message = %msg, "Community internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Community error");
            }
        }
    }
}

impl IntoResponse for CommunityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AccountError> for CommunityError {
    fn from(err: AccountError) -> Self {
        CommunityError::Internal(err.to_string())
    }
}
