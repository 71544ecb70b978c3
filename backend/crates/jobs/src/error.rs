//! Jobs Error Types
//!
//! This module provides job/application-specific error variants that
//! integrate with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use accounts::AccountError;

/// Jobs-specific result type alias
pub type JobsResult<T> = Result<T, JobsError>;

/// Jobs-specific error variants
#[derive(Debug, Error)]
pub enum JobsError {
    /// Malformed or missing request input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced company does not exist
    #[error("Company not found")]
    CompanyNotFound,

    /// Referenced employee does not exist
    #[error("Employee not found")]
    EmployeeNotFound,

    /// Referenced job does not exist
    #[error("Job not found")]
    JobNotFound,

    /// Application submitted without a non-empty document attachment
    #[error("A non-empty document attachment is required")]
    MissingDocument,

    /// Document storage failed. When the application record is the
    /// failing side instead, the stored document gets a compensating
    /// delete.
    #[error("Document storage failed: {0}")]
    Storage(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JobsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            JobsError::Validation(_) | JobsError::MissingDocument => ErrorKind::BadRequest,
            JobsError::CompanyNotFound | JobsError::EmployeeNotFound | JobsError::JobNotFound => {
                ErrorKind::NotFound
            }
            JobsError::Storage(_) | JobsError::Database(_) | JobsError::Internal(_) => {
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

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            JobsError::Database(e) => {
                tracing::error!(error = %e, "Jobs database error");
            }
            JobsError::Storage(msg) => {
                tracing::error!(message = %msg, "Document storage error");
            }
            JobsError::Internal(msg) => {
                tracing::error!(message = %msg, "Jobs internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Jobs error");
            }
        }
    }
}

impl IntoResponse for JobsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AccountError> for JobsError {
    fn from(err: AccountError) -> Self {
        // Only infrastructure-level account errors can reach this crate
        // (existence checks); user-facing account errors never do.
        JobsError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            JobsError::Validation("title".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(JobsError::MissingDocument.kind(), ErrorKind::BadRequest);
        assert_eq!(JobsError::CompanyNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(JobsError::EmployeeNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(JobsError::JobNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            JobsError::Storage("disk full".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_storage_faults_do_not_leak_details() {
        let err = JobsError::Storage("/var/data/documents: disk full".into());
        let app_err = err.to_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(!app_err.message().contains("/var/data"));
    }
}
