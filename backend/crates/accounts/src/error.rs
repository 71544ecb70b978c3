//! Accounts Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::fmt;

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// A single request field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// One or more request fields failed validation
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// Email is already registered
    #[error("Email is already registered")]
    DuplicateEmail,

    /// Generic auth failure. Deliberately identical for unknown email,
    /// wrong password and wrong-role logins.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, tampered or expired
    #[error("Authentication required")]
    Unauthenticated,

    /// Valid token, but the role claim does not grant access
    #[error("Insufficient role for this resource")]
    Forbidden,

    /// Company not found
    #[error("Company not found")]
    CompanyNotFound,

    /// Employee not found
    #[error("Employee not found")]
    EmployeeNotFound,

    /// An identity exists without its domain profile. Internal
    /// consistency fault: must fail closed instead of issuing a token.
    #[error("Identity has no matching profile")]
    ProfileMissing,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::DuplicateEmail => ErrorKind::Conflict,
            AccountError::InvalidCredentials | AccountError::Unauthenticated => {
                ErrorKind::Unauthorized
            }
            AccountError::Forbidden => ErrorKind::Forbidden,
            AccountError::CompanyNotFound | AccountError::EmployeeNotFound => ErrorKind::NotFound,
            AccountError::ProfileMissing
            | AccountError::Database(_)
            | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server faults get a generic message so that internals are never
    /// leaked in a response body.
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
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountError::ProfileMissing => {
                tracing::error!("Identity/profile drift detected, failing closed");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AccountError::Validation(vec![]).kind(), ErrorKind::BadRequest);
        assert_eq!(AccountError::DuplicateEmail.kind(), ErrorKind::Conflict);
        assert_eq!(
            AccountError::InvalidCredentials.kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(AccountError::Unauthenticated.kind(), ErrorKind::Unauthorized);
        assert_eq!(AccountError::Forbidden.kind(), ErrorKind::Forbidden);
        assert_eq!(AccountError::CompanyNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AccountError::ProfileMissing.kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_validation_lists_offending_fields() {
        let err = AccountError::Validation(vec![
            FieldViolation::new("email", "invalid format"),
            FieldViolation::new("name", "must not be empty"),
        ]);
        let message = err.to_string();
        assert!(message.contains("email"));
        assert!(message.contains("name"));
    }

    #[test]
    fn test_server_faults_do_not_leak_details() {
        let err = AccountError::Internal("pool exhausted at 10.0.0.3".to_string());
        let app_err = err.to_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(!app_err.message().contains("10.0.0.3"));

        let err = AccountError::ProfileMissing;
        assert!(!err.to_app_error().message().contains("profile"));
    }
}
