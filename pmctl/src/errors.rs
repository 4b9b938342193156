use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Creation supplied an identity where the store must assign one
    #[error("A new {resource} cannot already have an identity")]
    IdentityConflict { resource: &'static str },

    /// A mutating request body carried no identity
    #[error("{resource} body is missing an identity")]
    MissingIdentity { resource: &'static str },

    /// Path identity and body identity disagree
    #[error("{resource} path identity {path} does not match body identity {body}")]
    IdentityMismatch {
        resource: &'static str,
        path: String,
        body: String,
    },

    /// Requested record not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// Invalid request data (field-level constraint violation)
    #[error("{message}")]
    BadRequest { message: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Store operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::IdentityConflict { .. } | Error::MissingIdentity { .. } | Error::IdentityMismatch { .. } => {
                StatusCode::BAD_REQUEST
            }
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::ForeignKeyViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::CheckViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::IdentityConflict { .. }
            | Error::MissingIdentity { .. }
            | Error::IdentityMismatch { .. }
            | Error::NotFound { .. }
            | Error::BadRequest { .. } => self.to_string(),
            Error::Internal { .. } => "Internal server error".to_string(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::UniqueViolation { .. } => "Resource already exists".to_string(),
                DbError::ForeignKeyViolation { .. } => "Invalid reference to related resource".to_string(),
                DbError::CheckViolation { .. } => "Invalid data provided".to_string(),
                DbError::Other(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::IdentityConflict { .. }
            | Error::MissingIdentity { .. }
            | Error::IdentityMismatch { .. }
            | Error::BadRequest { .. }
            | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        (self.status_code(), self.user_message()).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_errors_map_to_bad_request() {
        assert_eq!(
            Error::IdentityConflict { resource: "Tenant" }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::MissingIdentity { resource: "Tenant" }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::IdentityMismatch {
                resource: "Tenant",
                path: "1".into(),
                body: "2".into()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = Error::NotFound {
            resource: "Project",
            id: "9".into(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Project with ID 9 not found");
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = Error::Database(DbError::UniqueViolation {
            constraint: Some("emp_post_pkey".into()),
            table: Some("emp_post".into()),
            message: "duplicate key".into(),
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
