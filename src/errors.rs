use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::error::DbErr;

/// Errors produced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    /// Wraps a database error, promoting constraint failures so callers can
    /// distinguish them from transport-level faults.
    pub fn db_error(error: DbErr) -> Self {
        let text = error.to_string();
        let is_constraint = [
            "UNIQUE constraint",
            "unique constraint",
            "FOREIGN KEY constraint",
            "foreign key constraint",
            "NOT NULL constraint",
            "not-null constraint",
        ]
        .iter()
        .any(|needle| text.contains(needle));

        if is_constraint {
            ServiceError::ConstraintViolation(text)
        } else {
            ServiceError::DatabaseError(error)
        }
    }

    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DatabaseError(_) | Self::ConstraintViolation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns the error message suitable for HTTP responses.
    /// Internal errors return generic messages to avoid leaking implementation details.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) | Self::ConstraintViolation(_) => {
                "An error occurred while processing the request.".to_string()
            }
            Self::ValidationError(_) => self.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status_code(), self.response_message()).into_response()
    }
}

/// API error type for HTTP responses
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Service error: {0}")]
    ServiceError(#[from] ServiceError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Delegate to ServiceError's unified status/message methods when applicable
        let (status, message) = match &self {
            ApiError::ServiceError(service_error) => (
                service_error.status_code(),
                service_error.response_message(),
            ),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Supplier 42 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ServiceError::ValidationError("name: length".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_are_opaque_500s() {
        let err = ServiceError::db_error(DbErr::Custom("connection reset".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.response_message(),
            "An error occurred while processing the request."
        );
    }

    #[test]
    fn unique_violations_are_classified() {
        let err = ServiceError::db_error(DbErr::Custom(
            "UNIQUE constraint failed: supplier_categories.name".into(),
        ));
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
