use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Database(sqlx::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(format!("duplicate identifier: {}", db_err.message()));
            }
        }
        Self::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Json(err) => {
                tracing::error!(error = %err, "serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Presence check for required request-body fields.
pub fn require<T>(value: Option<T>, name: &'static str) -> Result<T, ApiError> {
    value.ok_or(ApiError::MissingField(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_through_present_values() {
        let value = require(Some("Réception".to_string()), "department").unwrap();
        assert_eq!(value, "Réception");
    }

    #[test]
    fn require_reports_the_missing_field() {
        let err = require::<String>(None, "firstName").unwrap_err();
        assert_eq!(err.to_string(), "firstName is required");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("employee").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let response = ApiError::Conflict("duplicate identifier".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
