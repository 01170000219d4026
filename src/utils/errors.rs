use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error carrying an HTTP status and a client-facing message.
///
/// Every domain error is operational: it is translated into the JSON error
/// envelope `{"status": "fail"|"error", "message": ...}` and never tears the
/// process down. `fail` marks 4xx responses, `error` marks 5xx.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Translate a store failure. Unique-constraint violations surface as a
    /// generic validation error; everything else is internal.
    pub fn database(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::bad_request("Duplicate field value. Please use another value.")
            }
            _ => {
                tracing::error!(error = %err, "Database error");
                Self::internal("Something went wrong")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_word = if self.status.is_client_error() {
            "fail"
        } else {
            "error"
        };

        let body = Json(json!({
            "status": status_word,
            "message": self.message,
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err: anyhow::Error = err.into();
        tracing::error!(error = %err, "Unhandled error");
        AppError::internal("Something went wrong")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_use_fail_status() {
        let err = AppError::not_found("User not found.");
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn constructors_set_expected_codes() {
        assert_eq!(
            AppError::bad_request("x").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("x").status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::forbidden("x").status, StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::internal("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
