use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::InsufficientStock {
                    requested,
                    available,
                } => HttpError::Conflict(format!(
                    "Insufficient stock: requested {requested}, available {available}"
                )),
                RepositoryError::LockConflict => {
                    HttpError::ServiceUnavailable("Row lock conflict, retry the request".into())
                }
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Unauthorized(msg) => HttpError::Unauthorized(msg),

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::InvalidAmount(msg) => HttpError::BadRequest(msg),

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_becomes_conflict() {
        let err = ServiceError::Repo(RepositoryError::InsufficientStock {
            requested: 6,
            available: 4,
        });
        assert!(matches!(HttpError::from(err), HttpError::Conflict(_)));
    }

    #[test]
    fn lock_conflict_is_retryable() {
        let err = ServiceError::Repo(RepositoryError::LockConflict);
        assert!(matches!(
            HttpError::from(err),
            HttpError::ServiceUnavailable(_)
        ));
    }

    #[test]
    fn invalid_amount_becomes_bad_request() {
        let err = ServiceError::InvalidAmount("restock amount must be positive".into());
        assert!(matches!(HttpError::from(err), HttpError::BadRequest(_)));
    }

    #[test]
    fn forbidden_keeps_its_status() {
        let err = ServiceError::Forbidden("admin role required".into());
        let response = HttpError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
