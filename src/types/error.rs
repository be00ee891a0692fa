use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::utils::validation::ValidationErrors;

pub const EMAIL_TAKEN: &str = "emailAddress must be unique";

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("not found")]
    NotFound,
    #[error("route not found")]
    RouteNotFound,
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e.into_messages())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    errors: &'a [String],
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound | Self::RouteNotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound => "The requested resource was not found".to_string(),
            Self::RouteNotFound => "Route Not Found".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Unauthorized => "Access denied".to_string(),
            Self::Forbidden => "You do not own this resource".to_string(),
            Self::Validation(msgs) => msgs.join(", "),
            // infra details stay in the logs
            Self::Db(_) | Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::Validation(vec![EMAIL_TAKEN.to_string()]);
        }
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Validation(errors) = self {
            return HttpResponse::build(self.status_code()).json(ValidationBody { errors });
        }

        if self.status_code().is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: &self.message() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_404() {
        let err: AppError = DbErr::RecordNotFound("course".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_db_errors_are_internal() {
        let err: AppError = DbErr::Custom("boom".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn validation_is_bad_request() {
        let err = AppError::Validation(vec!["A title is required".into()]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "VALIDATION_ERROR");
    }
}
