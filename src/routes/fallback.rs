use actix_web::{
    error::{JsonPayloadError, PathError},
    HttpRequest, HttpResponse,
};

use crate::types::error::AppError;

/// Default service for anything no route matched.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    tracing::debug!("no route for {} {}", req.method(), req.path());
    Err(AppError::RouteNotFound)
}

/// Error handler for `web::JsonConfig`, keeps malformed bodies in the JSON error shape.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Error handler for `web::PathConfig`. A path id that does not parse names no resource.
pub fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("bad path segment in {}: {}", req.path(), err);
    AppError::NotFound.into()
}
