use actix_web::{put, web};
use actix_web_httpauth::middleware::HttpAuthentication;
use uuid::Uuid;

use crate::db::Repository;
use crate::types::course::{CourseRes, RCourseUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::AuthenticatedUser;
use crate::utils::{auth::validate_credentials, validation::validate_course_update};

#[put("/{id}", wrap = "HttpAuthentication::basic(validate_credentials)")]
pub async fn update_course(
    _req: actix_web::HttpRequest,
    db: web::Data<dyn Repository>,
    user: web::ReqData<AuthenticatedUser>,
    path: web::Path<Uuid>,
    body: web::Json<RCourseUpdate>,
) -> ApiResult<CourseRes> {
    let id = path.into_inner();

    let (_, owner) = db.find_course(id).await?.ok_or(AppError::NotFound)?;
    if owner.id != user.id {
        tracing::warn!("user {} tried to update course {} owned by {}", user.id, id, owner.id);
        return Err(AppError::Forbidden);
    }

    let patch = validate_course_update(body.into_inner())?;

    let course = db
        .update_course(id, user.id, patch)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(CourseRes::new(course, owner)))
}
