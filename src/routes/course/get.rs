use actix_web::{get, web};
use uuid::Uuid;

use crate::db::Repository;
use crate::types::course::CourseRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get_course(
    _req: actix_web::HttpRequest,
    db: web::Data<dyn Repository>,
    path: web::Path<Uuid>,
) -> ApiResult<CourseRes> {
    let (course, owner) = db
        .find_course(path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(CourseRes::new(course, owner)))
}
