use actix_web::{get, web};

use crate::db::Repository;
use crate::types::course::CourseRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_courses(
    _req: actix_web::HttpRequest,
    db: web::Data<dyn Repository>,
) -> ApiResult<Vec<CourseRes>> {
    let courses = db
        .list_courses()
        .await?
        .into_iter()
        .map(|(course, owner)| CourseRes::new(course, owner))
        .collect();

    Ok(ApiResponse::Ok(courses))
}
