use actix_web::{post, web};
use actix_web_httpauth::middleware::HttpAuthentication;
use tracing::info;

use crate::db::Repository;
use crate::types::course::{CourseRes, RCourseCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::AuthenticatedUser;
use crate::utils::{auth::validate_credentials, validation::validate_course_create};

#[post("", wrap = "HttpAuthentication::basic(validate_credentials)")]
pub async fn create_course(
    _req: actix_web::HttpRequest,
    db: web::Data<dyn Repository>,
    user: web::ReqData<AuthenticatedUser>,
    body: web::Json<RCourseCreate>,
) -> ApiResult<CourseRes> {
    let new_course = validate_course_create(body.into_inner())?;

    // owner always comes from the credentials, never from the body
    let course = db.create_course(user.id, new_course).await?;
    info!("user {} created course {}", user.id, course.id);

    Ok(ApiResponse::Created {
        location: format!("/courses/{}", course.id),
        body: CourseRes::new(course, user.into_inner()),
    })
}
