use actix_web::{delete, web};
use actix_web_httpauth::middleware::HttpAuthentication;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::Repository;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::AuthenticatedUser;
use crate::utils::auth::validate_credentials;

#[delete("/{id}", wrap = "HttpAuthentication::basic(validate_credentials)")]
pub async fn delete_course(
    _req: actix_web::HttpRequest,
    db: web::Data<dyn Repository>,
    user: web::ReqData<AuthenticatedUser>,
    path: web::Path<Uuid>,
) -> ApiResult<MessageRes> {
    let id = path.into_inner();

    let (_, owner) = db.find_course(id).await?.ok_or(AppError::NotFound)?;
    if owner.id != user.id {
        warn!("user {} tried to delete course {} owned by {}", user.id, id, owner.id);
        return Err(AppError::Forbidden);
    }

    if !db.delete_course(id, user.id).await? {
        // removed between the lookup and the delete
        return Err(AppError::NotFound);
    }
    info!("user {} deleted course {}", user.id, id);

    Ok(ApiResponse::Ok(MessageRes::new("Course successfully deleted!")))
}
