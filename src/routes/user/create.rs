use actix_web::{post, web};
use tracing::info;

use crate::db::Repository;
use crate::types::error::{AppError, EMAIL_TAKEN};
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::{DBUserCreate, RUserCreate};
use crate::utils::{password::hash_password, validation::validate_user_create};

#[post("")]
pub async fn create_user(
    _req: actix_web::HttpRequest,
    db: web::Data<dyn Repository>,
    body: web::Json<RUserCreate>,
) -> ApiResult<MessageRes> {
    let new_user = validate_user_create(body.into_inner())?;

    if db.email_taken(&new_user.email_address).await? {
        return Err(AppError::Validation(vec![EMAIL_TAKEN.to_string()]));
    }

    let password_hash = hash_password(&new_user.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user_id = db
        .create_user(DBUserCreate {
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email_address: new_user.email_address,
            password_hash,
        })
        .await?;

    info!("created user {}", user_id);

    Ok(ApiResponse::Created {
        location: "/".to_string(),
        body: MessageRes::new("Account successfully created!"),
    })
}
