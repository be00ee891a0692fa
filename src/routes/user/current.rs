use actix_web::{get, web};
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AuthenticatedUser, UserProfileRes};
use crate::utils::auth::validate_credentials;

#[get("", wrap = "HttpAuthentication::basic(validate_credentials)")]
pub async fn current_user(
    _req: actix_web::HttpRequest,
    user: web::ReqData<AuthenticatedUser>,
) -> ApiResult<UserProfileRes> {
    Ok(ApiResponse::Ok(user.into_inner().into()))
}
