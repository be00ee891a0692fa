use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::basic::BasicAuth;
use tracing::{error, warn};

use crate::db::Repository;
use crate::types::{error::AppError, user::AuthenticatedUser};
use crate::utils::password::verify_password;

/// Resolves an email/password pair to a user. Every failure is `Unauthorized`
/// so callers cannot tell an unknown email from a wrong password.
pub async fn authenticate(
    repo: &dyn Repository,
    email: &str,
    password: Option<&str>,
) -> Result<AuthenticatedUser, AppError> {
    let Some(user) = repo.find_user_by_email(email).await? else {
        warn!("authentication failed: no user with email {}", email);
        return Err(AppError::Unauthorized);
    };

    let Some(password) = password else {
        warn!("authentication failed: no password supplied for {}", email);
        return Err(AppError::Unauthorized);
    };

    match verify_password(password, &user.password) {
        Ok(true) => Ok(user.into()),
        Ok(false) => {
            warn!("authentication failed: wrong password for {}", email);
            Err(AppError::Unauthorized)
        }
        Err(e) => {
            error!("stored password hash for user {} is unreadable: {}", user.id, e);
            Err(AppError::Unauthorized)
        }
    }
}

/// Validator for `HttpAuthentication::basic`. On success the user is placed in
/// the request extensions for `web::ReqData<AuthenticatedUser>`.
pub async fn validate_credentials(
    req: ServiceRequest,
    credentials: BasicAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(repo) = req.app_data::<web::Data<dyn Repository>>().cloned() else {
        return Err((AppError::Internal("repository not registered".into()).into(), req));
    };

    match authenticate(repo.get_ref(), credentials.user_id(), credentials.password()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}
