use actix_web::web;

use crate::routes::fallback::{json_error, not_found, path_error};

pub mod course;
pub mod fallback;
pub mod health;
pub mod user;

/// Registers every route. The app must also carry a `web::Data<dyn Repository>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));
    cfg.app_data(web::PathConfig::default().error_handler(path_error));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/users")
            .service(user::current::current_user)
            .service(user::create::create_user)
    );
    cfg.service(
        web::scope("/courses")
            .service(course::list::list_courses)
            .service(course::create::create_course)
            .service(course::get::get_course)
            .service(course::update::update_course)
            .service(course::delete::delete_course)
    );
    cfg.default_service(web::to(not_found));
}
