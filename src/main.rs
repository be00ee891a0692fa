use actix_web::{middleware::Logger, web, App, HttpServer};
use course_api::config::config;
use course_api::db::{service::DatabaseService, Repository};
use course_api::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let config = config();
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service: Arc<dyn Repository> = Arc::new(
        DatabaseService::from_config(config)
            .await
            .map_err(|e| std::io::Error::other(format!("database unavailable: {e}")))?
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
