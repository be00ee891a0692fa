use std::sync::Arc;
use sea_orm::ConnectOptions;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use course_api::db::service::DatabaseService;
use course_api::config::EnvConfig;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub _container: Option<ContainerAsync<Postgres>>,
}

impl TestContext {
    /// Fresh in-memory SQLite database with migrations applied.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // one connection, otherwise every pooled connection sees its own empty database
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(options)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            _container: None,
        }
    }

    /// PostgreSQL in a throwaway container. Needs a running Docker daemon.
    #[allow(dead_code)]
    pub async fn postgres() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let config = EnvConfig {
            port: 5000,
            db_url: format!("postgresql://postgres:postgres@{}:{}/postgres", host, port),
            sql_logging: false,
        };

        let db = Arc::new(
            DatabaseService::from_config(&config)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            _container: Some(container),
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_user() -> Value {
        json!({
            "firstName": "Joe",
            "lastName": "Smith",
            "emailAddress": "joe@smith.com",
            "password": "joepassword"
        })
    }

    pub fn sample_course() -> Value {
        json!({
            "title": "Build a Basic Bookcase",
            "description": "High-end furniture projects are great to dream about.",
            "estimatedTime": "12",
            "materialsNeeded": "* 1/2 x 3/4 inch parting strip"
        })
    }
}
