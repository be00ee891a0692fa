use actix_web::{web, App};
use base64::{prelude::BASE64_STANDARD, Engine};
use std::sync::Arc;
use course_api::{
    db::{service::DatabaseService, Repository},
    types::{course::NewCourse, error::AppError, user::DBUserCreate},
    utils::password::hash_password,
};
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

/// A seeded user and the plaintext password that logs them in.
#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

impl TestUser {
    #[allow(dead_code)]
    pub fn auth_header(&self) -> (&'static str, String) {
        basic_auth(&self.email, &self.password)
    }
}

#[allow(dead_code)]
pub fn basic_auth(email: &str, password: &str) -> (&'static str, String) {
    let encoded = BASE64_STANDARD.encode(format!("{email}:{password}"));
    ("Authorization", format!("Basic {}", encoded))
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let repo: Arc<dyn Repository> = self.db.clone();
        App::new()
            .app_data(web::Data::from(repo))
            .configure(course_api::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<TestUser, AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password_hash = hash_password(TEST_PASSWORD).expect("Failed to hash password");

        let id = self.db.create_user(DBUserCreate {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email_address: email.clone(),
            password_hash,
        }).await?;

        Ok(TestUser { id, email, password: TEST_PASSWORD.to_string() })
    }

    #[allow(dead_code)]
    pub async fn create_test_course(&self, owner: Uuid) -> Uuid {
        self.db.create_course(owner, NewCourse {
            title: "Learn How to Program".to_string(),
            description: "In this course, you'll learn how to write code.".to_string(),
            estimated_time: "6".to_string(),
            materials_needed: "* Notebook computer".to_string(),
        })
        .await
        .expect("Failed to create course")
        .id
    }
}
