use async_trait::async_trait;
use entity::{course::Model as CourseModel, user::Model as UserModel};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;
use uuid::Uuid;

use crate::config::EnvConfig;
use crate::db::Repository;
use crate::types::course::{CoursePatch, NewCourse};
use crate::types::error::AppError;
use crate::types::user::DBUserCreate;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn from_config(config: &EnvConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.db_url.clone());
        options.sqlx_logging(config.sql_logging);
        Self::connect(options).await
    }

    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }
}

#[async_trait]
impl Repository for DatabaseService {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        self.get_user_by_email(email).await
    }

    async fn email_taken(&self, email: &str) -> Result<bool, AppError> {
        self.user_exists_by_email(email).await
    }

    async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        self.insert_user(payload).await
    }

    async fn list_courses(&self) -> Result<Vec<(CourseModel, UserModel)>, AppError> {
        self.all_courses_with_owner().await
    }

    async fn find_course(&self, id: Uuid) -> Result<Option<(CourseModel, UserModel)>, AppError> {
        self.get_course_with_owner(id).await
    }

    async fn create_course(&self, owner: Uuid, course: NewCourse) -> Result<CourseModel, AppError> {
        self.insert_course(owner, course).await
    }

    async fn update_course(
        &self,
        id: Uuid,
        owner: Uuid,
        patch: CoursePatch,
    ) -> Result<Option<CourseModel>, AppError> {
        self.update_owned_course(id, owner, patch).await
    }

    async fn delete_course(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError> {
        self.delete_owned_course(id, owner).await
    }
}
