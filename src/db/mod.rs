use async_trait::async_trait;
use entity::{course::Model as CourseModel, user::Model as UserModel};
use uuid::Uuid;

use crate::types::course::{CoursePatch, NewCourse};
use crate::types::error::AppError;
use crate::types::user::DBUserCreate;

pub mod course;
pub mod service;
pub mod user;

/// Persistence operations the handlers and the auth middleware need.
///
/// Course reads come back joined with their owner. Mutations take the acting
/// user's id and only touch rows that user owns.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError>;

    async fn email_taken(&self, email: &str) -> Result<bool, AppError>;

    async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError>;

    async fn list_courses(&self) -> Result<Vec<(CourseModel, UserModel)>, AppError>;

    async fn find_course(&self, id: Uuid) -> Result<Option<(CourseModel, UserModel)>, AppError>;

    async fn create_course(&self, owner: Uuid, course: NewCourse) -> Result<CourseModel, AppError>;

    /// `None` when no course with `id` is owned by `owner`.
    async fn update_course(
        &self,
        id: Uuid,
        owner: Uuid,
        patch: CoursePatch,
    ) -> Result<Option<CourseModel>, AppError>;

    /// `false` when no course with `id` is owned by `owner`.
    async fn delete_course(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError>;
}
