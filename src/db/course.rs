use crate::db::service::DatabaseService;
use crate::types::course::{CoursePatch, NewCourse};
use crate::types::error::AppError;
use crate::utils;
use chrono::Utc;
use entity::course::{ActiveModel as CourseActive, Column, Entity as Course, Model as CourseModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

fn with_owner(row: (CourseModel, Option<UserModel>)) -> Result<(CourseModel, UserModel), AppError> {
    match row {
        (course, Some(owner)) => Ok((course, owner)),
        (course, None) => Err(AppError::Internal(format!("course {} has no owner", course.id))),
    }
}

impl DatabaseService {
    pub async fn all_courses_with_owner(&self) -> Result<Vec<(CourseModel, UserModel)>, AppError> {
        Course::find()
            .find_also_related(User)
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(with_owner)
            .collect()
    }

    pub async fn get_course_with_owner(
        &self,
        id: Uuid,
    ) -> Result<Option<(CourseModel, UserModel)>, AppError> {
        Course::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .map(with_owner)
            .transpose()
    }

    pub async fn get_owned_course(&self, id: Uuid, owner: Uuid) -> Result<Option<CourseModel>, AppError> {
        Ok(Course::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn insert_course(&self, owner: Uuid, course: NewCourse) -> Result<CourseModel, AppError> {
        let id = utils::new_id();
        let now = Utc::now();

        Ok(CourseActive {
            id: Set(id),
            title: Set(course.title),
            description: Set(course.description),
            estimated_time: Set(course.estimated_time),
            materials_needed: Set(course.materials_needed),
            user_id: Set(owner),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_owned_course(
        &self,
        id: Uuid,
        owner: Uuid,
        patch: CoursePatch,
    ) -> Result<Option<CourseModel>, AppError> {
        // fetch the current row, scoped to the owner
        let Some(current) = self.get_owned_course(id, owner).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(current));
        }

        let mut model: CourseActive = current.into();

        if let Some(v) = patch.title {
            model.title = Set(v);
        }
        if let Some(v) = patch.description {
            model.description = Set(v);
        }
        if let Some(v) = patch.estimated_time {
            model.estimated_time = Set(v);
        }
        if let Some(v) = patch.materials_needed {
            model.materials_needed = Set(v);
        }
        model.updated_at = Set(Utc::now());

        Ok(Some(model.update(&self.database_connection).await?))
    }

    pub async fn delete_owned_course(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError> {
        let res = Course::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner))
            .exec(&self.database_connection)
            .await?;

        Ok(res.rows_affected > 0)
    }
}
