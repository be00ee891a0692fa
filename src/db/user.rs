use crate::db::service::DatabaseService;
use crate::{
    types::{error::AppError, user::DBUserCreate},
    utils,
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::EmailAddress.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::EmailAddress.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup. A duplicate email trips the unique index and surfaces as a validation error.
    pub async fn insert_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        let uid = utils::new_id();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email_address: Set(payload.email_address),
            password: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(uid)
    }
}
