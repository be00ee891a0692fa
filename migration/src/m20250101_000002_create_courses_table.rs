use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Description,
    EstimatedTime,
    MaterialsNeeded,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Courses::Table)
                .if_not_exists()
                .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Courses::Title).string().not_null())
                .col(ColumnDef::new(Courses::Description).text().not_null())
                .col(ColumnDef::new(Courses::EstimatedTime).string().not_null())
                .col(ColumnDef::new(Courses::MaterialsNeeded).string().not_null())
                .col(ColumnDef::new(Courses::UserId).uuid().not_null())
                .col(ColumnDef::new(Courses::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Courses::UpdatedAt).timestamp_with_time_zone().not_null())
                // Declared inline so SQLite, which cannot ALTER in a foreign key, gets it too
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_courses_user")
                        .from(Courses::Table, Courses::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_courses_user")
                .table(Courses::Table)
                .col(Courses::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Index goes with the table
        m.drop_table(Table::drop().table(Courses::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
