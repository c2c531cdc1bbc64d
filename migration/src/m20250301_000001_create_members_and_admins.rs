use crate::macros::*;
use sea_orm_migration::prelude::*;
use sea_orm::Iterable;

#[derive(DeriveMigrationName)]
pub struct Migration;

use crate::enums::*;
use crate::extension::postgres::Type;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Sex::Table)
                    .values(Sex::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Member::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Member::ClubId).integer().unique_key().not_null())
                    .col(ColumnDef::new(Member::Name).string().not_null())
                    .col(ColumnDef::new(Member::EngName).string())
                    .col(ColumnDef::new(Member::Sex).custom(Sex::Table).not_null())
                    .col(
                        ColumnDef::new(Member::Handicap)
                            .array(ColumnType::Integer)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Member::IsNew).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admin::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admin::Username).string().unique_key().not_null())
                    .col(ColumnDef::new(Admin::Email).string().unique_key().not_null())
                    .col(ColumnDef::new(Admin::HashedPassword).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminSession::Table)
                    .col(
                        ColumnDef::new(AdminSession::Token)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminSession::AdminId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AdminSession::Table, AdminSession::AdminId)
                            .to(Admin::Table, Admin::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(
                        ColumnDef::new(AdminSession::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, AdminSession, Admin, Member);
        drop_types!(manager, Sex);
        Ok(())
    }
}
