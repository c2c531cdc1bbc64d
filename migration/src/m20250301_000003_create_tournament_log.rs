use crate::macros::drop_tables;
use crate::enums::{JobLock, TournamentLog};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentLog::Table)
                    .col(
                        ColumnDef::new(TournamentLog::Id)
                            .integer()
                            .auto_increment()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TournamentLog::Message).text().not_null())
                    .col(ColumnDef::new(TournamentLog::EventDate).date())
                    .col(
                        ColumnDef::new(TournamentLog::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobLock::Table)
                    .col(
                        ColumnDef::new(JobLock::JobName)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobLock::IsRunning).boolean().not_null())
                    .col(
                        ColumnDef::new(JobLock::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, JobLock, TournamentLog);
        Ok(())
    }
}
