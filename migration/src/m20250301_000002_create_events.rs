use sea_orm_migration::prelude::*;
use sea_orm::Iterable;

use crate::enums::*;
use crate::extension::postgres::Type;
use crate::macros::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(AwardCategory::Table)
                    .values(AwardCategory::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .col(
                        ColumnDef::new(Event::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Event::Date).date().unique_key().not_null())
                    .col(ColumnDef::new(Event::IsTourn).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeeGroup::Table)
                    .col(
                        ColumnDef::new(TeeGroup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeeGroup::EventId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeeGroup::Table, TeeGroup::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(TeeGroup::Date).date().not_null())
                    .col(ColumnDef::new(TeeGroup::TeeTime).time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Round::Table)
                    .col(
                        ColumnDef::new(Round::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Round::GroupId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Round::Table, Round::GroupId)
                            .to(TeeGroup::Table, TeeGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(Round::MemberId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Round::Table, Round::MemberId)
                            .to(Member::Table, Member::Id),
                    )
                    .col(ColumnDef::new(Round::Front9).integer())
                    .col(ColumnDef::new(Round::Back9).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventAward::Table)
                    .col(
                        ColumnDef::new(EventAward::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventAward::EventId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventAward::Table, EventAward::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(
                        ColumnDef::new(EventAward::Category)
                            .custom(AwardCategory::Table)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventAward::MemberId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventAward::Table, EventAward::MemberId)
                            .to(Member::Table, Member::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, EventAward, Round, TeeGroup, Event);
        drop_types!(manager, AwardCategory);
        Ok(())
    }
}
