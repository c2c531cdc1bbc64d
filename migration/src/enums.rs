use sea_orm_migration::prelude::*;
use sea_orm::EnumIter;

#[derive(DeriveIden)]
pub(crate) enum Member {
    Table,
    Id,
    ClubId,
    Name,
    EngName,
    Sex,
    Handicap,
    IsNew,
}

#[derive(Iden, EnumIter)]
pub(crate) enum Sex {
    Table,
    #[iden = "Male"]
    Male,
    #[iden = "Female"]
    Female,
    #[iden = "Other"]
    Other,
}

#[derive(DeriveIden)]
pub(crate) enum Admin {
    Table,
    Id,
    Username,
    Email,
    HashedPassword,
}

#[derive(DeriveIden)]
pub(crate) enum AdminSession {
    Table,
    Token,
    AdminId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Event {
    Table,
    Id,
    Date,
    IsTourn,
}

#[derive(DeriveIden)]
pub(crate) enum TeeGroup {
    Table,
    Id,
    EventId,
    Date,
    TeeTime,
}

#[derive(DeriveIden)]
pub(crate) enum Round {
    Table,
    Id,
    GroupId,
    MemberId,
    #[sea_orm(iden = "front_9")]
    Front9,
    #[sea_orm(iden = "back_9")]
    Back9,
}

#[derive(DeriveIden)]
pub(crate) enum EventAward {
    Table,
    Id,
    EventId,
    Category,
    MemberId,
}

#[derive(Iden, EnumIter)]
pub(crate) enum AwardCategory {
    Table,
    #[iden = "MenTotalStroke"]
    MenTotalStroke,
    #[iden = "WomenTotalStroke"]
    WomenTotalStroke,
    #[iden = "MenNetStroke1"]
    MenNetStroke1,
    #[iden = "MenNetStroke2"]
    MenNetStroke2,
    #[iden = "MenNetStroke3"]
    MenNetStroke3,
    #[iden = "MenNetStroke4"]
    MenNetStroke4,
    #[iden = "MenNetStroke5"]
    MenNetStroke5,
    #[iden = "WomenNetStroke1"]
    WomenNetStroke1,
    #[iden = "WomenNetStroke2"]
    WomenNetStroke2,
    #[iden = "MenLongDrive"]
    MenLongDrive,
    #[iden = "WomenLongDrive"]
    WomenLongDrive,
    #[iden = "CloseToCenter"]
    CloseToCenter,
    #[iden = "MenClosePin2"]
    MenClosePin2,
    #[iden = "MenClosePin7"]
    MenClosePin7,
    #[iden = "MenClosePin12"]
    MenClosePin12,
    #[iden = "MenClosePin16"]
    MenClosePin16,
    #[iden = "WomenClosePin7"]
    WomenClosePin7,
    #[iden = "WomenClosePin12"]
    WomenClosePin12,
    #[iden = "MenBb"]
    MenBb,
    #[iden = "WomenBb"]
    WomenBb,
    #[iden = "Birdie"]
    Birdie,
    #[iden = "Eagle"]
    Eagle,
    #[iden = "Albatross"]
    Albatross,
}

#[derive(DeriveIden)]
pub(crate) enum TournamentLog {
    Table,
    Id,
    Message,
    EventDate,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum JobLock {
    Table,
    JobName,
    IsRunning,
    UpdatedAt,
}
