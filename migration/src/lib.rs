pub use sea_orm_migration::prelude::*;
mod enums;
mod m20250301_000001_create_members_and_admins;
mod m20250301_000002_create_events;
mod m20250301_000003_create_tournament_log;
mod macros;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_members_and_admins::Migration),
            Box::new(m20250301_000002_create_events::Migration),
            Box::new(m20250301_000003_create_tournament_log::Migration),
        ]
    }
}
