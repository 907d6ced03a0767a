use sea_orm_migration::prelude::*;

mod m20260401_000001_create_games;
mod m20260401_000002_create_entries;
mod m20260401_000003_create_winners;
mod m20260401_000004_create_audit_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_games::Migration),
            Box::new(m20260401_000002_create_entries::Migration),
            Box::new(m20260401_000003_create_winners::Migration),
            Box::new(m20260401_000004_create_audit_log::Migration),
        ]
    }
}
