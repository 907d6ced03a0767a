use sea_orm_migration::prelude::*;

mod m20260401_000001_create_users;
mod m20260401_000002_create_scores;
mod m20260401_000003_create_questions;
mod m20260401_000004_create_photos;
mod m20260401_000005_create_photo_likes;
mod m20260401_000006_create_live_state;
mod m20260401_000007_create_admin_actions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_users::Migration),
            Box::new(m20260401_000002_create_scores::Migration),
            Box::new(m20260401_000003_create_questions::Migration),
            Box::new(m20260401_000004_create_photos::Migration),
            Box::new(m20260401_000005_create_photo_likes::Migration),
            Box::new(m20260401_000006_create_live_state::Migration),
            Box::new(m20260401_000007_create_admin_actions::Migration),
        ]
    }
}
