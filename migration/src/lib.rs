pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_game_table;
mod m20260105_000003_create_slot_table;
mod m20260105_000004_create_booking_table;
mod m20260105_000005_create_invitation_table;
mod m20260105_000006_create_leaderboard_table;
mod m20260105_000007_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_game_table::Migration),
            Box::new(m20260105_000003_create_slot_table::Migration),
            Box::new(m20260105_000004_create_booking_table::Migration),
            Box::new(m20260105_000005_create_invitation_table::Migration),
            Box::new(m20260105_000006_create_leaderboard_table::Migration),
            Box::new(m20260105_000007_create_notification_table::Migration),
        ]
    }
}
