pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_player_table;
mod m20260301_000002_create_punishment_table;
mod m20260301_000003_create_review_table;
mod m20260301_000004_create_server_setting_table;
mod m20260302_000005_create_staff_warning_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_player_table::Migration),
            Box::new(m20260301_000002_create_punishment_table::Migration),
            Box::new(m20260301_000003_create_review_table::Migration),
            Box::new(m20260301_000004_create_server_setting_table::Migration),
            Box::new(m20260302_000005_create_staff_warning_table::Migration),
        ]
    }
}
