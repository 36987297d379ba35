pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_discord_server_table;
mod m20250601_000003_create_bot_status_table;
mod m20250602_000004_create_rule_table;
mod m20250602_000005_create_statistics_table;
mod m20250602_000006_create_uptime_record_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_discord_server_table::Migration),
            Box::new(m20250601_000003_create_bot_status_table::Migration),
            Box::new(m20250602_000004_create_rule_table::Migration),
            Box::new(m20250602_000005_create_statistics_table::Migration),
            Box::new(m20250602_000006_create_uptime_record_table::Migration),
        ]
    }
}
