pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_websites_table;
mod m20260305_000001_add_verification_request_to_users_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_websites_table::Migration),
            Box::new(m20260305_000001_add_verification_request_to_users_table::Migration),
        ]
    }
}
