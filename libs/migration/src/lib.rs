pub use sea_orm_migration::prelude::*;

mod m20250601_000000_bootstrap;
mod m20250601_000001_create_properties;
mod m20250601_000002_create_units;
mod m20250601_000003_create_availability_records;
mod m20250601_000004_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000000_bootstrap::Migration),
            Box::new(m20250601_000001_create_properties::Migration),
            Box::new(m20250601_000002_create_units::Migration),
            Box::new(m20250601_000003_create_availability_records::Migration),
            Box::new(m20250601_000004_create_bookings::Migration),
        ]
    }
}
