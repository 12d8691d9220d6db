//! Versioned schema migrations. Applied versions are recorded in `seaql_migrations`, so running
//! them on every start only applies what is new.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationTrait, MigratorTrait};

mod m20240501_000001_create_tables;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240501_000001_create_tables::Migration)]
    }
}

pub async fn run(db: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::debug!(backend = ?db.get_database_backend(), "running pending migrations");
    Migrator::up(db, None).await.inspect_err(|error| {
        tracing::error!(error = error as &dyn std::error::Error, "failed to migrate db");
    })
}
