//! Schema migrations for the directory store.
//!
//! Applied automatically at server startup against whichever backend the
//! database url selects, so a fresh SQLite file and a provisioned MySQL
//! schema go through the same path.

pub use sea_orm_migration::prelude::*;

mod m001_create_directory;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m001_create_directory::Migration)]
    }
}
