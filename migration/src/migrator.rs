use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m20250801_000001_create_users::Migration),
            Box::new(migrations::m20250801_000002_create_courses::Migration),
            Box::new(migrations::m20250801_000003_create_assignments::Migration),
            Box::new(migrations::m20250801_000004_create_assignment_files::Migration),
            Box::new(migrations::m20250801_000005_create_submissions::Migration),
            Box::new(migrations::m20250801_000006_create_submission_files::Migration),
        ]
    }
}
