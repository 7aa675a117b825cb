pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_standard_model_table;
mod m20261019_000002_create_non_integer_pk_table;
mod m20261019_000003_create_pointed_model_table;
mod m20261019_000004_create_pointer_model_table;
mod m20261019_000005_create_with_file_table;
mod m20261019_000006_create_with_image_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_standard_model_table::Migration),
            Box::new(m20261019_000002_create_non_integer_pk_table::Migration),
            Box::new(m20261019_000003_create_pointed_model_table::Migration),
            Box::new(m20261019_000004_create_pointer_model_table::Migration),
            Box::new(m20261019_000005_create_with_file_table::Migration),
            Box::new(m20261019_000006_create_with_image_table::Migration),
        ]
    }
}
