use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NonIntegerPk::Table)
                    .if_not_exists()
                    .col(string(NonIntegerPk::Foo).primary_key())
                    .col(string(NonIntegerPk::Bar))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NonIntegerPk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NonIntegerPk {
    Table,
    Foo,
    Bar,
}
