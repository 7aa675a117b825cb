use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StandardModel::Table)
                    .if_not_exists()
                    .col(pk_auto(StandardModel::Id))
                    .col(string(StandardModel::Foo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StandardModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StandardModel {
    Table,
    Id,
    Foo,
}
