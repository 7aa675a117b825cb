use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000003_create_pointed_model_table::PointedModel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointerModel::Table)
                    .if_not_exists()
                    .col(pk_auto(PointerModel::Id))
                    .col(string(PointerModel::Name))
                    .col(integer(PointerModel::TargetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pointer_model_target_id")
                            .from(PointerModel::Table, PointerModel::TargetId)
                            .to(PointedModel::Table, PointedModel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointerModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PointerModel {
    Table,
    Id,
    Name,
    TargetId,
}
