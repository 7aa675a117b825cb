use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pointer_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub target_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pointed_model::Entity",
        from = "Column::TargetId",
        to = "super::pointed_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PointedModel,
}

impl Related<super::pointed_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointedModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
