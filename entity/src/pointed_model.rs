use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pointed_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pointer_model::Entity")]
    PointerModel,
}

impl Related<super::pointer_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointerModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
