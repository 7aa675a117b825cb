use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "with_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage-relative name of the attached image, `None` when no image was stored.
    pub animage: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
