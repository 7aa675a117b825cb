use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "with_file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage-relative name of the attached file, `None` when no file was stored.
    pub afile: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
