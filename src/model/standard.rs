use sea_orm::ActiveValue;

/// Model with an auto-incremented integer primary key and one sequence-driven field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardModel {
    /// Primary key, `None` until persisted unless forced.
    pub id: Option<i32>,
    pub foo: String,
}

impl StandardModel {
    pub fn pk(&self) -> Option<i32> {
        self.id
    }

    /// Converts an entity row into the domain model.
    pub fn from_entity(entity: entity::standard_model::Model) -> Self {
        Self {
            id: Some(entity.id),
            foo: entity.foo,
        }
    }

    /// Active model for inserting this model; an unset id is left to the database.
    pub fn to_active_model(&self) -> entity::standard_model::ActiveModel {
        entity::standard_model::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            foo: ActiveValue::Set(self.foo.clone()),
        }
    }
}
