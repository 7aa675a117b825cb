//! Get-or-create models: a pointed model and a pointer referencing it.

use sea_orm::ActiveValue;

/// Model resolved by its `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointed {
    pub id: Option<i32>,
    pub name: String,
}

impl Pointed {
    pub fn pk(&self) -> Option<i32> {
        self.id
    }

    pub fn from_entity(entity: entity::pointed_model::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
        }
    }

    pub fn to_active_model(&self) -> entity::pointed_model::ActiveModel {
        entity::pointed_model::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name.clone()),
        }
    }
}

/// Model resolved by its `name`, referencing a `Pointed` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub id: Option<i32>,
    pub name: String,
    pub target: Pointed,
}

impl Pointer {
    pub fn pk(&self) -> Option<i32> {
        self.id
    }

    /// Converts a pointer row and its target row into the domain model.
    pub fn from_entity(
        entity: entity::pointer_model::Model,
        target: entity::pointed_model::Model,
    ) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            target: Pointed::from_entity(target),
        }
    }

    /// Active model for inserting this pointer.
    ///
    /// # Returns
    /// - `Some(ActiveModel)` - The target is persisted
    /// - `None` - The target has no primary key yet
    pub fn to_active_model(&self) -> Option<entity::pointer_model::ActiveModel> {
        let target_id = self.target.id?;

        Some(entity::pointer_model::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(self.name.clone()),
            target_id: ActiveValue::Set(target_id),
        })
    }
}
