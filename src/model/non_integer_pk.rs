use sea_orm::ActiveValue;

/// Model whose primary key is the sequence-driven string field itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonIntegerPk {
    pub foo: String,
    pub bar: String,
}

impl NonIntegerPk {
    /// The primary key, which is always `foo`.
    pub fn pk(&self) -> &str {
        &self.foo
    }

    pub fn from_entity(entity: entity::non_integer_pk::Model) -> Self {
        Self {
            foo: entity.foo,
            bar: entity.bar,
        }
    }

    pub fn to_active_model(&self) -> entity::non_integer_pk::ActiveModel {
        entity::non_integer_pk::ActiveModel {
            foo: ActiveValue::Set(self.foo.clone()),
            bar: ActiveValue::Set(self.bar.clone()),
        }
    }
}
