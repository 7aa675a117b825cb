//! Factory for the integer primary key model.
//!
//! `foo` is drawn from the factory's sequence as `"foo{n}"`. Forcing the primary key
//! never touches the sequence.

use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::{
    error::FactoryError,
    factory::{
        helpers::{next_after_max_pk, sequenced},
        Sequenced,
    },
    model::StandardModel,
    sequence::Sequence,
};

/// Factory for `StandardModel`.
///
/// # Example
///
/// ```rust,ignore
/// use modelfactory::factory::StandardFactory;
///
/// let factory = StandardFactory::new();
/// let model = factory.prepare().id(10).create(&db).await?;
/// assert_eq!(model.foo, "foo1");
/// assert_eq!(model.pk(), Some(10));
/// ```
#[derive(Debug, Default)]
pub struct StandardFactory {
    sequence: Sequence,
}

impl StandardFactory {
    /// Creates a factory whose sequence starts at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory drawing from a custom sequence.
    pub fn with_sequence(sequence: Sequence) -> Self {
        Self { sequence }
    }

    /// Starts a builder for overriding generated values.
    pub fn prepare(&self) -> StandardBuilder<'_> {
        StandardBuilder {
            factory: self,
            id: None,
            foo: None,
        }
    }

    /// Builds an unsaved model with generated values.
    pub fn build(&self) -> StandardModel {
        self.prepare().build()
    }

    /// Creates a persisted model with generated values.
    pub async fn create<C: ConnectionTrait>(&self, db: &C) -> Result<StandardModel, FactoryError> {
        self.prepare().create(db).await
    }

    /// Restarts the sequence one past the highest persisted primary key.
    pub async fn reset_sequence_from_store<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<(), FactoryError> {
        let next = next_after_max_pk::<entity::prelude::StandardModel, _>(
            db,
            entity::standard_model::Column::Id,
            self.sequence.base(),
        )
        .await?;
        self.sequence.reset_to(next);
        Ok(())
    }
}

impl Sequenced for StandardFactory {
    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

/// Per-call overrides for `StandardFactory`.
pub struct StandardBuilder<'f> {
    factory: &'f StandardFactory,
    id: Option<i32>,
    foo: Option<String>,
}

impl StandardBuilder<'_> {
    /// Forces the primary key.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Overrides the sequence-driven `foo`. The sequence still advances.
    pub fn foo(mut self, foo: impl Into<String>) -> Self {
        self.foo = Some(foo.into());
        self
    }

    /// Builds the model without persisting it.
    pub fn build(self) -> StandardModel {
        let n = self.factory.sequence.next();

        StandardModel {
            id: self.id,
            foo: self.foo.unwrap_or_else(|| sequenced("foo", n)),
        }
    }

    /// Builds the model and inserts it.
    ///
    /// # Returns
    /// - `Ok(StandardModel)` - Persisted model with its primary key
    /// - `Err(FactoryError::DbErr)` - Database error during insert, e.g. a duplicate forced key
    pub async fn create<C: ConnectionTrait>(self, db: &C) -> Result<StandardModel, FactoryError> {
        let row = self.build().to_active_model().insert(db).await?;

        Ok(StandardModel::from_entity(row))
    }
}
