//! Factory for the string primary key model.
//!
//! The primary key is `foo`, drawn from the sequence as `"foo{n}"`; forcing the primary
//! key forces `foo`.

use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::{
    error::FactoryError,
    factory::{helpers::sequenced, Sequenced},
    model::NonIntegerPk,
    sequence::Sequence,
};

/// Factory for `NonIntegerPk`. `bar` defaults to an empty string.
#[derive(Debug, Default)]
pub struct NonIntegerPkFactory {
    sequence: Sequence,
}

impl NonIntegerPkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&self) -> NonIntegerPkBuilder<'_> {
        NonIntegerPkBuilder {
            factory: self,
            foo: None,
            bar: String::new(),
        }
    }

    pub fn build(&self) -> NonIntegerPk {
        self.prepare().build()
    }

    pub async fn create<C: ConnectionTrait>(&self, db: &C) -> Result<NonIntegerPk, FactoryError> {
        self.prepare().create(db).await
    }
}

impl Sequenced for NonIntegerPkFactory {
    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

pub struct NonIntegerPkBuilder<'f> {
    factory: &'f NonIntegerPkFactory,
    foo: Option<String>,
    bar: String,
}

impl NonIntegerPkBuilder<'_> {
    /// Forces the primary key, which is `foo`.
    pub fn pk(self, pk: impl Into<String>) -> Self {
        self.foo(pk)
    }

    pub fn foo(mut self, foo: impl Into<String>) -> Self {
        self.foo = Some(foo.into());
        self
    }

    pub fn bar(mut self, bar: impl Into<String>) -> Self {
        self.bar = bar.into();
        self
    }

    pub fn build(self) -> NonIntegerPk {
        let n = self.factory.sequence.next();

        NonIntegerPk {
            foo: self.foo.unwrap_or_else(|| sequenced("foo", n)),
            bar: self.bar,
        }
    }

    /// Builds the model and inserts it.
    ///
    /// # Returns
    /// - `Ok(NonIntegerPk)` - Persisted model
    /// - `Err(FactoryError::DbErr)` - Database error during insert, e.g. a duplicate key
    pub async fn create<C: ConnectionTrait>(self, db: &C) -> Result<NonIntegerPk, FactoryError> {
        let row = self.build().to_active_model().insert(db).await?;

        Ok(NonIntegerPk::from_entity(row))
    }
}
