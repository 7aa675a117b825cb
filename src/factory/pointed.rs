//! Get-or-create factory keyed by `name`.

use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    error::FactoryError,
    factory::{
        helpers::{next_after_max_pk, sequenced},
        Sequenced,
    },
    model::Pointed,
    resolver::{IdentityResolver, Resolution},
    sequence::Sequence,
};

/// Factory for `Pointed`, creating through get-or-create on `name`.
///
/// # Example
///
/// ```rust,ignore
/// use modelfactory::factory::PointedFactory;
///
/// let factory = PointedFactory::new();
/// let one = factory.prepare().name("one").create(&db).await?;
/// let again = factory.prepare().name("one").create(&db).await?;
/// assert_eq!(one, again);
/// ```
pub struct PointedFactory {
    sequence: Sequence,
    resolver: IdentityResolver<entity::prelude::PointedModel>,
}

impl PointedFactory {
    /// Creates a factory with `name = "foo{n}"` and `name` as lookup column.
    pub fn new() -> Self {
        Self {
            sequence: Sequence::default(),
            resolver: IdentityResolver::new([entity::pointed_model::Column::Name]),
        }
    }

    pub fn prepare(&self) -> PointedBuilder<'_> {
        PointedBuilder {
            factory: self,
            name: None,
        }
    }

    pub fn build(&self) -> Pointed {
        self.prepare().build()
    }

    pub async fn create<C>(&self, db: &C) -> Result<Pointed, FactoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        self.prepare().create(db).await
    }

    /// Resolves an already built model against the table, inserting it when unmatched.
    ///
    /// Runs on the given connection so a caller's transaction covers it.
    pub async fn resolve_in<C: ConnectionTrait>(
        &self,
        conn: &C,
        pointed: &Pointed,
    ) -> Result<Resolution<Pointed>, FactoryError> {
        let resolution = self
            .resolver
            .resolve_in(conn, pointed.to_active_model())
            .await?;

        Ok(match resolution {
            Resolution::Found(row) => Resolution::Found(Pointed::from_entity(row)),
            Resolution::Created(row) => Resolution::Created(Pointed::from_entity(row)),
        })
    }

    /// Restarts the sequence one past the highest persisted primary key.
    pub async fn reset_sequence_from_store<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<(), FactoryError> {
        let next = next_after_max_pk::<entity::prelude::PointedModel, _>(
            db,
            entity::pointed_model::Column::Id,
            self.sequence.base(),
        )
        .await?;
        self.sequence.reset_to(next);
        Ok(())
    }

    pub fn resolver(&self) -> &IdentityResolver<entity::prelude::PointedModel> {
        &self.resolver
    }
}

impl Default for PointedFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequenced for PointedFactory {
    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

pub struct PointedBuilder<'f> {
    factory: &'f PointedFactory,
    name: Option<String>,
}

impl PointedBuilder<'_> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn maybe_name(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.name = name;
        }
        self
    }

    /// Builds the model without touching the database.
    pub fn build(self) -> Pointed {
        let n = self.factory.sequence.next();

        Pointed {
            id: None,
            name: self.name.unwrap_or_else(|| sequenced("foo", n)),
        }
    }

    /// Returns the persisted model with this name, creating it when none exists.
    ///
    /// # Returns
    /// - `Ok(Pointed)` - Existing or newly created model
    /// - `Err(FactoryError::AmbiguousResolution)` - Several rows share the name
    /// - `Err(FactoryError::DbErr)` - Database error during lookup or insert
    pub async fn create<C>(self, db: &C) -> Result<Pointed, FactoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let factory = self.factory;
        let row = factory
            .resolver
            .get_or_create(db, self.build().to_active_model())
            .await?
            .into_model();

        Ok(Pointed::from_entity(row))
    }

    /// Like `create`, but inside the caller's connection or transaction.
    pub async fn resolve_in<C: ConnectionTrait>(
        self,
        conn: &C,
    ) -> Result<Resolution<Pointed>, FactoryError> {
        let factory = self.factory;
        let pointed = self.build();
        factory.resolve_in(conn, &pointed).await
    }
}
