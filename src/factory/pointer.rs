//! Get-or-create factory keyed by `name`, with a pointed target sub-factory.
//!
//! Creating a pointer looks up its own key first. A match is returned unchanged and the
//! target sub-factory is left alone, so the target behind a given pointer name is
//! resolved exactly once. Without a match the target is resolved (get or create) and the
//! pointer inserted, all inside one transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, TransactionSession,
    TransactionTrait,
};

use crate::{
    error::FactoryError,
    factory::{
        helpers::{next_after_max_pk, sequenced},
        pointed::PointedFactory,
        Sequenced,
    },
    model::{Pointed, Pointer},
    resolver::IdentityResolver,
    sequence::Sequence,
};

/// Factory for `Pointer`, with `name = "bar{n}"` and a `PointedFactory` target.
pub struct PointerFactory {
    sequence: Sequence,
    target: PointedFactory,
    resolver: IdentityResolver<entity::prelude::PointerModel>,
}

impl PointerFactory {
    pub fn new() -> Self {
        Self::with_target(PointedFactory::new())
    }

    /// Creates a factory whose targets come from `target`.
    pub fn with_target(target: PointedFactory) -> Self {
        Self {
            sequence: Sequence::default(),
            target,
            resolver: IdentityResolver::new([entity::pointer_model::Column::Name]),
        }
    }

    /// The sub-factory producing targets.
    pub fn target_factory(&self) -> &PointedFactory {
        &self.target
    }

    pub fn prepare(&self) -> PointerBuilder<'_> {
        PointerBuilder {
            factory: self,
            name: None,
            target: TargetInput::Generate(None),
        }
    }

    pub fn build(&self) -> Pointer {
        self.prepare().build()
    }

    pub async fn create<C>(&self, db: &C) -> Result<Pointer, FactoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        self.prepare().create(db).await
    }

    /// Restarts the sequence one past the highest persisted primary key.
    pub async fn reset_sequence_from_store<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<(), FactoryError> {
        let next = next_after_max_pk::<entity::prelude::PointerModel, _>(
            db,
            entity::pointer_model::Column::Id,
            self.sequence.base(),
        )
        .await?;
        self.sequence.reset_to(next);
        Ok(())
    }
}

impl Default for PointerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequenced for PointerFactory {
    fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

enum TargetInput {
    /// Let the sub-factory generate the target, optionally overriding its name.
    Generate(Option<String>),
    /// Use this target as is.
    Given(Pointed),
}

pub struct PointerBuilder<'f> {
    factory: &'f PointerFactory,
    name: Option<String>,
    target: TargetInput,
}

impl PointerBuilder<'_> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Uses an explicit target instead of the sub-factory.
    ///
    /// On create an unsaved target is resolved by its name; a persisted one is used as is.
    pub fn target(mut self, target: Pointed) -> Self {
        self.target = TargetInput::Given(target);
        self
    }

    /// Passes a name override through to the target sub-factory.
    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.target = TargetInput::Generate(Some(name.into()));
        self
    }

    /// Builds the pointer and its target without touching the database.
    pub fn build(self) -> Pointer {
        let factory = self.factory;
        let n = factory.sequence.next();
        let target = match self.target {
            TargetInput::Given(target) => target,
            TargetInput::Generate(name) => factory.target.prepare().maybe_name(name).build(),
        };

        Pointer {
            id: None,
            name: self.name.unwrap_or_else(|| sequenced("bar", n)),
            target,
        }
    }

    /// Returns the persisted pointer with this name, creating it and its target when
    /// none exists.
    ///
    /// # Returns
    /// - `Ok(Pointer)` - Existing pointer (unchanged) or a new one with its resolved target
    /// - `Err(FactoryError::AmbiguousResolution)` - Several pointers or targets share a name
    /// - `Err(FactoryError::DbErr)` - Database error; nothing is committed
    pub async fn create<C>(self, db: &C) -> Result<Pointer, FactoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let factory = self.factory;
        let n = factory.sequence.next();
        let name = self.name.unwrap_or_else(|| sequenced("bar", n));

        let txn = db.begin().await?;

        let candidate = entity::pointer_model::ActiveModel {
            name: ActiveValue::Set(name.clone()),
            ..Default::default()
        };

        if let Some(existing) = factory.resolver.find(&txn, &candidate).await? {
            let target = entity::prelude::PointedModel::find_by_id(existing.target_id)
                .one(&txn)
                .await?
                .ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Pointed model {} referenced by pointer '{}'",
                        existing.target_id, existing.name
                    ))
                })?;
            txn.commit().await?;

            tracing::debug!(name = %name, "Resolved existing pointer");
            return Ok(Pointer::from_entity(existing, target));
        }

        let target = match self.target {
            TargetInput::Given(target) if target.id.is_some() => target,
            TargetInput::Given(target) => factory
                .target
                .resolve_in(&txn, &target)
                .await?
                .into_model(),
            TargetInput::Generate(target_name) => factory
                .target
                .prepare()
                .maybe_name(target_name)
                .resolve_in(&txn)
                .await?
                .into_model(),
        };

        let pointer = Pointer {
            id: None,
            name,
            target,
        };
        let active = pointer.to_active_model().ok_or_else(|| {
            FactoryError::InvalidArgument("Pointer target has no primary key".to_string())
        })?;
        let row = active.insert(&txn).await?;

        txn.commit().await?;

        tracing::debug!(name = %pointer.name, target = %pointer.target.name, "Created pointer");
        Ok(Pointer {
            id: Some(row.id),
            ..pointer
        })
    }
}
