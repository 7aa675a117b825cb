//! Get-or-create resolution keyed by a fixed set of lookup columns.
//!
//! A factory that declares lookup columns never inserts a duplicate of a row matching
//! those columns: it resolves the candidate against the table first and only inserts
//! when nothing matched. The check and the insert run inside one transaction.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    IdenStatic, IntoActiveModel, QueryFilter, QuerySelect, TransactionSession, TransactionTrait,
    Value,
};

use crate::error::FactoryError;

/// Outcome of a get-or-create resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<M> {
    /// An existing row matched the lookup and was returned unchanged.
    Found(M),
    /// Nothing matched; the candidate was inserted.
    Created(M),
}

impl<M> Resolution<M> {
    /// Whether the row was inserted by this resolution.
    pub fn created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Returns the resolved row regardless of how it was obtained.
    pub fn into_model(self) -> M {
        match self {
            Self::Found(model) | Self::Created(model) => model,
        }
    }
}

/// Resolves candidates for entity `E` against a fixed list of lookup columns.
///
/// # Example
///
/// ```rust,ignore
/// use modelfactory::resolver::IdentityResolver;
///
/// let resolver = IdentityResolver::<entity::prelude::PointedModel>::new([
///     entity::pointed_model::Column::Name,
/// ]);
/// let pointed = resolver.get_or_create(&db, candidate).await?.into_model();
/// ```
pub struct IdentityResolver<E: EntityTrait> {
    lookup: Vec<E::Column>,
}

impl<E> IdentityResolver<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    /// Creates a resolver keyed by `lookup`.
    ///
    /// # Arguments
    /// - `lookup` - Columns whose candidate values identify an existing row
    ///
    /// # Returns
    /// - `IdentityResolver` - New resolver
    pub fn new(lookup: impl IntoIterator<Item = E::Column>) -> Self {
        Self {
            lookup: lookup.into_iter().collect(),
        }
    }

    /// The columns this resolver matches on.
    pub fn lookup(&self) -> &[E::Column] {
        &self.lookup
    }

    /// Finds the persisted row matching the candidate's lookup values.
    ///
    /// Only the lookup columns are compared; every other candidate value is ignored.
    ///
    /// # Arguments
    /// - `conn` - Connection or open transaction to query
    /// - `candidate` - Active model carrying a value for every lookup column
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Exactly one row matched
    /// - `Ok(None)` - No row matched
    /// - `Err(FactoryError::AmbiguousResolution)` - More than one row matched
    /// - `Err(FactoryError::InvalidArgument)` - A lookup column is not set on the candidate
    /// - `Err(FactoryError::DbErr)` - Database error during query
    pub async fn find<C>(
        &self,
        conn: &C,
        candidate: &E::ActiveModel,
    ) -> Result<Option<E::Model>, FactoryError>
    where
        C: ConnectionTrait,
    {
        let keys = self.lookup_values(candidate)?;

        let condition = keys
            .iter()
            .fold(Condition::all(), |cond, (column, value)| {
                cond.add(column.eq(value.clone()))
            });

        let mut matches = E::find().filter(condition).limit(2).all(conn).await?;

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            count => Err(FactoryError::AmbiguousResolution {
                model: E::default().table_name().to_string(),
                lookup: describe(&keys),
                matches: count,
            }),
        }
    }

    /// Returns the row matching the candidate, inserting the candidate when none does.
    ///
    /// Runs on the given connection without opening a transaction, so callers composing
    /// several resolutions can share one.
    ///
    /// # Arguments
    /// - `conn` - Connection or open transaction
    /// - `candidate` - Full set of values to insert when nothing matches
    ///
    /// # Returns
    /// - `Ok(Resolution::Found(Model))` - Existing row, unchanged
    /// - `Ok(Resolution::Created(Model))` - Newly inserted row
    /// - `Err(FactoryError)` - See `find`, plus database errors during insert
    pub async fn resolve_in<C>(
        &self,
        conn: &C,
        candidate: E::ActiveModel,
    ) -> Result<Resolution<E::Model>, FactoryError>
    where
        C: ConnectionTrait,
    {
        let table = E::default().table_name();

        if let Some(existing) = self.find(conn, &candidate).await? {
            tracing::debug!(table, "Resolved existing row");
            return Ok(Resolution::Found(existing));
        }

        let created = candidate.insert(conn).await?;
        tracing::debug!(table, "Created row for unmatched lookup");

        Ok(Resolution::Created(created))
    }

    /// Get-or-create inside its own transaction.
    ///
    /// # Arguments
    /// - `db` - Database connection to open the transaction on
    /// - `candidate` - Full set of values to insert when nothing matches
    ///
    /// # Returns
    /// - `Ok(Resolution)` - Resolved row, committed
    /// - `Err(FactoryError)` - Lookup, insert or commit failure; the transaction is rolled back
    pub async fn get_or_create<C>(
        &self,
        db: &C,
        candidate: E::ActiveModel,
    ) -> Result<Resolution<E::Model>, FactoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;
        let resolution = self.resolve_in(&txn, candidate).await?;
        txn.commit().await?;

        Ok(resolution)
    }

    fn lookup_values(
        &self,
        candidate: &E::ActiveModel,
    ) -> Result<Vec<(E::Column, Value)>, FactoryError> {
        if self.lookup.is_empty() {
            return Err(FactoryError::InvalidArgument(format!(
                "No lookup columns configured for '{}'",
                E::default().table_name()
            )));
        }

        self.lookup
            .iter()
            .map(|column| match candidate.get(*column).into_value() {
                Some(value) => Ok((*column, value)),
                None => Err(FactoryError::InvalidArgument(format!(
                    "Lookup column '{}' is not set on the candidate for '{}'",
                    column.as_str(),
                    E::default().table_name()
                ))),
            })
            .collect()
    }
}

fn describe<C: IdenStatic>(keys: &[(C, Value)]) -> String {
    keys.iter()
        .map(|(column, value)| format!("{}={:?}", column.as_str(), value))
        .collect::<Vec<_>>()
        .join(", ")
}
