//! Shared helper utilities for factory methods.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QuerySelect};

/// Returns the value a sequence should continue from: one past the highest persisted
/// integer primary key, or `base` when the table is empty.
///
/// # Arguments
/// - `db` - Database connection
/// - `pk` - Integer primary key column of the entity
/// - `base` - Base of the sequence being restarted
///
/// # Returns
/// - `Ok(u64)` - Next sequence value
/// - `Err(DbErr)` - Database error during the aggregate query
pub async fn next_after_max_pk<E, C>(db: &C, pk: E::Column, base: u64) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let max: Option<Option<i32>> = E::find()
        .select_only()
        .column_as(pk.max(), "max_pk")
        .into_tuple()
        .one(db)
        .await?;

    Ok(max
        .flatten()
        .and_then(|pk| u64::try_from(pk).ok())
        .map_or(base, |pk| pk + 1))
}

/// Formats a sequence value with a prefix, e.g. `("foo", 3)` into `"foo3"`.
pub fn sequenced(prefix: &str, n: u64) -> String {
    format!("{}{}", prefix, n)
}
