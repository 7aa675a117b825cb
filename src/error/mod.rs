//! Error types for factories and their collaborators.
//!
//! `FactoryError` is the top-level error returned by every factory operation. It wraps
//! the database, configuration and field errors with `#[from]` so `?` works across
//! layers, and adds the two failures that belong to the factories themselves: invalid
//! arguments and ambiguous get-or-create lookups.

pub mod config;
pub mod field;

use thiserror::Error;

use crate::error::{config::ConfigError, field::FieldError};

/// Top-level error type for factory operations.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// File or image field materialization error.
    #[error(transparent)]
    FieldErr(#[from] FieldError),

    /// Caller supplied arguments that cannot be honored.
    ///
    /// # Fields
    /// - Message describing which argument was invalid
    #[error("{0}")]
    InvalidArgument(String),

    /// A get-or-create lookup matched more than one persisted row.
    #[error("Lookup on {lookup} matched {matches} rows in '{model}'; expected at most one")]
    AmbiguousResolution {
        /// Table the lookup ran against
        model: String,
        /// Lookup columns and their values, formatted for display
        lookup: String,
        /// Number of rows observed (the query stops counting after two)
        matches: usize,
    },
}

impl FactoryError {
    /// Whether this error reports arguments the caller must not combine or omit.
    ///
    /// # Returns
    /// - `true` - For `InvalidArgument` and `FieldError::ConflictingSources`
    /// - `false` - For every other variant
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::FieldErr(FieldError::ConflictingSources { .. })
        )
    }
}
