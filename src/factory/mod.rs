//! Factories for generating model instances.
//!
//! Every factory owns its definition state (sequence, sub-factories, field
//! materializers) and hands out builders that carry per-call overrides. A builder
//! either builds an unsaved model or creates a persisted one. Factories declaring lookup
//! columns create through get-or-create instead of a plain insert.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use modelfactory::factory::{standard::StandardFactory, Sequenced};
//!
//! let factory = StandardFactory::new();
//!
//! // Unsaved, sequence-driven values
//! let first = factory.build();
//! assert_eq!(first.foo, "foo1");
//!
//! // Persisted, with overrides
//! let forced = factory.prepare().id(10).create(&db).await?;
//!
//! factory.reset_sequence();
//! ```
//!
//! # Available Factories
//!
//! - `standard` - Integer primary key with a sequence field
//! - `non_integer_pk` - String primary key taken from the sequence
//! - `pointed` - Get-or-create on `name`
//! - `pointer` - Get-or-create on `name`, with a pointed target sub-factory
//! - `with_file` - File field materialized into storage
//! - `with_image` - Image field materialized into storage

pub mod helpers;
pub mod non_integer_pk;
pub mod pointed;
pub mod pointer;
pub mod standard;
pub mod with_file;
pub mod with_image;

#[cfg(test)]
mod test;

use crate::sequence::Sequence;

pub use non_integer_pk::NonIntegerPkFactory;
pub use pointed::PointedFactory;
pub use pointer::PointerFactory;
pub use standard::StandardFactory;
pub use with_file::WithFileFactory;
pub use with_image::WithImageFactory;

/// Factories that draw generated values from a sequence.
pub trait Sequenced {
    fn sequence(&self) -> &Sequence;

    /// Restores the factory's sequence to its base value.
    fn reset_sequence(&self) {
        self.sequence().reset();
    }
}
