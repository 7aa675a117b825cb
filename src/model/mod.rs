//! Domain models produced by the factories.
//!
//! Each model mirrors one entity from the `entity` crate but carries an optional primary
//! key, so a model that was only built (never persisted) has no key. Conversions to and
//! from entity rows happen here, at the persistence boundary.

pub mod non_integer_pk;
pub mod pointed;
pub mod standard;
pub mod with_file;

pub use non_integer_pk::NonIntegerPk;
pub use pointed::{Pointed, Pointer};
pub use standard::StandardModel;
pub use with_file::{WithFile, WithImage};
