//! Model Factory
//!
//! Test-object factories for SeaORM models. Factories generate model instances with
//! sequence-driven values, resolve get-or-create lookups (cascading through related
//! factories), and materialize file and image fields from bytes, open readers or
//! filesystem paths.
//!
//! # Overview
//!
//! - **Sequence** (`sequence`): per-factory counter feeding generated values
//! - **IdentityResolver** (`resolver`): transactional get-or-create keyed by lookup columns
//! - **Field materializers** (`field`): produce file and image content plus logical names
//! - **Storage** (`storage`): filesystem storage with collision renaming
//! - **Factories** (`factory`): build unsaved or create persisted models
//!
//! # Usage
//!
//! ```rust,ignore
//! use modelfactory::factory::{PointerFactory, StandardFactory, Sequenced};
//!
//! let standard = StandardFactory::new();
//! assert_eq!(standard.build().foo, "foo1");
//! standard.reset_sequence();
//!
//! let pointers = PointerFactory::new();
//! let first = pointers.prepare().name("one").create(&db).await?;
//! let again = pointers.prepare().name("one").create(&db).await?;
//! assert_eq!(first, again);
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod field;
pub mod model;
pub mod resolver;
pub mod sequence;
pub mod startup;
pub mod storage;

pub use error::FactoryError;
