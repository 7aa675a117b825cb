//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity rows and on-disk
//! test data. Unlike factories, fixtures do NOT insert data into the database; tests that
//! need a pre-existing row convert the fixture with `into_active_model()` and insert it
//! themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//! use sea_orm::{ActiveModelTrait, IntoActiveModel};
//!
//! // Create in-memory entity model (no DB)
//! let pointed = fixture::pointed_model::entity();
//!
//! // Seed a row the factory did not create
//! fixture::pointed_model::entity_builder()
//!     .name("one")
//!     .build()
//!     .into_active_model()
//!     .insert(db)
//!     .await?;
//! ```

pub mod pointed_model;
pub mod pointer_model;
pub mod standard_model;
pub mod testdata;

pub use pointed_model::{
    entity as pointed_model_entity, entity_builder as pointed_model_entity_builder,
};
pub use pointer_model::{
    entity as pointer_model_entity, entity_builder as pointer_model_entity_builder,
};
pub use standard_model::{
    entity as standard_model_entity, entity_builder as standard_model_entity_builder,
};
