//! Model Factory Test Utils
//!
//! Provides shared testing utilities for the model factory crates. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases, scoped
//! media directories, and in-memory fixtures.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and media directory
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity rows and on-disk test data
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::PointedModel;
//!
//! #[tokio::test]
//! async fn test_pointed_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(PointedModel)
//!         .with_media()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let media_root = test.media_root().unwrap();
//!     // Perform database and storage operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
