use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases and, optionally, a temporary media directory. Use the builder pattern to add
/// entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{PointedModel, PointerModel};
///
/// let test = TestBuilder::new()
///     .with_table(PointedModel)
///     .with_table(PointerModel)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether `build()` should create a temporary media directory.
    media: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured and no media directory.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables for the get-or-create models.
    ///
    /// Adds, in dependency order:
    /// - PointedModel
    /// - PointerModel
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_pointer_tables(self) -> Self {
        self.with_table(PointedModel).with_table(PointerModel)
    }

    /// Adds every table the bundled factories write to.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_factory_tables(self) -> Self {
        self.with_table(StandardModel)
            .with_table(NonIntegerPk)
            .with_pointer_tables()
            .with_table(WithFile)
            .with_table(WithImage)
    }

    /// Requests a temporary media directory for file and image fields.
    ///
    /// The directory and everything written into it are removed when the returned
    /// `TestContext` is dropped.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_media(mut self) -> Self {
        self.media = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then creates the media directory
    /// if requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to create the media directory
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.media {
            setup.media()?;
        }

        Ok(setup)
    }
}
