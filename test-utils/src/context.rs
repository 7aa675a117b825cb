use std::path::Path;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing database connection and media directory.
///
/// Provides an in-memory SQLite database connection and a temporary media directory for
/// isolated tests. Both are created lazily on first access and live as long as the test
/// context; the media directory is deleted with everything in it when the context drops.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Optional temporary directory used as storage root for file fields.
    ///
    /// Initialized lazily when `media()` is first called.
    pub media: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection or media directory
    pub fn new() -> Self {
        Self {
            db: None,
            media: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the temporary media directory.
    ///
    /// # Returns
    /// - `Ok(&Path)` - Root of the media directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn media(&mut self) -> Result<&Path, TestError> {
        match self.media {
            Some(ref dir) => Ok(dir.path()),
            None => {
                let dir = self.media.insert(tempfile::tempdir()?);

                Ok(dir.path())
            }
        }
    }

    /// Root of the media directory, if one was created.
    pub fn media_root(&self) -> Option<&Path> {
        self.media.as_ref().map(TempDir::path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
