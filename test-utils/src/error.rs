use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create the temporary media directory or write test data.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to encode a test image.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
