use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures while materializing a file or image field.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Both an open reader and a filesystem path were supplied for one field.
    ///
    /// The two sources are mutually exclusive; this is an invalid-argument failure and
    /// nothing is written to storage.
    #[error("Both from_file and from_path were provided for field '{field}'; supply only one")]
    ConflictingSources {
        /// Name of the field being materialized
        field: String,
    },

    /// Failure to read the file named by a path source.
    #[error("Failed to read file source '{}': {source}", path.display())]
    ReadSource {
        /// The path that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failure to read an open file handle to the end.
    #[error("Failed to read file handle: {0}")]
    ReadHandle(#[source] io::Error),

    /// Failure to write, read or delete a stored file.
    #[error("Storage operation failed for '{name}': {source}")]
    Storage {
        /// Storage-relative name of the file
        name: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A filename that would escape its upload directory.
    #[error("Invalid filename '{0}'")]
    InvalidFilename(String),

    /// A color name that is neither a known name nor `#rrggbb`.
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    /// Image encoding or decoding error.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
