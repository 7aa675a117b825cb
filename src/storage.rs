//! Filesystem storage for file and image fields.
//!
//! Stored names are storage-relative and always use `/` as separator, e.g.
//! `uploads/example.dat`. Saving never overwrites: when a name is taken the stem gets a
//! numeric suffix (`example_1.dat`, `example_2.dat`, ...) and the extension is kept.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::error::field::FieldError;

/// Storage rooted at a media directory.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    root: PathBuf,
}

impl FileSystemStorage {
    /// Creates a storage rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of a stored name.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path below the storage root
    /// - `Err(FieldError::InvalidFilename)` - A component is `.` or `..` or contains a backslash
    pub fn path(&self, name: &str) -> Result<PathBuf, FieldError> {
        name.split('/')
            .filter(|part| !part.is_empty())
            .try_fold(self.root.clone(), |path, part| {
                if part == "." || part == ".." || part.contains('\\') {
                    return Err(FieldError::InvalidFilename(name.to_string()));
                }
                Ok(path.join(part))
            })
    }

    /// Whether a file is stored under `name`. Invalid names never exist.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_ok_and(|path| path.exists())
    }

    /// Returns `name` if it is free, otherwise the first free `stem_N.ext` variant.
    ///
    /// # Arguments
    /// - `name` - Storage-relative name, e.g. `uploads/example.data`
    ///
    /// # Returns
    /// - `String` - A storage-relative name with no file behind it
    pub fn available_name(&self, name: &str) -> String {
        if !self.exists(name) {
            return name.to_string();
        }

        let (dir, file_name) = match name.rsplit_once('/') {
            Some((dir, file_name)) => (Some(dir), file_name),
            None => (None, name),
        };
        let (stem, extension) = split_extension(file_name);

        let mut counter = 1u32;
        loop {
            let candidate_file = match extension {
                Some(extension) => format!("{}_{}.{}", stem, counter, extension),
                None => format!("{}_{}", stem, counter),
            };
            let candidate = match dir {
                Some(dir) => format!("{}/{}", dir, candidate_file),
                None => candidate_file,
            };
            if !self.exists(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Saves `content` under `upload_to/filename`, renaming on collision.
    ///
    /// # Arguments
    /// - `upload_to` - Directory inside the storage root, `/`-separated
    /// - `filename` - Requested file name without directories
    /// - `content` - Bytes to write
    ///
    /// # Returns
    /// - `Ok(String)` - The stored name actually used
    /// - `Err(FieldError::InvalidFilename)` - `filename` is empty or contains a separator or `..`,
    ///   or `upload_to` has a `.` or `..` component
    /// - `Err(FieldError::Storage)` - Failed to create the directory or write the file
    pub fn save(
        &self,
        upload_to: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<String, FieldError> {
        validate_filename(filename)?;

        let upload_to = upload_to.trim_matches('/');
        let requested = if upload_to.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", upload_to, filename)
        };

        let dir = self.path(upload_to)?;
        fs::create_dir_all(&dir).map_err(|source| FieldError::Storage {
            name: requested.clone(),
            source,
        })?;

        let name = self.available_name(&requested);
        if name != requested {
            tracing::debug!(requested = %requested, stored = %name, "Renamed colliding file");
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path(&name)?)
            .map_err(|source| FieldError::Storage {
                name: name.clone(),
                source,
            })?;
        file.write_all(content)
            .map_err(|source| FieldError::Storage {
                name: name.clone(),
                source,
            })?;

        Ok(name)
    }

    /// Reads the content of a stored file.
    pub fn open(&self, name: &str) -> Result<Vec<u8>, FieldError> {
        fs::read(self.path(name)?).map_err(|source| FieldError::Storage {
            name: name.to_string(),
            source,
        })
    }

    /// Deletes a stored file. Deleting a missing file is not an error.
    pub fn delete(&self, name: &str) -> Result<(), FieldError> {
        match fs::remove_file(self.path(name)?) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FieldError::Storage {
                name: name.to_string(),
                source,
            }),
        }
    }
}

/// Splits `example.tar.gz` into `("example.tar", Some("gz"))`.
///
/// Leading dots do not start an extension, so `.hidden` has none.
fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rfind('.') {
        Some(index) if index > 0 => (&file_name[..index], Some(&file_name[index + 1..])),
        _ => (file_name, None),
    }
}

fn validate_filename(filename: &str) -> Result<(), FieldError> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(FieldError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}
