//! File field materialization.
//!
//! A file field's content comes from exactly one place: an open reader, a filesystem
//! path, or explicit bytes (empty when nothing is given). The resulting file is written
//! to storage when the owning model is built, so an unsaved build still leaves a stored
//! file behind.

use std::{
    fmt, fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::{error::field::FieldError, storage::FileSystemStorage};

/// Filename used when neither a source nor an explicit filename names the file.
pub const DEFAULT_FILENAME: &str = "example.dat";

/// Upload directory used by the bundled models.
pub const DEFAULT_UPLOAD_TO: &str = "uploads";

/// An open reader used as a file source, optionally carrying the name it was opened from.
pub struct FileHandle {
    reader: Box<dyn Read + Send>,
    name: Option<PathBuf>,
}

impl FileHandle {
    /// Opens `path` for reading and remembers it as the handle's name.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        Ok(Self::new(file, path))
    }

    /// Wraps a reader whose content originates from `name`.
    pub fn new(reader: impl Read + Send + 'static, name: impl Into<PathBuf>) -> Self {
        Self {
            reader: Box::new(reader),
            name: Some(name.into()),
        }
    }

    /// Wraps a reader with no name; the field's default filename applies.
    pub fn anonymous(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            name: None,
        }
    }

    pub fn name(&self) -> Option<&Path> {
        self.name.as_deref()
    }

    fn read_all(mut self) -> Result<Vec<u8>, FieldError> {
        let mut content = Vec::new();
        self.reader
            .read_to_end(&mut content)
            .map_err(FieldError::ReadHandle)?;
        Ok(content)
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Parameters for generating a file field's content.
///
/// # Example
///
/// ```rust,ignore
/// use modelfactory::field::file::FileParams;
///
/// let params = FileParams::new()
///     .from_path("testdata/example.data")
///     .filename("example.foo");
/// ```
#[derive(Debug, Default)]
pub struct FileParams {
    data: Option<Vec<u8>>,
    from_file: Option<FileHandle>,
    from_path: Option<PathBuf>,
    filename: Option<String>,
}

impl FileParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses explicit bytes as content when no reader or path is supplied.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Reads content from an open handle. Mutually exclusive with `from_path`.
    pub fn from_file(mut self, handle: FileHandle) -> Self {
        self.from_file = Some(handle);
        self
    }

    /// Reads content from a path. An empty path counts as not supplied.
    pub fn from_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.from_path = Some(path.into());
        self
    }

    /// Overrides the filename derived from the source.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Resolves the filename and content described by these parameters.
    ///
    /// `make_data` produces the content when neither a handle nor a path is supplied; it
    /// receives the explicit bytes, if any.
    pub(crate) fn resolve(
        self,
        field: &str,
        default_filename: &str,
        make_data: impl FnOnce(Option<Vec<u8>>) -> Result<Vec<u8>, FieldError>,
    ) -> Result<(String, Vec<u8>), FieldError> {
        let from_path = self
            .from_path
            .filter(|path| !path.as_os_str().is_empty());

        let (source_name, content) = match (self.from_file, from_path) {
            (Some(_), Some(_)) => {
                return Err(FieldError::ConflictingSources {
                    field: field.to_string(),
                })
            }
            (None, Some(path)) => {
                let content = fs::read(&path).map_err(|source| FieldError::ReadSource {
                    path: path.clone(),
                    source,
                })?;
                (Some(path), content)
            }
            (Some(handle), None) => {
                let name = handle.name.clone();
                (name, handle.read_all()?)
            }
            (None, None) => (None, make_data(self.data)?),
        };

        let filename = match self.filename {
            Some(filename) => filename,
            None => source_name
                .as_deref()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| default_filename.to_string()),
        };

        Ok((filename, content))
    }
}

/// A stored file attached to a model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFile {
    name: String,
    content: Vec<u8>,
}

impl FieldFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Loads a stored file by name.
    pub fn load(storage: &FileSystemStorage, name: &str) -> Result<Self, FieldError> {
        Ok(Self::new(name, storage.open(name)?))
    }

    /// Storage-relative name, e.g. `uploads/example.dat`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last component of the stored name.
    pub fn file_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn read(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// What a factory should put in a file field.
#[derive(Debug)]
pub enum FileInput {
    /// Generate content from parameters.
    Generate(FileParams),
    /// Store a copy of an existing field file under its file name.
    Existing(FieldFile),
    /// Leave the field empty.
    Empty,
}

impl Default for FileInput {
    fn default() -> Self {
        Self::Generate(FileParams::default())
    }
}

impl From<FileParams> for FileInput {
    fn from(params: FileParams) -> Self {
        Self::Generate(params)
    }
}

impl From<FieldFile> for FileInput {
    fn from(file: FieldFile) -> Self {
        Self::Existing(file)
    }
}

impl From<Option<FieldFile>> for FileInput {
    fn from(file: Option<FieldFile>) -> Self {
        file.map_or(Self::Empty, Self::Existing)
    }
}

/// Materializer for one file field of a model.
#[derive(Debug, Clone)]
pub struct FileField {
    field: String,
    upload_to: String,
    default_filename: String,
}

impl FileField {
    /// Creates a materializer for `field`, storing under `upload_to`.
    pub fn new(field: impl Into<String>, upload_to: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            upload_to: upload_to.into(),
            default_filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Replaces the filename used when nothing else names the file.
    pub fn with_default_filename(mut self, filename: impl Into<String>) -> Self {
        self.default_filename = filename.into();
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn upload_to(&self) -> &str {
        &self.upload_to
    }

    /// Produces and stores the field's file.
    ///
    /// # Arguments
    /// - `storage` - Storage to write the file to
    /// - `input` - Parameters, an existing file to copy, or `Empty`
    ///
    /// # Returns
    /// - `Ok(Some(FieldFile))` - The stored file
    /// - `Ok(None)` - `FileInput::Empty` was given; nothing was stored
    /// - `Err(FieldError::ConflictingSources)` - Both a handle and a path were supplied
    /// - `Err(FieldError)` - Reading the source or writing to storage failed
    pub fn materialize(
        &self,
        storage: &FileSystemStorage,
        input: FileInput,
    ) -> Result<Option<FieldFile>, FieldError> {
        let (filename, content) = match input {
            FileInput::Empty => return Ok(None),
            FileInput::Existing(file) => (file.file_name().to_string(), file.content),
            FileInput::Generate(params) => {
                params.resolve(&self.field, &self.default_filename, |data| {
                    Ok(data.unwrap_or_default())
                })?
            }
        };

        self.store(storage, &filename, content).map(Some)
    }

    pub(crate) fn store(
        &self,
        storage: &FileSystemStorage,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<FieldFile, FieldError> {
        let name = storage.save(&self.upload_to, filename, &content)?;
        Ok(FieldFile::new(name, content))
    }
}
