//! Factory for the model with a file field.

use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::{
    error::FactoryError,
    field::file::{FileField, FileInput, DEFAULT_UPLOAD_TO},
    model::WithFile,
    storage::FileSystemStorage,
};

/// Factory for `WithFile`.
///
/// The file is written to storage whenever a model is built, including unsaved builds.
///
/// # Example
///
/// ```rust,ignore
/// use modelfactory::{factory::WithFileFactory, field::FileParams};
///
/// let factory = WithFileFactory::new(storage);
/// let model = factory
///     .prepare()
///     .afile(FileParams::new().data("foo"))
///     .build()?;
/// assert_eq!(model.afile.unwrap().name(), "uploads/example.dat");
/// ```
pub struct WithFileFactory {
    storage: FileSystemStorage,
    afile: FileField,
}

impl WithFileFactory {
    /// Creates a factory storing files under `uploads/` in `storage`.
    pub fn new(storage: FileSystemStorage) -> Self {
        Self {
            storage,
            afile: FileField::new("afile", DEFAULT_UPLOAD_TO),
        }
    }

    /// Replaces the materializer used for `afile`.
    pub fn with_field(mut self, afile: FileField) -> Self {
        self.afile = afile;
        self
    }

    pub fn storage(&self) -> &FileSystemStorage {
        &self.storage
    }

    pub fn prepare(&self) -> WithFileBuilder<'_> {
        WithFileBuilder {
            factory: self,
            afile: FileInput::default(),
        }
    }

    pub fn build(&self) -> Result<WithFile, FactoryError> {
        self.prepare().build()
    }

    pub async fn create<C: ConnectionTrait>(&self, db: &C) -> Result<WithFile, FactoryError> {
        self.prepare().create(db).await
    }
}

pub struct WithFileBuilder<'f> {
    factory: &'f WithFileFactory,
    afile: FileInput,
}

impl WithFileBuilder<'_> {
    /// Sets what goes into `afile`: parameters, an existing file, or `FileInput::Empty`.
    pub fn afile(mut self, afile: impl Into<FileInput>) -> Self {
        self.afile = afile.into();
        self
    }

    /// Materializes the file and builds the model without persisting it.
    ///
    /// # Returns
    /// - `Ok(WithFile)` - Unsaved model; its file is already in storage
    /// - `Err(FactoryError::FieldErr)` - Conflicting sources, unreadable source or storage failure
    pub fn build(self) -> Result<WithFile, FactoryError> {
        let factory = self.factory;
        let afile = factory.afile.materialize(&factory.storage, self.afile)?;

        Ok(WithFile { id: None, afile })
    }

    /// Materializes the file and inserts the model.
    ///
    /// # Returns
    /// - `Ok(WithFile)` - Persisted model
    /// - `Err(FactoryError::FieldErr)` - Materialization failed; nothing was inserted
    /// - `Err(FactoryError::DbErr)` - Insert failed; the stored file was deleted again
    pub async fn create<C: ConnectionTrait>(self, db: &C) -> Result<WithFile, FactoryError> {
        let factory = self.factory;
        let model = self.build()?;

        let row = match model.to_active_model().insert(db).await {
            Ok(row) => row,
            Err(err) => {
                if let Some(afile) = &model.afile {
                    factory.storage.delete(afile.name())?;
                }
                return Err(err.into());
            }
        };

        Ok(WithFile {
            id: Some(row.id),
            ..model
        })
    }
}
