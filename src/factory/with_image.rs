//! Factory for the model with an image field.

use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::{
    error::FactoryError,
    field::{
        file::DEFAULT_UPLOAD_TO,
        image::{ImageField, ImageInput},
    },
    model::WithImage,
    storage::FileSystemStorage,
};

/// Factory for `WithImage`.
///
/// Without parameters each build stores a 100x100 blue JPEG named `example.jpg`.
pub struct WithImageFactory {
    storage: FileSystemStorage,
    animage: ImageField,
}

impl WithImageFactory {
    pub fn new(storage: FileSystemStorage) -> Self {
        Self {
            storage,
            animage: ImageField::new("animage", DEFAULT_UPLOAD_TO),
        }
    }

    pub fn storage(&self) -> &FileSystemStorage {
        &self.storage
    }

    pub fn prepare(&self) -> WithImageBuilder<'_> {
        WithImageBuilder {
            factory: self,
            animage: ImageInput::default(),
        }
    }

    pub fn build(&self) -> Result<WithImage, FactoryError> {
        self.prepare().build()
    }

    pub async fn create<C: ConnectionTrait>(&self, db: &C) -> Result<WithImage, FactoryError> {
        self.prepare().create(db).await
    }
}

pub struct WithImageBuilder<'f> {
    factory: &'f WithImageFactory,
    animage: ImageInput,
}

impl WithImageBuilder<'_> {
    /// Sets what goes into `animage`: parameters, an existing image, or `ImageInput::Empty`.
    pub fn animage(mut self, animage: impl Into<ImageInput>) -> Self {
        self.animage = animage.into();
        self
    }

    pub fn build(self) -> Result<WithImage, FactoryError> {
        let factory = self.factory;
        let animage = factory
            .animage
            .materialize(&factory.storage, self.animage)?;

        Ok(WithImage { id: None, animage })
    }

    /// Materializes the image and inserts the model, deleting the stored image again
    /// when the insert fails.
    pub async fn create<C: ConnectionTrait>(self, db: &C) -> Result<WithImage, FactoryError> {
        let factory = self.factory;
        let model = self.build()?;

        let row = match model.to_active_model().insert(db).await {
            Ok(row) => row,
            Err(err) => {
                if let Some(animage) = &model.animage {
                    factory.storage.delete(animage.name())?;
                }
                return Err(err.into());
            }
        };

        Ok(WithImage {
            id: Some(row.id),
            ..model
        })
    }
}
