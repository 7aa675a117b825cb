//! Models carrying a file or an image field.

use sea_orm::ActiveValue;

use crate::{
    error::field::FieldError,
    field::{FieldFile, ImageFieldFile},
    storage::FileSystemStorage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithFile {
    pub id: Option<i32>,
    pub afile: Option<FieldFile>,
}

impl WithFile {
    pub fn pk(&self) -> Option<i32> {
        self.id
    }

    /// Converts a row into the domain model, loading the file content from storage.
    ///
    /// # Returns
    /// - `Ok(WithFile)` - Model with its file, if the row names one
    /// - `Err(FieldError::Storage)` - The named file could not be read
    pub fn from_entity(
        entity: entity::with_file::Model,
        storage: &FileSystemStorage,
    ) -> Result<Self, FieldError> {
        let afile = entity
            .afile
            .as_deref()
            .map(|name| FieldFile::load(storage, name))
            .transpose()?;

        Ok(Self {
            id: Some(entity.id),
            afile,
        })
    }

    pub fn to_active_model(&self) -> entity::with_file::ActiveModel {
        entity::with_file::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            afile: ActiveValue::Set(self.afile.as_ref().map(|file| file.name().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithImage {
    pub id: Option<i32>,
    pub animage: Option<ImageFieldFile>,
}

impl WithImage {
    pub fn pk(&self) -> Option<i32> {
        self.id
    }

    /// Converts a row into the domain model, loading and decoding the image from storage.
    pub fn from_entity(
        entity: entity::with_image::Model,
        storage: &FileSystemStorage,
    ) -> Result<Self, FieldError> {
        let animage = entity
            .animage
            .as_deref()
            .map(|name| ImageFieldFile::load(storage, name))
            .transpose()?;

        Ok(Self {
            id: Some(entity.id),
            animage,
        })
    }

    pub fn to_active_model(&self) -> entity::with_image::ActiveModel {
        entity::with_image::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            animage: ActiveValue::Set(
                self.animage
                    .as_ref()
                    .map(|image| image.name().to_string()),
            ),
        }
    }
}
