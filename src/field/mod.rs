//! File and image field materializers.
//!
//! Each materializer turns one input (parameters, an existing stored file, or nothing)
//! into a stored file plus its logical name.

pub mod file;
pub mod image;

pub use file::{FieldFile, FileField, FileHandle, FileInput, FileParams};
pub use image::{ImageColor, ImageField, ImageFieldFile, ImageInput, ImageParams};
