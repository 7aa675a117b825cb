//! Image field materialization.
//!
//! Works like a file field, except that without an explicit source it synthesizes a
//! solid-color image. Width and height are always read back from the stored bytes, so
//! an image taken from a file or path reports its real dimensions.

use std::{io::Cursor, str::FromStr};

use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};

use crate::{
    error::field::FieldError,
    field::file::{FieldFile, FileField, FileHandle, FileParams},
    storage::FileSystemStorage,
};

/// Width of a synthesized image when none is given; the height follows the width.
pub const DEFAULT_WIDTH: u32 = 100;

/// Stem of the default filename; the extension follows the image format.
const DEFAULT_STEM: &str = "example";

/// RGB color for synthesized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageColor(pub [u8; 3]);

impl ImageColor {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const BLUE: Self = Self([0, 0, 255]);
    pub const GRAY: Self = Self([128, 128, 128]);
    pub const GREEN: Self = Self([0, 128, 0]);
    pub const RED: Self = Self([255, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255]);
    pub const YELLOW: Self = Self([255, 255, 0]);

    /// Looks up a color by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "blue" => Self::BLUE,
            "gray" | "grey" => Self::GRAY,
            "green" => Self::GREEN,
            "red" => Self::RED,
            "white" => Self::WHITE,
            "yellow" => Self::YELLOW,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl Default for ImageColor {
    fn default() -> Self {
        Self::BLUE
    }
}

impl FromStr for ImageColor {
    type Err = FieldError;

    /// Parses a color name or `#rrggbb`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value)
            .or_else(|| Self::from_hex(value))
            .ok_or_else(|| FieldError::UnknownColor(value.to_string()))
    }
}

/// Parameters for generating an image field's content.
///
/// Source parameters behave exactly as in `FileParams`. `width`, `height`, `color` and
/// `format` only apply when the image is synthesized.
#[derive(Debug, Default)]
pub struct ImageParams {
    file: FileParams,
    width: Option<u32>,
    height: Option<u32>,
    color: Option<ImageColor>,
    format: Option<ImageFormat>,
}

impl ImageParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses explicit encoded image bytes instead of synthesizing.
    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.file = self.file.data(data);
        self
    }

    pub fn from_file(mut self, handle: FileHandle) -> Self {
        self.file = self.file.from_file(handle);
        self
    }

    pub fn from_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.file = self.file.from_path(path);
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.file = self.file.filename(filename);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Height of the synthesized image; defaults to the width.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn color(mut self, color: ImageColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Encoding of the synthesized image; JPEG by default.
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// A stored image attached to a model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFieldFile {
    file: FieldFile,
    width: u32,
    height: u32,
}

impl ImageFieldFile {
    /// Wraps a stored file, decoding its header for the dimensions.
    ///
    /// # Returns
    /// - `Ok(ImageFieldFile)` - The file with its dimensions
    /// - `Err(FieldError::Image)` - The content is not a decodable image
    pub fn from_file(file: FieldFile) -> Result<Self, FieldError> {
        let (width, height) = dimensions(file.read())?;

        Ok(Self {
            file,
            width,
            height,
        })
    }

    /// Loads a stored image by name.
    pub fn load(storage: &FileSystemStorage, name: &str) -> Result<Self, FieldError> {
        Self::from_file(FieldFile::load(storage, name)?)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn file_name(&self) -> &str {
        self.file.file_name()
    }

    pub fn read(&self) -> &[u8] {
        self.file.read()
    }

    pub fn len(&self) -> usize {
        self.file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }

    pub fn as_file(&self) -> &FieldFile {
        &self.file
    }
}

/// What a factory should put in an image field.
#[derive(Debug)]
pub enum ImageInput {
    /// Synthesize or read an image from parameters.
    Generate(ImageParams),
    /// Store a copy of an existing image under its file name.
    Existing(ImageFieldFile),
    /// Leave the field empty.
    Empty,
}

impl Default for ImageInput {
    fn default() -> Self {
        Self::Generate(ImageParams::default())
    }
}

impl From<ImageParams> for ImageInput {
    fn from(params: ImageParams) -> Self {
        Self::Generate(params)
    }
}

impl From<ImageFieldFile> for ImageInput {
    fn from(image: ImageFieldFile) -> Self {
        Self::Existing(image)
    }
}

impl From<Option<ImageFieldFile>> for ImageInput {
    fn from(image: Option<ImageFieldFile>) -> Self {
        image.map_or(Self::Empty, Self::Existing)
    }
}

/// Materializer for one image field of a model.
#[derive(Debug, Clone)]
pub struct ImageField {
    file: FileField,
}

impl ImageField {
    /// Creates a materializer for `field`, storing under `upload_to`.
    pub fn new(field: impl Into<String>, upload_to: impl Into<String>) -> Self {
        Self {
            file: FileField::new(field, upload_to),
        }
    }

    pub fn field(&self) -> &str {
        self.file.field()
    }

    pub fn upload_to(&self) -> &str {
        self.file.upload_to()
    }

    /// Produces and stores the field's image.
    ///
    /// # Arguments
    /// - `storage` - Storage to write the image to
    /// - `input` - Parameters, an existing image to copy, or `Empty`
    ///
    /// # Returns
    /// - `Ok(Some(ImageFieldFile))` - The stored image with its decoded dimensions
    /// - `Ok(None)` - `ImageInput::Empty` was given; nothing was stored
    /// - `Err(FieldError::ConflictingSources)` - Both a handle and a path were supplied
    /// - `Err(FieldError)` - Reading, encoding, decoding or storing failed
    pub fn materialize(
        &self,
        storage: &FileSystemStorage,
        input: ImageInput,
    ) -> Result<Option<ImageFieldFile>, FieldError> {
        let (filename, content) = match input {
            ImageInput::Empty => return Ok(None),
            ImageInput::Existing(image) => {
                (image.file_name().to_string(), image.read().to_vec())
            }
            ImageInput::Generate(params) => {
                let format = params.format.unwrap_or(ImageFormat::Jpeg);
                let width = params.width.unwrap_or(DEFAULT_WIDTH);
                let height = params.height.unwrap_or(width);
                let color = params.color.unwrap_or_default();
                let default_filename = default_filename(format);

                params
                    .file
                    .resolve(self.field(), &default_filename, |data| match data {
                        Some(data) => Ok(data),
                        None => synthesize(width, height, color, format),
                    })?
            }
        };

        // Undecodable content never reaches storage.
        let (width, height) = dimensions(&content)?;
        let file = self.file.store(storage, &filename, content)?;

        Ok(Some(ImageFieldFile {
            file,
            width,
            height,
        }))
    }
}

/// Reads the dimensions from an encoded image's header.
fn dimensions(content: &[u8]) -> Result<(u32, u32), FieldError> {
    let dimensions = ImageReader::new(Cursor::new(content))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .into_dimensions()?;

    Ok(dimensions)
}

fn default_filename(format: ImageFormat) -> String {
    let extension = format.extensions_str().first().copied().unwrap_or("img");
    format!("{}.{}", DEFAULT_STEM, extension)
}

/// Encodes a solid-color RGB image.
fn synthesize(
    width: u32,
    height: u32,
    color: ImageColor,
    format: ImageFormat,
) -> Result<Vec<u8>, FieldError> {
    let image = RgbImage::from_pixel(width, height, Rgb(color.0));

    let mut content = Vec::new();
    DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut content), format)?;

    Ok(content)
}
