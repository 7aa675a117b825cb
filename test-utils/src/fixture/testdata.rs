//! On-disk test data for file and image fields.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::TestError;

/// Content of the bundled test file.
pub const TESTFILE_CONTENT: &[u8] = b"example_data\n";

/// File name of the bundled test file.
pub const TESTFILE_NAME: &str = "example.data";

/// Absolute path of the bundled test file, `testdata/example.data`.
pub fn testfile_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(TESTFILE_NAME)
}

/// Writes a solid-color JPEG of the given size into `dir`.
///
/// # Arguments
/// - `dir` - Directory to write into, e.g. a test context's media root
/// - `file_name` - Name of the file to create
/// - `width` - Image width in pixels
/// - `height` - Image height in pixels
///
/// # Returns
/// - `Ok(PathBuf)` - Path of the written image
/// - `Err(TestError::Image)` - Encoding or writing the image failed
pub fn write_test_image(
    dir: &Path,
    file_name: &str,
    width: u32,
    height: u32,
) -> Result<PathBuf, TestError> {
    let path = dir.join(file_name);
    RgbImage::from_pixel(width, height, Rgb([0, 128, 0])).save_with_format(&path, ImageFormat::Jpeg)?;

    Ok(path)
}
