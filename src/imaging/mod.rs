//! Image loading and the enhancement passes applied to candidate crops.

mod enhance;

use std::borrow::Cow;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageError, ImageReader};

use crate::error::GoudaError;

pub use enhance::{
    contrast_remap, unsharp_mask, BLUR_SIGMA, BRIGHT_BOOST, BRIGHT_THRESHOLD, DARK_CUT,
};

/// Loads an image from `path`, optionally forcing it to 8-bit greyscale.
///
/// Returns `Ok(None)` for files that are not decodable images: an unknown
/// format, or content that the decoder rejects. Only failing to open the
/// file or hitting decoder resource limits is an error.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use gouda::imaging::read_image;
///
/// if let Some(image) = read_image(Path::new("scan.jpg"), true)? {
///     println!("{}x{}", image.width(), image.height());
/// }
/// # Ok::<(), gouda::GoudaError>(())
/// ```
pub fn read_image(path: &Path, greyscale: bool) -> Result<Option<DynamicImage>, GoudaError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if reader.format().is_none() {
        return Ok(None);
    }

    match reader.decode() {
        Ok(image) if greyscale => Ok(Some(DynamicImage::ImageLuma8(image.to_luma8()))),
        Ok(image) => Ok(Some(image)),
        Err(source @ ImageError::Limits(_)) => Err(GoudaError::ImageLoad {
            path: path.to_path_buf(),
            source,
        }),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "not a decodable image");
            Ok(None)
        }
    }
}

/// Borrows `image` if it is already 8-bit greyscale, otherwise converts it.
pub fn as_grey(image: &DynamicImage) -> Cow<'_, GrayImage> {
    match image {
        DynamicImage::ImageLuma8(grey) => Cow::Borrowed(grey),
        other => Cow::Owned(other.to_luma8()),
    }
}
