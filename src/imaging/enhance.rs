//! Enhancement passes for greyscale crops.
//!
//! Engines are sensitive to blur and contrast. A crop is first sharpened with
//! an unsharp mask; if the engine still finds nothing, the sharpened crop is
//! pushed apart around mid-grey by [`contrast_remap`].

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

/// Standard deviation of the Gaussian used by [`unsharp_mask`].
pub const BLUR_SIGMA: f32 = 10.0;

/// Pixels at or above this value count as bright.
pub const BRIGHT_THRESHOLD: u8 = 0x80;

/// Added to bright pixels by [`contrast_remap`].
pub const BRIGHT_BOOST: u8 = 0x10;

/// Subtracted from dark pixels by [`contrast_remap`].
pub const DARK_CUT: u8 = 0x5a;

/// Unsharp mask: `1.5 * crop - 0.5 * blur(crop)`, rounded and clamped to 0..=255.
pub fn unsharp_mask(crop: &GrayImage) -> GrayImage {
    let blurred = gaussian_blur_f32(crop, BLUR_SIGMA);
    let mut sharpened = crop.clone();
    for (pixel, blur) in sharpened.pixels_mut().zip(blurred.pixels()) {
        let value = 1.5 * f32::from(pixel[0]) - 0.5 * f32::from(blur[0]);
        pixel[0] = value.round().clamp(0.0, 255.0) as u8;
    }
    sharpened
}

/// Brightens bright pixels and darkens dark ones, saturating at 0 and 255.
pub fn contrast_remap(crop: &GrayImage) -> GrayImage {
    let mut remapped = crop.clone();
    for pixel in remapped.pixels_mut() {
        pixel[0] = if pixel[0] >= BRIGHT_THRESHOLD {
            pixel[0].saturating_add(BRIGHT_BOOST)
        } else {
            pixel[0].saturating_sub(DARK_CUT)
        };
    }
    remapped
}
