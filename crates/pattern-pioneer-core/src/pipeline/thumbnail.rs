//! Aspect-preserving downscale into a square bounding box.

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Resampling filter used for every downscale.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Target dimensions for fitting `width x height` into `max_size x max_size`.
///
/// Images already inside the box keep their size; nothing is ever enlarged.
/// The long edge lands exactly on `max_size` and the short edge is rounded,
/// never below one pixel.
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width <= max_size && height <= max_size {
        return (width, height);
    }
    let scale = max_size as f64 / width.max(height) as f64;
    let new_width = ((width as f64 * scale).round() as u32).clamp(1, max_size);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, max_size);
    (new_width, new_height)
}

/// Shrink `image` to fit within `max_size`, returning it unchanged if it already fits.
pub fn downscale(image: RgbImage, max_size: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, max_size);
    if (new_width, new_height) == (width, height) {
        return image;
    }
    tracing::trace!(
        "Resizing {}x{} -> {}x{}",
        width,
        height,
        new_width,
        new_height
    );
    imageops::resize(&image, new_width, new_height, FILTER)
}
