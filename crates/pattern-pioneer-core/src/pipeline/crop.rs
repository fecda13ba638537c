//! Center crop ("zoom") of the working image.

use image::{imageops, RgbImage};

use crate::types::CropRegion;

/// Compute the centered region kept by a crop zoom factor.
///
/// Returns `None` when `zoom <= 1.0` (no crop). Each side is
/// `floor(side / zoom)`, clamped to at least one pixel, and the margins are
/// `(side - cropped) / 2` rounded down per axis, so an odd difference leaves
/// the extra pixel on the right/bottom.
pub fn center_crop_region(width: u32, height: u32, zoom: f64) -> Option<CropRegion> {
    if zoom.is_nan() || zoom <= 1.0 || width == 0 || height == 0 {
        return None;
    }
    let crop_width = ((width as f64 / zoom) as u32).clamp(1, width);
    let crop_height = ((height as f64 / zoom) as u32).clamp(1, height);

    Some(CropRegion {
        x: (width - crop_width) / 2,
        y: (height - crop_height) / 2,
        width: crop_width,
        height: crop_height,
    })
}

/// Apply a center crop to `image`, returning the region used (if any).
pub fn center_crop(image: RgbImage, zoom: f64) -> (RgbImage, Option<CropRegion>) {
    match center_crop_region(image.width(), image.height(), zoom) {
        Some(region) => {
            let cropped =
                imageops::crop_imm(&image, region.x, region.y, region.width, region.height)
                    .to_image();
            (cropped, Some(region))
        }
        None => (image, None),
    }
}
