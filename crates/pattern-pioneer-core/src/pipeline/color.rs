//! Color normalization to opaque 8-bit RGB.

use image::{DynamicImage, Rgb, RgbImage};

/// Background that transparent pixels are composited onto.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Convert any decoded image to RGB8.
///
/// Images with an alpha channel are flattened onto an opaque white canvas
/// using their per-pixel alpha as the mask. Everything else is converted
/// directly.
pub fn normalize(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        img if img.color().has_alpha() => flatten_onto_background(&img),
        img => img.to_rgb8(),
    }
}

/// Composite an image with alpha onto [`BACKGROUND`].
fn flatten_onto_background(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = Rgb([
            blend(r, BACKGROUND[0], a),
            blend(g, BACKGROUND[1], a),
            blend(b, BACKGROUND[2], a),
        ]);
    }
    out
}

/// `fg * a + bg * (1 - a)` in 8-bit fixed point, rounded.
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    let value = fg as u32 * a + bg as u32 * (255 - a);
    ((value + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Luma, LumaA, Rgba, RgbaImage};

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(10, 255, 255), 10);
        assert_eq!(blend(10, 255, 0), 255);
        assert_eq!(blend(0, 255, 128), 127);
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));

        let rgb = normalize(DynamicImage::ImageRgba8(img));
        assert_eq!(*rgb.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*rgb.get_pixel(1, 0), Rgb([200, 100, 50]));
    }

    #[test]
    fn test_gray_alpha_is_flattened() {
        let img = GrayAlphaImage::from_pixel(3, 3, LumaA([0, 0]));
        let rgb = normalize(DynamicImage::ImageLumaA8(img));
        assert_eq!(rgb.dimensions(), (3, 3));
        assert!(rgb.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_grayscale_converted_without_change() {
        let img = GrayImage::from_pixel(4, 2, Luma([77]));
        let rgb = normalize(DynamicImage::ImageLuma8(img));
        assert_eq!(rgb.dimensions(), (4, 2));
        assert!(rgb.pixels().all(|p| *p == Rgb([77, 77, 77])));
    }

    #[test]
    fn test_sixteen_bit_rgba_is_flattened() {
        let img = DynamicImage::new_rgba16(5, 5);
        let rgb = normalize(img);
        assert!(rgb.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_rgb_passthrough() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        let rgb = normalize(DynamicImage::ImageRgb8(img.clone()));
        assert_eq!(rgb, img);
    }
}
