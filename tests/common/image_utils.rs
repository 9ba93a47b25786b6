//! Image inspection utilities for testing.
//!
//! This module provides helper functions for verifying rendered colorbars.

use image::{ImageFormat, RgbaImage};

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Return the color of a colorbar column, asserting the column is uniform.
///
/// # Panics
///
/// Panics if `x` is out of bounds or the column holds more than one color.
pub fn uniform_column_color(img: &RgbaImage, x: u32) -> [u8; 4] {
    let top = img.get_pixel(x, 0).0;
    for y in 1..img.height() {
        let pixel = img.get_pixel(x, y).0;
        assert_eq!(
            pixel, top,
            "Column {} is not uniform: {:?} at y=0 vs {:?} at y={}",
            x, top, pixel, y
        );
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_detect_image_format() {
        let img = RgbaImage::new(2, 2);
        let mut png_bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .unwrap();

        let format = detect_image_format(&png_bytes).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_uniform_column_color() {
        let mut img = RgbaImage::new(2, 3);
        for y in 0..3 {
            img.put_pixel(0, y, Rgba([10, 20, 30, 255]));
            img.put_pixel(1, y, Rgba([40, 50, 60, 255]));
        }

        assert_eq!(uniform_column_color(&img, 0), [10, 20, 30, 255]);
        assert_eq!(uniform_column_color(&img, 1), [40, 50, 60, 255]);
    }
}
