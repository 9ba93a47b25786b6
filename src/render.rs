//! Colorbar rendering.
//!
//! Draws a colormap into an RGBA buffer for display next to a plot, and
//! encodes it as PNG bytes for embedding.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::io::Cursor;
use tracing::debug;

use crate::colormaps::Colormap;
use crate::error::{KelvinError, Result};

/// Render a horizontal colorbar strip sweeping the colormap left to right.
pub fn render_colorbar(colormap: &dyn Colormap, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(KelvinError::Validation {
            param: "dimensions".to_string(),
            message: format!("colorbar dimensions must be non-zero, got {}x{}", width, height),
        });
    }

    debug!(
        colormap = colormap.name(),
        width = width,
        height = height,
        "Rendering colorbar"
    );

    let mut img = ImageBuffer::new(width, height);
    for x in 0..width {
        let t = if width > 1 {
            x as f32 / (width - 1) as f32
        } else {
            0.0
        };
        let color = colormap.map_normalized(t);
        for y in 0..height {
            img.put_pixel(x, y, Rgba(color));
        }
    }

    Ok(img)
}

/// Render a colorbar and encode it as PNG bytes.
pub fn colorbar_png(colormap: &dyn Colormap, width: u32, height: u32) -> Result<Vec<u8>> {
    let img = render_colorbar(colormap, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|e| KelvinError::Image {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(buffer.into_inner())
}
