//! Colormap trait and registry.
//!
//! This module defines the common interface renderers consume and a lookup
//! for the built-in gradients.

use crate::error::{KelvinError, Result};

use super::gradient::Gradient;
use super::presets;

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f32) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Get a built-in gradient by name (case-insensitive)
pub fn get_colormap(name: &str) -> Result<Gradient> {
    match name.to_lowercase().as_str() {
        "coolwarm" => presets::coolwarm(),
        "rdbu" => presets::rdbu(),
        "precip" => presets::precip(),
        "gray" => presets::gray(),
        _ => Err(KelvinError::Validation {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        }),
    }
}
