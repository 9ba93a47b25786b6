//! Built-in gradients.
//!
//! Each preset is an 8-bit stop table fed through the regular builder, so
//! the registry exercises the same construction path callers use.

use crate::error::Result;

use super::gradient::Gradient;

/// Blue to white to red stop table - good for temperature data
const COOLWARM: [[f32; 3]; 32] = [
    [59.0, 76.0, 192.0], // Dark blue
    [68.0, 90.0, 204.0],
    [77.0, 104.0, 215.0],
    [87.0, 117.0, 225.0],
    [98.0, 130.0, 234.0],
    [108.0, 142.0, 241.0],
    [119.0, 154.0, 247.0],
    [130.0, 165.0, 251.0],
    [141.0, 176.0, 254.0],
    [152.0, 185.0, 255.0],
    [163.0, 194.0, 255.0],
    [174.0, 201.0, 253.0],
    [184.0, 208.0, 249.0],
    [194.0, 213.0, 244.0],
    [204.0, 217.0, 238.0],
    [213.0, 219.0, 230.0],
    [221.0, 221.0, 221.0], // White/gray in the middle
    [229.0, 216.0, 209.0],
    [236.0, 211.0, 197.0],
    [241.0, 204.0, 185.0],
    [245.0, 196.0, 173.0],
    [247.0, 187.0, 160.0],
    [247.0, 177.0, 148.0],
    [247.0, 166.0, 135.0],
    [244.0, 154.0, 123.0],
    [241.0, 141.0, 111.0],
    [236.0, 127.0, 99.0],
    [229.0, 112.0, 88.0],
    [222.0, 96.0, 77.0],
    [213.0, 80.0, 66.0],
    [203.0, 62.0, 56.0],
    [192.0, 40.0, 47.0], // Dark red
];

/// Precipitation stop table in the NCL style: dry white through greens and
/// blues into saturated purple, with anchors denser at the low end.
const PRECIP: [[f32; 3]; 7] = [
    [255.0, 255.0, 255.0],
    [199.0, 233.0, 192.0],
    [116.0, 196.0, 118.0],
    [35.0, 139.0, 69.0],
    [33.0, 113.0, 181.0],
    [84.0, 39.0, 143.0],
    [63.0, 0.0, 125.0],
];

const PRECIP_POSITIONS: [f32; 7] = [0.0, 0.1, 0.25, 0.45, 0.65, 0.85, 1.0];

/// Coolwarm - blue to red through white
pub fn coolwarm() -> Result<Gradient> {
    Gradient::builder("coolwarm")
        .colors(COOLWARM)
        .eight_bit(true)
        .build()
}

/// RdBu - red to blue through white (reversed coolwarm)
pub fn rdbu() -> Result<Gradient> {
    Gradient::builder("rdbu")
        .colors(COOLWARM)
        .eight_bit(true)
        .reversed(true)
        .build()
}

/// Precipitation - white through greens and blues into purple
pub fn precip() -> Result<Gradient> {
    Gradient::builder("precip")
        .colors(PRECIP)
        .positions(PRECIP_POSITIONS)
        .eight_bit(true)
        .build()
}

/// Grayscale - black to white
pub fn gray() -> Result<Gradient> {
    Gradient::from_colors("gray", &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
}
