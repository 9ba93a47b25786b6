//! Colormap construction for scientific visualization.
//!
//! This module provides stop-based linear gradient construction plus a small
//! registry of built-in gradients.

pub mod colormap;
pub mod gradient;
pub mod presets;

pub use colormap::{get_colormap, Colormap};
pub use gradient::{ColorStop, Gradient, GradientBuilder, LUT_SIZE};
