//! Stop-based linear gradient construction.
//!
//! A [`Gradient`] is built from an ordered sequence of RGB stops and holds
//! three independent piecewise-linear channel functions, pre-sampled into a
//! fixed 256-entry lookup table for rendering.

use serde::{Deserialize, Serialize};

use crate::error::{KelvinError, Result};

use super::colormap::Colormap;

/// Number of discrete levels each gradient is sampled into.
pub const LUT_SIZE: usize = 256;

/// Tolerance used when checking that explicit positions reach 0 and 1.
const POSITION_EPSILON: f32 = 1e-6;

/// A single gradient anchor: an RGB color at a position along [0, 1].
///
/// Channel values are stored in arithmetic range [0, 1]; 8-bit input is
/// normalized during construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position of this anchor along the gradient, in [0, 1]
    pub position: f32,
    /// RGB channel intensities in [0, 1]
    pub color: [f32; 3],
}

/// A named piecewise-linear colormap.
///
/// Immutable once constructed: a pure function of the input colors,
/// positions, and flags. Two builds from the same inputs are equivalent but
/// independent values.
#[derive(Debug, Clone)]
pub struct Gradient {
    name: String,
    stops: Vec<ColorStop>,
    lut: Vec<[f32; 3]>,
}

impl Gradient {
    /// Start building a gradient with the given name
    pub fn builder(name: impl Into<String>) -> GradientBuilder {
        GradientBuilder::new(name)
    }

    /// Build a gradient from equally spaced arithmetic-range colors
    pub fn from_colors(name: impl Into<String>, colors: &[[f32; 3]]) -> Result<Self> {
        GradientBuilder::new(name).colors(colors.iter().copied()).build()
    }

    /// Get the name of this gradient
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The anchor stops, in gradient order
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Number of anchor stops
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the gradient has no stops (never true for a built gradient)
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The pre-sampled lookup table, always [`LUT_SIZE`] entries
    pub fn lut(&self) -> &[[f32; 3]] {
        &self.lut
    }

    /// Evaluate the channel functions exactly at `t`.
    ///
    /// `t` is clamped to [0, 1]; positions outside the range covered by the
    /// stops hold the nearest stop's color.
    pub fn sample(&self, t: f32) -> [f32; 3] {
        sample_stops(&self.stops, t)
    }
}

/// Piecewise-linear evaluation over an ordered stop sequence
fn sample_stops(stops: &[ColorStop], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);

    let mut prev = stops[0];
    if t <= prev.position {
        return prev.color;
    }
    for stop in &stops[1..] {
        if t <= stop.position {
            let denom = (stop.position - prev.position).max(POSITION_EPSILON);
            let u = ((t - prev.position) / denom).clamp(0.0, 1.0);
            return [
                lerp(prev.color[0], stop.color[0], u),
                lerp(prev.color[1], stop.color[1], u),
                lerp(prev.color[2], stop.color[2], u),
            ];
        }
        prev = *stop;
    }
    prev.color
}

impl Colormap for Gradient {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        let index = (value.clamp(0.0, 1.0) * (LUT_SIZE - 1) as f32).round() as usize;
        let [r, g, b] = self.lut[index];
        [to_u8(r), to_u8(g), to_u8(b), 255]
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for [`Gradient`].
///
/// Colors are ordered so that the first is the lowest value on the colorbar
/// and the last is the highest. Channel values may be 8-bit [0, 255] (set
/// [`eight_bit`](Self::eight_bit)) or arithmetic [0, 1] (default).
#[derive(Debug, Clone)]
pub struct GradientBuilder {
    name: String,
    colors: Vec<[f32; 3]>,
    positions: Option<Vec<f32>>,
    eight_bit: bool,
    reversed: bool,
}

impl GradientBuilder {
    /// Create a builder with the given gradient name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
            positions: None,
            eight_bit: false,
            reversed: false,
        }
    }

    /// Set the ordered color sequence (at least two RGB triples)
    pub fn colors<I>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Dictate the location of each color along [0, 1].
    ///
    /// Must have the same length as the color sequence. When combined with
    /// [`reversed`](Self::reversed), positions are assigned after the colors
    /// have been reversed, so they anchor the reversed order.
    pub fn positions<I>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        self.positions = Some(positions.into_iter().collect());
        self
    }

    /// Treat channel values as 8-bit [0, 255]; each is divided by 255
    pub fn eight_bit(mut self, eight_bit: bool) -> Self {
        self.eight_bit = eight_bit;
        self
    }

    /// Flip the color scheme before positions are assigned
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Build the gradient.
    ///
    /// The endpoint check on explicit positions rejects a list only when its
    /// first entry is away from 0 and its last entry is away from 1 at the
    /// same time; a list satisfying either endpoint is accepted. Positions
    /// between the endpoints are assumed increasing and are not checked.
    pub fn build(self) -> Result<Gradient> {
        let mut colors = self.colors;

        if colors.len() < 2 {
            return Err(KelvinError::Validation {
                param: "colors".to_string(),
                message: format!("at least two colors are required, got {}", colors.len()),
            });
        }

        if self.reversed {
            colors.reverse();
        }

        let positions = match self.positions {
            Some(positions) => {
                if positions.len() != colors.len() {
                    return Err(KelvinError::Validation {
                        param: "positions".to_string(),
                        message: "position length must be the same as colors".to_string(),
                    });
                }
                let first = positions[0];
                let last = positions[positions.len() - 1];
                if (first - 0.0).abs() > POSITION_EPSILON && (last - 1.0).abs() > POSITION_EPSILON {
                    return Err(KelvinError::Validation {
                        param: "positions".to_string(),
                        message: "position must start with 0 and end with 1".to_string(),
                    });
                }
                positions
            }
            None => linspace(0.0, 1.0, colors.len()),
        };

        if self.eight_bit {
            for color in &mut colors {
                for channel in color.iter_mut() {
                    *channel /= 255.0;
                }
            }
        }

        let stops: Vec<ColorStop> = positions
            .into_iter()
            .zip(colors)
            .map(|(position, color)| ColorStop { position, color })
            .collect();

        let lut = (0..LUT_SIZE)
            .map(|i| sample_stops(&stops, i as f32 / (LUT_SIZE - 1) as f32))
            .collect();

        Ok(Gradient {
            name: self.name,
            stops,
            lut,
        })
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive
fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    let step = (end - start) / (count - 1) as f32;
    (0..count).map(|i| start + step * i as f32).collect()
}

/// Linear interpolation between two channel values
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
