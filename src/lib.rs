//! # kelvin
//!
//! Custom linear colormaps for scientific visualization.
//!
//! This library builds piecewise-linear colormaps ("gradients") from ordered
//! RGB stops, loads RGB color tables from delimited text files (including the
//! NCL/NCAR color-table layout), and fetches published color-table files over
//! HTTP so they can be turned into the same gradient format.
//!
//! ## Key Features
//!
//! - **Stop-based gradient construction**: equally spaced or explicitly
//!   positioned RGB anchors, in 8-bit or arithmetic channel ranges
//! - **Color table loading**: whitespace- or custom-delimited numeric tables
//!   with header/footer skipping
//! - **Color table fetching**: one-shot download from the NCL color-table
//!   archive (or any configured base address)
//! - **Rendering helpers**: colorbar strips as RGBA buffers or PNG bytes
//!
//! ## Architecture
//!
//! - **Builder**: [`GradientBuilder`] turns stops into an immutable [`Gradient`]
//! - **Loaders**: [`table`] parses local files, [`fetch`] downloads remote ones
//! - **Consumers**: anything accepting the [`Colormap`] trait, such as the
//!   colorbar renderer in [`render`]

pub mod colormaps;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod render;
pub mod table;

pub use colormaps::{get_colormap, ColorStop, Colormap, Gradient, GradientBuilder};
pub use error::{KelvinError, Result};
pub use fetch::{fetch_color_table, FetchConfig};
pub use logging::init_tracing;
pub use render::{colorbar_png, render_colorbar};
pub use table::{load_gradient, read_rgb_table, TableOptions};
