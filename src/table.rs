//! RGB color table loading.
//!
//! This module reads delimited text files whose rows are numeric (R, G, B)
//! triples - the layout used by published NCL/NCAR color tables - and turns
//! them into stop sequences or directly into gradients.

use std::path::Path;
use tracing::debug;

use crate::colormaps::Gradient;
use crate::error::{KelvinError, Result};
use crate::logging::log_table_stats;

/// Options controlling how a color table file is parsed.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Number of leading data lines to skip
    pub skip_header: usize,
    /// Number of trailing data lines to skip
    pub skip_footer: usize,
    /// Column delimiter; any run of whitespace when unset
    pub delimiter: Option<char>,
}

/// Read a color table file into an ordered list of RGB triples.
///
/// Empty lines and lines starting with `#` are ignored; header and footer
/// skip counts apply to the remaining data lines. Every surviving row must
/// hold exactly three finite numbers.
pub fn read_rgb_table(path: &Path, options: &TableOptions) -> Result<Vec<[f32; 3]>> {
    if !path.exists() {
        return Err(KelvinError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let content = std::fs::read_to_string(path)?;
    debug!("Opened color table: {}", path.display());

    // Data lines with their 1-based line numbers, comments and blanks dropped.
    let data_lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let skipped = options.skip_header + options.skip_footer;
    if skipped >= data_lines.len() {
        return Err(KelvinError::Table {
            path: path.display().to_string(),
            line: 0,
            message: format!(
                "no data rows left after skipping {} of {} lines",
                skipped,
                data_lines.len()
            ),
        });
    }
    let rows = &data_lines[options.skip_header..data_lines.len() - options.skip_footer];

    let mut triples = Vec::with_capacity(rows.len());
    for (line, row) in rows {
        triples.push(parse_row(path, *line, row, options.delimiter)?);
    }

    log_table_stats(&path.display().to_string(), triples.len(), skipped);
    Ok(triples)
}

/// Read a color table file and build a gradient from it.
///
/// Published color tables carry 8-bit channel values, so normalization by
/// 255 is always applied.
pub fn load_gradient(path: &Path, options: &TableOptions, name: &str) -> Result<Gradient> {
    let triples = read_rgb_table(path, options)?;
    Gradient::builder(name)
        .colors(triples)
        .eight_bit(true)
        .build()
}

/// Parse a single data row into an RGB triple
fn parse_row(path: &Path, line: usize, row: &str, delimiter: Option<char>) -> Result<[f32; 3]> {
    let tokens: Vec<&str> = match delimiter {
        Some(delimiter) => row.split(delimiter).map(str::trim).collect(),
        None => row.split_whitespace().collect(),
    };

    if tokens.len() != 3 {
        return Err(KelvinError::Table {
            path: path.display().to_string(),
            line,
            message: format!("expected 3 columns, found {}", tokens.len()),
        });
    }

    let mut triple = [0.0f32; 3];
    for (value, token) in triple.iter_mut().zip(tokens.iter()) {
        *value = token.parse::<f32>().map_err(|_| KelvinError::Table {
            path: path.display().to_string(),
            line,
            message: format!("invalid numeric value '{}'", token),
        })?;
        if !value.is_finite() {
            return Err(KelvinError::Table {
                path: path.display().to_string(),
                line,
                message: format!("non-finite value '{}'", token),
            });
        }
    }

    Ok(triple)
}
