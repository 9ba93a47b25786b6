//! Test data generation utilities.
//!
//! This module provides functions to generate color table files with known
//! contents for testing the loader and the full gradient pipeline.

use std::io::Write;
use std::path::Path;

type Result<T> = std::io::Result<T>;

/// The RGB rows shared by every generated table, in file order.
pub const TABLE_ROWS: [[f32; 3]; 5] = [
    [255.0, 0.0, 0.0],
    [255.0, 255.0, 0.0],
    [255.0, 255.0, 255.0],
    [0.0, 157.0, 0.0],
    [0.0, 0.0, 255.0],
];

/// Creates a plain whitespace-delimited color table.
pub fn create_basic_rgb_table(path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    for [r, g, b] in TABLE_ROWS {
        writeln!(file, "{:>3} {:>3} {:>3}", r as u8, g as u8, b as u8)?;
    }
    Ok(())
}

/// Creates a color table in the published NCL layout: a comment, a header
/// line with the color count, the rows, and a trailing footer line.
pub fn create_ncl_style_table(path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# generated by the kelvin test suite")?;
    writeln!(file, "ncolors = {}", TABLE_ROWS.len())?;
    for [r, g, b] in TABLE_ROWS {
        writeln!(file, "{:>3} {:>3} {:>3}", r as u8, g as u8, b as u8)?;
    }
    writeln!(file, "end")?;
    Ok(())
}

/// Creates a comma-delimited color table.
pub fn create_csv_table(path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    for [r, g, b] in TABLE_ROWS {
        writeln!(file, "{}, {}, {}", r as u8, g as u8, b as u8)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_basic_rgb_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("basic.rgb");

        assert!(create_basic_rgb_table(&path).is_ok());
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), TABLE_ROWS.len());
    }

    #[test]
    fn test_create_ncl_style_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ncl.rgb");

        assert!(create_ncl_style_table(&path).is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('#'));
        assert!(content.contains("ncolors"));
        assert!(content.trim_end().ends_with("end"));
    }

    #[test]
    fn test_create_csv_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");

        assert!(create_csv_table(&path).is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().all(|line| line.matches(',').count() == 2));
    }
}
