//! Remote color table fetching.
//!
//! A thin blocking download shim: one streaming GET per call, no retry,
//! resume, or integrity checking. Fetched files use the pass-through text
//! layout understood by [`crate::table`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

/// Base address of the NCL/NCAR color table archive
pub const DEFAULT_BASE_URL: &str = "https://www.ncl.ucar.edu/Document/Graphics/ColorTables/Files/";

/// Fetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base address the file name is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory downloads are written to (None = current working directory)
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
}

impl FetchConfig {
    /// Load a fetcher configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FetchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            save_dir: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Download the named color table file and write it into `save_dir`
/// (or the current working directory when unset).
///
/// Returns the path of the written file. Non-success HTTP statuses and I/O
/// failures surface directly; nothing is retried.
pub fn fetch_color_table(name: &str, config: &FetchConfig) -> Result<PathBuf> {
    let url = format!("{}{}", config.base_url, name);
    info!(file = name, url = %url, "Downloading color table");

    let mut response = reqwest::blocking::get(&url)?.error_for_status()?;

    let dest = match &config.save_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };
    let mut file = std::fs::File::create(&dest)?;
    let bytes = response.copy_to(&mut file)?;

    info!(
        file = name,
        dest = %dest.display(),
        bytes = bytes,
        "Download complete"
    );
    Ok(dest)
}
