//! JSON configuration for the line finder and its command-line tool.

pub mod find_lines;
pub mod line_finder;

pub use line_finder::{load_config, LineFinderConfig, PhantomDefinition, SegmentationConfig};

use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
