use super::line_finder::LineFinderConfig;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub result_json: Option<PathBuf>,
}

/// Runner configuration of the `find_lines` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct FindLinesToolConfig {
    /// JSON file holding the dots, either one frame or a list of frames.
    pub input: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(flatten)]
    pub finder: LineFinderConfig,
}

pub fn load_config(path: &Path) -> Result<FindLinesToolConfig, ConfigError> {
    let config: FindLinesToolConfig = super::read_json(path)?;
    config.finder.check(path)?;
    Ok(config)
}
