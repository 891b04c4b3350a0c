//! JSON files read and written by the line-finder tools.
//!
//! Dot files hold one frame (`[Dot, ...]`) or a list of frames
//! (`[[Dot, ...], ...]`). Reports and dot sets are saved as pretty JSON.
use crate::types::Dot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum DotFile {
    Frames(Vec<Vec<Dot>>),
    Frame(Vec<Dot>),
}

/// Load dot frames from a JSON file.
pub fn load_frames(path: &Path) -> Result<Vec<Vec<Dot>>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read dots {}: {e}", path.display()))?;
    let file: DotFile = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse dots {}: {e}", path.display()))?;
    Ok(match file {
        DotFile::Frames(frames) => frames,
        DotFile::Frame(dots) => vec![dots],
    })
}

/// Saves `value` (a report or a dot set) as pretty JSON.
///
/// The value is encoded before anything touches the disk; missing output
/// directories are created.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Cannot encode output for {}: {e}", path.display()))?;
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create output directory {}: {e}", dir.display()))?,
        _ => {}
    }
    fs::write(path, json).map_err(|e| format!("Cannot write output {}: {e}", path.display()))
}
